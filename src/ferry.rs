//! River-crossing puzzle (missionaries and cannibals) as a `StateSpace`.
//!
//! `population` missionaries and as many cannibals start on the origin bank with
//! a boat holding at most `capacity` people. On neither bank may missionaries be
//! outnumbered by cannibals, unless no missionary is there. The same search
//! engines that solve sliding puzzles solve this one unchanged.
use crate::solver::{GoalSpace, StateSpace};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bank {
    Origin,
    Destination,
}

impl Bank {
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Origin => Bank::Destination,
            Bank::Destination => Bank::Origin,
        }
    }
}

/// Head counts on the origin bank plus the boat's position. The destination
/// bank holds everyone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RiverState {
    pub missionaries: u8,
    pub cannibals: u8,
    pub boat: Bank,
}

impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.boat {
            Bank::Origin => 'L',
            Bank::Destination => 'R',
        };
        write!(f, "({}, {}, {})", self.missionaries, self.cannibals, side)
    }
}

/// Passengers carried by one crossing, from whichever bank the boat is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub missionaries: u8,
    pub cannibals: u8,
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}M{}C", self.missionaries, self.cannibals)
    }
}

#[derive(Clone, Debug)]
pub struct FerryPuzzle {
    population: u8,
    capacity: u8,
    loads: Vec<Crossing>,
    goal: RiverState,
}

impl Default for FerryPuzzle {
    /// The classic instance: three of each, two seats.
    fn default() -> Self {
        FerryPuzzle::new(3, 2)
    }
}

impl FerryPuzzle {
    /// # Arguments
    /// * `population`: missionaries, and separately cannibals, starting on the origin bank.
    /// * `capacity`: seats in the boat. A crossing needs at least one rower, so a
    ///   capacity of zero leaves the start state without successors.
    pub fn new(population: u8, capacity: u8) -> Self {
        // Loads listed by boat size, then with missionaries first.
        let loads = (1..=capacity)
            .flat_map(|seats| {
                (0..=seats)
                    .rev()
                    .map(move |m| Crossing {
                        missionaries: m,
                        cannibals: seats - m,
                    })
            })
            .collect();
        FerryPuzzle {
            population,
            capacity,
            loads,
            goal: RiverState {
                missionaries: 0,
                cannibals: 0,
                boat: Bank::Destination,
            },
        }
    }

    pub fn population(&self) -> u8 {
        self.population
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn start(&self) -> RiverState {
        RiverState {
            missionaries: self.population,
            cannibals: self.population,
            boat: Bank::Origin,
        }
    }

    /// Whether a split of people between the banks is safe.
    ///
    /// `missionaries` and `cannibals` count the origin bank; counts outside
    /// `0..=population` are rejected.
    pub fn is_safe(&self, missionaries: i16, cannibals: i16) -> bool {
        let total = i16::from(self.population);
        if !(0..=total).contains(&missionaries) || !(0..=total).contains(&cannibals) {
            return false;
        }
        let (far_m, far_c) = (total - missionaries, total - cannibals);
        (missionaries == 0 || missionaries >= cannibals) && (far_m == 0 || far_m >= far_c)
    }

    /// Plays `crossing` from the boat's current bank, if the result is safe.
    pub fn cross(&self, state: &RiverState, crossing: Crossing) -> Option<RiverState> {
        let sign: i16 = match state.boat {
            Bank::Origin => -1,
            Bank::Destination => 1,
        };
        let m = i16::from(state.missionaries) + sign * i16::from(crossing.missionaries);
        let c = i16::from(state.cannibals) + sign * i16::from(crossing.cannibals);
        if !self.is_safe(m, c) {
            return None;
        }
        Some(RiverState {
            missionaries: u8::try_from(m).ok()?,
            cannibals: u8::try_from(c).ok()?,
            boat: state.boat.opposite(),
        })
    }
}

impl StateSpace for FerryPuzzle {
    type State = RiverState;
    type Move = Crossing;

    fn successors(&self, state: &RiverState) -> Vec<(Crossing, RiverState)> {
        self.loads
            .iter()
            .filter_map(|&load| self.cross(state, load).map(|next| (load, next)))
            .collect()
    }

    fn is_goal(&self, state: &RiverState) -> bool {
        *state == self.goal
    }
}

impl GoalSpace for FerryPuzzle {
    fn goal(&self) -> &RiverState {
        &self.goal
    }
}
