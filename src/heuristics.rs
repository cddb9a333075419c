//! Remaining-cost estimates for A*.
//!
//! Every estimate here is admissible and consistent for unit-cost sliding moves,
//! which is what lets A* close states for good after their first expansion.
use crate::engine::{Board, BLANK};
use clap::ValueEnum;

/// Estimates the number of moves still needed to turn `state` into `goal`.
pub trait Heuristic<T> {
    fn estimate(&self, state: &T, goal: &T) -> u32;
}

/// Sum of each numbered tile's grid distance (rows plus columns) from its goal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanDistance;

/// Number of numbered tiles not on their goal cell.
///
/// Never larger than `ManhattanDistance` on the same pair, so A* guided by it
/// usually expands more states.
#[derive(Clone, Copy, Debug, Default)]
pub struct MisplacedTiles;

/// The zero estimate; turns A* into uniform-cost search on any state type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blind;

impl Heuristic<Board> for ManhattanDistance {
    fn estimate(&self, state: &Board, goal: &Board) -> u32 {
        let cols = state.cols();
        let mut goal_index = vec![0usize; goal.len()];
        for (idx, &tile) in goal.tiles().iter().enumerate() {
            if let Some(slot) = goal_index.get_mut(tile as usize) {
                *slot = idx;
            }
        }

        state
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(idx, &tile)| {
                let target = goal_index.get(tile as usize).copied().unwrap_or(idx);
                let (r1, c1) = (idx / cols, idx % cols);
                let (r2, c2) = (target / cols, target % cols);
                (r1.abs_diff(r2) + c1.abs_diff(c2)) as u32
            })
            .sum()
    }
}

impl Heuristic<Board> for MisplacedTiles {
    fn estimate(&self, state: &Board, goal: &Board) -> u32 {
        state
            .tiles()
            .iter()
            .zip(goal.tiles())
            .filter(|&(&tile, &wanted)| tile != BLANK && tile != wanted)
            .count() as u32
    }
}

impl<T> Heuristic<T> for Blind {
    fn estimate(&self, _state: &T, _goal: &T) -> u32 {
        0
    }
}

/// Board heuristics selectable at run time, dispatched by `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum HeuristicKind {
    /// Manhattan distance.
    Manhattan,
    /// Out-of-place tile count.
    Misplaced,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Manhattan, HeuristicKind::Misplaced];

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Misplaced => "misplaced",
        }
    }
}

impl Heuristic<Board> for HeuristicKind {
    fn estimate(&self, state: &Board, goal: &Board) -> u32 {
        match self {
            HeuristicKind::Manhattan => ManhattanDistance.estimate(state, goal),
            HeuristicKind::Misplaced => MisplacedTiles.estimate(state, goal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    // True distance to `goal` for every board in its component, by backward BFS.
    fn exact_distances(goal: &Board) -> HashMap<Board, u32> {
        let mut dist = HashMap::from([(goal.clone(), 0u32)]);
        let mut queue = VecDeque::from([goal.clone()]);
        while let Some(board) = queue.pop_front() {
            let d = dist[&board];
            for (_, next) in board.successors() {
                dist.entry(next.clone()).or_insert_with(|| {
                    queue.push_back(next);
                    d + 1
                });
            }
        }
        dist
    }

    #[test]
    fn test_manhattan_distance_values() {
        let goal = Board::solved(3, 3).unwrap();
        assert_eq!(ManhattanDistance.estimate(&goal, &goal), 0);

        let state = Board::new(3, 3, vec![4, 1, 0, 2, 5, 3, 6, 8, 7]).unwrap();
        // 4:1, 1:1, 2:2, 5:0, 3:1, 6:3, 8:0, 7:2
        assert_eq!(ManhattanDistance.estimate(&state, &goal), 10);

        let five_tile = Board::new(2, 3, vec![4, 1, 0, 2, 5, 3]).unwrap();
        let five_goal = Board::solved(2, 3).unwrap();
        // 4:1, 1:1, 2:2, 5:0, 3:1
        assert_eq!(ManhattanDistance.estimate(&five_tile, &five_goal), 5);
    }

    #[test]
    fn test_misplaced_tiles_values() {
        let goal = Board::solved(3, 3).unwrap();
        assert_eq!(MisplacedTiles.estimate(&goal, &goal), 0);

        let state = Board::new(3, 3, vec![4, 1, 0, 2, 5, 3, 6, 8, 7]).unwrap();
        // 5 and 8 are home; the blank is never counted.
        assert_eq!(MisplacedTiles.estimate(&state, &goal), 6);

        let one_off = Board::new(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(MisplacedTiles.estimate(&one_off, &goal), 1);
        assert_eq!(ManhattanDistance.estimate(&one_off, &goal), 1);
    }

    #[test]
    fn test_heuristic_kind_dispatch() {
        let goal = Board::solved(3, 3).unwrap();
        let state = Board::new(3, 3, vec![4, 1, 0, 2, 5, 3, 6, 8, 7]).unwrap();
        assert_eq!(HeuristicKind::Manhattan.estimate(&state, &goal), 10);
        assert_eq!(HeuristicKind::Misplaced.estimate(&state, &goal), 6);
        assert_eq!(Blind.estimate(&state, &goal), 0);
        assert_eq!(HeuristicKind::Misplaced.name(), "misplaced");
    }

    #[test]
    fn test_heuristics_admissible_and_consistent_on_five_tile() {
        let goal = Board::solved(2, 3).unwrap();
        let dist = exact_distances(&goal);
        assert_eq!(dist.len(), 360);

        for (board, &d) in &dist {
            for kind in HeuristicKind::ALL {
                let h = kind.estimate(board, &goal);
                assert!(h <= d, "{} overestimates {:?}", kind.name(), board);
                for (_, next) in board.successors() {
                    let h_next = kind.estimate(&next, &goal);
                    assert!(h <= h_next + 1, "{} is inconsistent at {:?}", kind.name(), board);
                }
            }
            assert!(MisplacedTiles.estimate(board, &goal) <= ManhattanDistance.estimate(board, &goal));
        }
    }
}
