//! A* search guided by a pluggable [`Heuristic`].
use crate::engine::{Board, Move, SlidingPuzzle};
use crate::error::NoSolution;
use crate::frontier::PriorityFrontier;
use crate::heuristics::Heuristic;
use crate::solver::{GoalSpace, SearchStats, Solution};
use log::debug;
use std::collections::{HashMap, HashSet};

/// Runs A* from `initial` towards `space.goal()`.
///
/// The frontier is ordered by `f = g + h`, where `g` is the number of moves
/// taken so far and `h = heuristic.estimate(state, goal)`. Ties on `f` pop in
/// insertion order. A state is closed on its first expansion and never
/// re-opened, even if a cheaper `g` turns up later; this yields shortest paths
/// only when the heuristic is consistent, as every heuristic in this crate is.
/// Frontier entries left over for an already-closed state are skipped, so no
/// state is ever expanded twice.
///
/// # Returns
/// * `Ok(Solution)` rebuilt by following predecessor links back from the goal.
/// * `Err(NoSolution::Exhausted)` when the frontier empties. For sliding
///   puzzles this only happens for unsolvable pairs, which callers can reject
///   beforehand with `Board::is_solvable_towards`.
pub fn a_star<S, H>(space: &S, initial: &S::State, heuristic: &H) -> Result<Solution<S::Move>, NoSolution>
where
    S: GoalSpace,
    H: Heuristic<S::State>,
{
    let goal = space.goal();
    let mut stats = SearchStats::default();
    let mut frontier = PriorityFrontier::new();
    let mut best_g: HashMap<S::State, u32> = HashMap::new();
    let mut came_from: HashMap<S::State, (S::State, S::Move)> = HashMap::new();
    let mut closed: HashSet<S::State> = HashSet::new();

    best_g.insert(initial.clone(), 0);
    frontier.push((initial.clone(), 0u32), heuristic.estimate(initial, goal));
    stats.observe_frontier(frontier.len());

    while let Some(((state, g), f)) = frontier.pop() {
        if closed.contains(&state) {
            continue;
        }
        if space.is_goal(&state) {
            let moves = reconstruct_path(&came_from, state);
            debug!(
                "a*: goal at cost {} (f = {}, {} expanded, {} generated)",
                moves.len(),
                f,
                stats.expanded,
                stats.generated
            );
            return Ok(Solution { moves, stats });
        }

        closed.insert(state.clone());
        stats.expanded += 1;

        let tentative_g = g + 1;
        for (mv, next) in space.successors(&state) {
            stats.generated += 1;
            if closed.contains(&next) {
                continue;
            }
            let improves = best_g.get(&next).map_or(true, |&known| tentative_g < known);
            if improves {
                best_g.insert(next.clone(), tentative_g);
                came_from.insert(next.clone(), (state.clone(), mv));
                let f_next = tentative_g + heuristic.estimate(&next, goal);
                frontier.push((next, tentative_g), f_next);
            }
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("a*: frontier empty after closing {} states", closed.len());
    Err(NoSolution::Exhausted {
        expanded: stats.expanded,
    })
}

fn reconstruct_path<T, M>(came_from: &HashMap<T, (T, M)>, goal: T) -> Vec<M>
where
    T: Eq + std::hash::Hash,
    M: Copy,
{
    let mut moves = Vec::new();
    let mut current = &goal;
    while let Some((previous, mv)) = came_from.get(current) {
        moves.push(*mv);
        current = previous;
    }
    moves.reverse();
    moves
}

/// Solves a sliding-tile puzzle with A* under `heuristic`.
///
/// # Examples
/// ```
/// use slide_search::engine::Board;
/// use slide_search::heuristics::ManhattanDistance;
/// use slide_search::informed::a_star_search;
///
/// let initial = Board::new(3, 3, vec![1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
/// let goal = Board::solved(3, 3).unwrap();
/// let solution = a_star_search(&initial, &goal, &ManhattanDistance).unwrap();
/// assert_eq!(solution.cost(), 2);
/// ```
pub fn a_star_search<H: Heuristic<Board>>(
    initial: &Board,
    goal: &Board,
    heuristic: &H,
) -> Result<Solution<Move>, NoSolution> {
    a_star(&SlidingPuzzle::new(goal.clone()), initial, heuristic)
}
