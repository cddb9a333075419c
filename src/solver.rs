//! Uninformed search over any finite state space.
//!
//! The engines only see a problem through [`StateSpace`]: a transition function
//! listing `(move, successor)` pairs and a goal test. Each call owns its frontier
//! and visited bookkeeping and drops them on return.
//!
//! - `bfs`: breadth-first search, shortest paths under uniform move cost.
//! - `depth_limited_search`: depth-first search with an explicit stack and a depth bound.
//! - `iddfs`: iterative deepening built from repeated depth-limited searches.
//!
//! `breadth_first_search` and `iterative_deepening_search` are the sliding-puzzle
//! entry points; the A* entry point lives in `informed`.
use crate::engine::{Board, Move, SlidingPuzzle};
use crate::error::NoSolution;
use crate::frontier::{FifoFrontier, Frontier, StackFrontier};
use log::{debug, trace};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Default depth ceiling for iterative deepening. Every solvable 8-puzzle
/// instance needs at most 31 moves.
pub const DEFAULT_MAX_DEPTH: usize = 31;

/// A searchable problem: state transitions plus a goal test.
pub trait StateSpace {
    type State: Clone + Eq + Hash;
    type Move: Copy;

    /// Every legal `(move, successor)` pair from `state`, in a fixed order.
    fn successors(&self, state: &Self::State) -> Vec<(Self::Move, Self::State)>;

    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A state space with a single explicit goal state, which heuristics measure against.
pub trait GoalSpace: StateSpace {
    fn goal(&self) -> &Self::State;
}

/// Counters collected during one search call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,
    /// Successors produced, including ones discarded as already seen.
    pub generated: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

impl SearchStats {
    pub(crate) fn observe_frontier(&mut self, len: usize) {
        self.peak_frontier = self.peak_frontier.max(len);
    }
}

/// A path found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<M> {
    /// Moves from the initial state to the goal, in playing order.
    pub moves: Vec<M>,
    pub stats: SearchStats,
}

impl<M> Solution<M> {
    /// Path cost under uniform move cost: the number of moves.
    pub fn cost(&self) -> usize {
        self.moves.len()
    }
}

/// Breadth-first search from `initial` to the first state satisfying the goal test.
///
/// States are marked visited when enqueued, so each state enters the queue at
/// most once and is first dequeued along a path with the fewest moves.
///
/// # Returns
/// * `Ok(Solution)` holding a shortest move sequence.
/// * `Err(NoSolution::Exhausted)` once every reachable state has been dequeued.
pub fn bfs<S: StateSpace>(space: &S, initial: &S::State) -> Result<Solution<S::Move>, NoSolution> {
    let mut stats = SearchStats::default();
    let mut visited: HashSet<S::State> = HashSet::new();
    let mut frontier = FifoFrontier::new();

    visited.insert(initial.clone());
    frontier.push((initial.clone(), Vec::new()));
    stats.observe_frontier(frontier.len());

    while let Some((state, path)) = frontier.pop() {
        if space.is_goal(&state) {
            debug!(
                "bfs: goal at depth {} ({} expanded, {} generated)",
                path.len(),
                stats.expanded,
                stats.generated
            );
            return Ok(Solution { moves: path, stats });
        }

        stats.expanded += 1;
        for (mv, next) in space.successors(&state) {
            stats.generated += 1;
            if visited.insert(next.clone()) {
                let mut next_path = path.clone();
                next_path.push(mv);
                frontier.push((next, next_path));
            }
        }
        stats.observe_frontier(frontier.len());
    }

    debug!("bfs: exhausted {} states without reaching the goal", visited.len());
    Err(NoSolution::Exhausted {
        expanded: stats.expanded,
    })
}

/// Depth-first search that never expands a node at or beyond `depth_limit`.
///
/// Nodes at the limit are goal-tested and then treated as leaves. A state is
/// pushed again only if reached by a strictly shallower route than before, so
/// every goal within the bound is found.
///
/// # Returns
/// * `Ok(Solution)` for the first goal found, at depth `<= depth_limit`. It is
///   not necessarily the shallowest.
/// * `Err(NoSolution::DepthCeiling)` if some branch was cut off at the limit.
/// * `Err(NoSolution::Exhausted)` if the whole reachable space fits inside the
///   bound and holds no goal.
pub fn depth_limited_search<S: StateSpace>(
    space: &S,
    initial: &S::State,
    depth_limit: usize,
) -> Result<Solution<S::Move>, NoSolution> {
    let mut stats = SearchStats::default();
    let moves = limited_dfs(space, initial, depth_limit, &mut stats)?;
    Ok(Solution { moves, stats })
}

fn limited_dfs<S: StateSpace>(
    space: &S,
    initial: &S::State,
    depth_limit: usize,
    stats: &mut SearchStats,
) -> Result<Vec<S::Move>, NoSolution> {
    let mut frontier = StackFrontier::new();
    let mut shallowest: HashMap<S::State, usize> = HashMap::new();
    let mut leaves_at_limit: HashSet<S::State> = HashSet::new();

    shallowest.insert(initial.clone(), 0);
    frontier.push((initial.clone(), Vec::new(), 0usize));
    stats.observe_frontier(frontier.len());

    while let Some((state, path, depth)) = frontier.pop() {
        // Superseded by a shallower route pushed later.
        if shallowest.get(&state).is_some_and(|&best| best < depth) {
            continue;
        }
        if space.is_goal(&state) {
            return Ok(path);
        }
        if depth >= depth_limit {
            leaves_at_limit.insert(state);
            continue;
        }

        stats.expanded += 1;
        let next_depth = depth + 1;
        // Reversed so the first listed move is explored first.
        for (mv, next) in space.successors(&state).into_iter().rev() {
            stats.generated += 1;
            if shallowest.get(&next).map_or(true, |&best| next_depth < best) {
                shallowest.insert(next.clone(), next_depth);
                let mut next_path = path.clone();
                next_path.push(mv);
                frontier.push((next, next_path, next_depth));
            }
        }
        stats.observe_frontier(frontier.len());
    }

    // A leaf later reached by a shallower route was expanded from there.
    let cut_off = leaves_at_limit
        .iter()
        .any(|state| shallowest.get(state).is_some_and(|&best| best >= depth_limit));
    trace!(
        "depth-limited search at {}: {} states seen, cut off: {}",
        depth_limit,
        shallowest.len(),
        cut_off
    );

    if cut_off {
        Err(NoSolution::DepthCeiling {
            max_depth: depth_limit,
        })
    } else {
        Err(NoSolution::Exhausted {
            expanded: stats.expanded,
        })
    }
}

/// Iterative deepening: depth-limited search with limits `0, 1, …, max_depth`.
///
/// Returns the first path found, which has the minimum number of moves.
/// Memory stays proportional to the current bound's search tree at the cost
/// of repeating shallower work on every iteration.
///
/// The search is complete only up to `max_depth`. Beyond it, the result is
/// `NoSolution::DepthCeiling` even if a longer solution exists. If an
/// iteration explores the entire reachable space without cutting anything off,
/// deepening stops early with `NoSolution::Exhausted`.
pub fn iddfs<S: StateSpace>(
    space: &S,
    initial: &S::State,
    max_depth: usize,
) -> Result<Solution<S::Move>, NoSolution> {
    let mut stats = SearchStats::default();

    for depth_limit in 0..=max_depth {
        match limited_dfs(space, initial, depth_limit, &mut stats) {
            Ok(moves) => {
                debug!(
                    "iddfs: goal at depth {} ({} expanded over {} iterations)",
                    moves.len(),
                    stats.expanded,
                    depth_limit + 1
                );
                return Ok(Solution { moves, stats });
            }
            Err(NoSolution::DepthCeiling { .. }) => {
                debug!("iddfs: nothing within depth {}, deepening", depth_limit);
            }
            Err(NoSolution::Exhausted { .. }) => {
                debug!(
                    "iddfs: reachable space exhausted at depth limit {}",
                    depth_limit
                );
                return Err(NoSolution::Exhausted {
                    expanded: stats.expanded,
                });
            }
        }
    }

    Err(NoSolution::DepthCeiling { max_depth })
}

/// Solves a sliding-tile puzzle with breadth-first search.
///
/// Inputs are assumed to be validated boards of the same shape; a goal of a
/// different shape is simply never reached.
///
/// # Examples
/// ```
/// use slide_search::engine::Board;
/// use slide_search::solver::breadth_first_search;
///
/// let initial = Board::new(2, 3, vec![1, 2, 3, 4, 0, 5]).unwrap();
/// let goal = Board::solved(2, 3).unwrap();
/// let solution = breadth_first_search(&initial, &goal).unwrap();
/// assert_eq!(solution.cost(), 1);
/// assert_eq!(initial.apply_all(&solution.moves).unwrap(), goal);
/// ```
pub fn breadth_first_search(initial: &Board, goal: &Board) -> Result<Solution<Move>, NoSolution> {
    bfs(&SlidingPuzzle::new(goal.clone()), initial)
}

/// Solves a sliding-tile puzzle with iterative deepening up to `max_depth` moves.
pub fn iterative_deepening_search(
    initial: &Board,
    goal: &Board,
    max_depth: usize,
) -> Result<Solution<Move>, NoSolution> {
    iddfs(&SlidingPuzzle::new(goal.clone()), initial, max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Directed graph over node indices; a move is the index of the node entered.
    struct Graph {
        edges: Vec<Vec<usize>>,
        goal: usize,
    }

    impl StateSpace for Graph {
        type State = usize;
        type Move = usize;

        fn successors(&self, state: &usize) -> Vec<(usize, usize)> {
            self.edges[*state].iter().map(|&n| (n, n)).collect()
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.goal
        }
    }

    // 0 -> 1 -> 2 -> 3 -> 4 is explored first, but 0 -> 5 -> 3 -> 4 is shorter.
    fn detour_graph() -> Graph {
        Graph {
            edges: vec![vec![1, 5], vec![2], vec![3], vec![4], vec![], vec![3]],
            goal: 4,
        }
    }

    fn five_tile_start() -> Board {
        Board::new(2, 3, vec![4, 1, 0, 2, 5, 3]).unwrap()
    }

    #[test_log::test]
    fn test_bfs_finds_shortest_route() {
        let graph = detour_graph();
        let solution = bfs(&graph, &0).unwrap();
        assert_eq!(solution.moves, vec![5, 3, 4]);
        assert_eq!(solution.cost(), 3);
    }

    #[test]
    fn test_bfs_initial_is_goal() {
        let graph = detour_graph();
        let solution = bfs(&graph, &4).unwrap();
        assert!(solution.moves.is_empty());
        assert_eq!(solution.stats.expanded, 0);
    }

    #[test]
    fn test_bfs_unreachable_goal_exhausts() {
        let graph = Graph {
            edges: vec![vec![1], vec![0, 2], vec![1], vec![]],
            goal: 3,
        };
        assert_eq!(bfs(&graph, &0), Err(NoSolution::Exhausted { expanded: 3 }));
    }

    #[test]
    fn test_bfs_enqueues_each_state_once() {
        // Complete graph on 4 nodes: every node is generated many times.
        let graph = Graph {
            edges: (0..4).map(|n| (0..4).filter(|&m| m != n).collect()).collect(),
            goal: 9,
        };
        let err = bfs(&graph, &0).unwrap_err();
        assert_eq!(err, NoSolution::Exhausted { expanded: 4 });
    }

    #[test]
    fn test_depth_limited_readmits_shallower_route() {
        let graph = detour_graph();
        // The first branch reaches node 3 at the limit; only the detour fits.
        let solution = depth_limited_search(&graph, &0, 3).unwrap();
        assert_eq!(solution.moves, vec![5, 3, 4]);
    }

    #[test]
    fn test_depth_limited_reports_cutoff() {
        let graph = detour_graph();
        assert_eq!(
            depth_limited_search(&graph, &0, 2),
            Err(NoSolution::DepthCeiling { max_depth: 2 })
        );
        assert_eq!(
            depth_limited_search(&graph, &0, 0),
            Err(NoSolution::DepthCeiling { max_depth: 0 })
        );
    }

    #[test]
    fn test_depth_limited_prefers_first_branch_when_it_fits() {
        let graph = detour_graph();
        let solution = depth_limited_search(&graph, &0, 4).unwrap();
        assert_eq!(solution.moves, vec![1, 2, 3, 4]);
    }

    #[test_log::test]
    fn test_iddfs_returns_shortest_path() {
        let graph = detour_graph();
        let solution = iddfs(&graph, &0, 10).unwrap();
        assert_eq!(solution.moves, vec![5, 3, 4]);
    }

    #[test]
    fn test_iddfs_depth_ceiling_below_optimum() {
        let graph = detour_graph();
        assert_eq!(
            iddfs(&graph, &0, 2),
            Err(NoSolution::DepthCeiling { max_depth: 2 })
        );
    }

    #[test]
    fn test_iddfs_stops_early_when_space_exhausted() {
        let graph = Graph {
            edges: vec![vec![1], vec![2], vec![0], vec![]],
            goal: 3,
        };
        assert!(matches!(
            iddfs(&graph, &0, 50),
            Err(NoSolution::Exhausted { .. })
        ));
    }

    #[test]
    fn test_five_tile_bfs_and_iddfs_agree() {
        let start = five_tile_start();
        let goal = Board::solved(2, 3).unwrap();

        let by_bfs = breadth_first_search(&start, &goal).unwrap();
        let by_ids = iterative_deepening_search(&start, &goal, DEFAULT_MAX_DEPTH).unwrap();

        assert_eq!(by_bfs.cost(), by_ids.cost());
        assert_eq!(start.apply_all(&by_bfs.moves).unwrap(), goal);
        assert_eq!(start.apply_all(&by_ids.moves).unwrap(), goal);
    }

    #[test]
    fn test_iterative_deepening_below_optimum_fails() {
        let start = five_tile_start();
        let goal = Board::solved(2, 3).unwrap();
        let optimum = breadth_first_search(&start, &goal).unwrap().cost();
        assert!(optimum > 0);

        assert_eq!(
            iterative_deepening_search(&start, &goal, optimum - 1),
            Err(NoSolution::DepthCeiling {
                max_depth: optimum - 1
            })
        );
        assert_eq!(
            iterative_deepening_search(&start, &goal, optimum)
                .unwrap()
                .cost(),
            optimum
        );
    }

    #[test]
    fn test_unsolvable_five_tile_is_exhausted() {
        let start = Board::new(2, 3, vec![2, 1, 3, 4, 5, 0]).unwrap();
        let goal = Board::solved(2, 3).unwrap();
        assert!(!start.is_solvable_towards(&goal));

        assert_eq!(
            breadth_first_search(&start, &goal),
            Err(NoSolution::Exhausted { expanded: 360 })
        );
        assert!(matches!(
            iterative_deepening_search(&start, &goal, DEFAULT_MAX_DEPTH),
            Err(NoSolution::Exhausted { .. })
        ));
    }

    #[test]
    fn test_mismatched_shapes_never_reach_goal() {
        let start = five_tile_start();
        let goal = Board::solved(3, 2).unwrap();
        assert!(matches!(
            breadth_first_search(&start, &goal),
            Err(NoSolution::Exhausted { .. })
        ));
    }

    #[test]
    fn test_searches_are_deterministic() {
        let start = five_tile_start();
        let goal = Board::solved(2, 3).unwrap();
        assert_eq!(
            breadth_first_search(&start, &goal),
            breadth_first_search(&start, &goal)
        );
        assert_eq!(
            iterative_deepening_search(&start, &goal, 25),
            iterative_deepening_search(&start, &goal, 25)
        );
    }
}
