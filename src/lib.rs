//! # Slide Search Library
//!
//! This library provides a small state-space search core for sliding-tile
//! puzzles (the 2x3 five-tile puzzle, the 8-puzzle and other grids) together
//! with breadth-first search, iterative deepening and A*.
//!
//! It is used by three binaries:
//! - `slide_solver`: solves one puzzle instance with the chosen algorithm.
//! - `heuristic_evaluator`: compares A* expansions under each heuristic on
//!   seeded scrambles.
//! - `ferry_solver`: solves the river-crossing puzzle with the same engines.
//!
//! ## Modules
//! - `engine`: boards (`Board`), moves (`Move`), legal-move generation, move
//!   application and the `SlidingPuzzle` state space.
//! - `frontier`: FIFO, stack and priority frontiers.
//! - `solver`: the `StateSpace` interfaces, BFS, depth-limited search, iterative deepening.
//! - `informed`: A*.
//! - `heuristics`: Manhattan distance and out-of-place count.
//! - `ferry`: the missionaries-and-cannibals puzzle as a `StateSpace`.
//! - `utils`: parsing boards from tile lists.
//! - `error`: error types.

pub mod engine;
pub mod error;
pub mod ferry;
pub mod frontier;
pub mod heuristics;
pub mod informed;
pub mod solver;
pub mod utils;

pub use engine::{Board, Move};
pub use error::NoSolution;
pub use informed::a_star_search;
pub use solver::{breadth_first_search, iterative_deepening_search, Solution};
