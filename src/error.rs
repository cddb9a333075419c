//! Error types for board construction, move application and search.

use crate::engine::Move;
use thiserror::Error;

/// Reasons a tile list cannot be turned into a [`Board`](crate::engine::Board).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board shape {rows}x{cols} is not supported (need 2..=256 cells)")]
    UnsupportedShape { rows: usize, cols: usize },

    #[error("expected {expected} tiles for the board, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("tile {tile} is out of range for a board of {cells} cells")]
    TileOutOfRange { tile: usize, cells: usize },

    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    #[error("cannot parse '{0}' as a tile number")]
    InvalidToken(String),

    #[error("cannot infer a board shape for {0} tiles")]
    UnknownShape(usize),
}

/// A move whose tile would come from outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("move {mv} is illegal with the blank at row {blank_row}, column {blank_col}")]
pub struct IllegalMove {
    pub mv: Move,
    pub blank_row: usize,
    pub blank_col: usize,
}

/// Failure value of every search entry point.
///
/// Ordinary search failure is a value, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoSolution {
    /// Every reachable state was examined and none satisfied the goal test.
    #[error("goal unreachable: search space exhausted after {expanded} expansions")]
    Exhausted { expanded: usize },

    /// Iterative deepening cut off at least one branch at the depth ceiling,
    /// so a deeper solution may still exist.
    #[error("no solution within depth ceiling {max_depth}")]
    DepthCeiling { max_depth: usize },
}
