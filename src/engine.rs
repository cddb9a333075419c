//! State and move model for sliding-tile puzzles.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four directions a tile can slide into the blank.
//! - `Board`: an immutable, row-major grid of tile numbers where `0` is the blank,
//!   with legal-move generation and non-mutating move application.
//! - `SlidingPuzzle`: binds a goal board to the generic search interfaces in `solver`.
use crate::error::{BoardError, IllegalMove};
use crate::solver::{GoalSpace, StateSpace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Tile value of the blank cell.
pub const BLANK: u8 = 0;

/// Largest number of cells a board may have; tiles are stored as `u8`.
pub const MAX_CELLS: usize = 256;

/// Direction in which the tile next to the blank slides into it.
///
/// `Up` moves the tile *below* the blank upwards, so the blank itself travels
/// down one row. The same reading applies to the other three directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the order `legal_moves` reports them.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the move that undoes `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use slide_search::engine::Move;
    /// assert_eq!(Move::Up.inverse(), Move::Down);
    /// assert_eq!(Move::Right.inverse(), Move::Left);
    /// ```
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Single-letter tag, as used in printed move sequences.
    pub fn to_char(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A puzzle configuration: a permutation of `0..rows*cols` read row-major.
///
/// Boards are never mutated once built; `apply` returns a fresh board.
/// Equality and hashing are structural, so boards can key visited sets directly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Builds a board after checking that `tiles` is a permutation of `0..rows*cols`.
    ///
    /// # Arguments
    /// * `rows`, `cols`: grid dimensions. The grid must hold between 2 and
    ///   [`MAX_CELLS`] cells.
    /// * `tiles`: tile numbers in row-major order, `0` being the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` for a well-formed permutation.
    /// * `Err(BoardError)` naming the first violation found otherwise.
    ///
    /// # Examples
    /// ```
    /// use slide_search::engine::Board;
    /// let board = Board::new(2, 3, vec![4, 1, 0, 2, 5, 3]).unwrap();
    /// assert_eq!(board.blank_position(), (0, 2));
    /// assert!(Board::new(2, 3, vec![4, 1, 1, 2, 5, 3]).is_err());
    /// ```
    pub fn new(rows: usize, cols: usize, tiles: Vec<u8>) -> Result<Self, BoardError> {
        let cells = rows
            .checked_mul(cols)
            .filter(|&n| (2..=MAX_CELLS).contains(&n))
            .ok_or(BoardError::UnsupportedShape { rows, cols })?;

        if tiles.len() != cells {
            return Err(BoardError::WrongLength {
                expected: cells,
                found: tiles.len(),
            });
        }

        let mut seen = vec![false; cells];
        let mut blank = None;
        for (idx, &tile) in tiles.iter().enumerate() {
            let slot = tile as usize;
            if slot >= cells {
                return Err(BoardError::TileOutOfRange { tile: slot, cells });
            }
            if seen[slot] {
                return Err(BoardError::DuplicateTile(tile));
            }
            seen[slot] = true;
            if tile == BLANK {
                blank = Some(idx);
            }
        }

        match blank {
            Some(blank) => Ok(Board {
                rows,
                cols,
                tiles,
                blank,
            }),
            None => unreachable!("a full permutation of 0..cells contains the blank"),
        }
    }

    /// The canonical goal layout `1, 2, …, N-1` followed by the blank.
    pub fn solved(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let cells = rows.saturating_mul(cols);
        if !(2..=MAX_CELLS).contains(&cells) {
            return Err(BoardError::UnsupportedShape { rows, cols });
        }
        let tiles = (1..cells)
            .map(|t| t as u8)
            .chain(std::iter::once(BLANK))
            .collect();
        Board::new(rows, cols, tiles)
    }

    /// Produces a reproducible scramble by walking `steps` random legal moves
    /// away from the solved board.
    ///
    /// The walk never immediately undoes its previous move unless no other move
    /// is available. Because every step is a legal move, the result is always
    /// solvable back to `Board::solved(rows, cols)`.
    ///
    /// # Arguments
    /// * `seed`: seeds a `SmallRng`; the same seed always yields the same board.
    pub fn scrambled(rows: usize, cols: usize, steps: usize, seed: u64) -> Result<Self, BoardError> {
        let mut board = Board::solved(rows, cols)?;
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut previous: Option<Move> = None;

        for _ in 0..steps {
            let legal = board.legal_moves();
            let forward: Vec<Move> = legal
                .iter()
                .copied()
                .filter(|mv| Some(mv.inverse()) != previous)
                .collect();
            let pool = if forward.is_empty() { legal } else { forward };

            let Some(&mv) = pool.choose(&mut rng) else {
                break;
            };
            if let Some(next) = board.successor(mv) {
                board = next;
                previous = Some(mv);
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells, blank included.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false: a board holds at least two cells.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in row-major order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `(r, c)` lies outside the grid.
    pub fn tile_at(&self, r: usize, c: usize) -> u8 {
        assert!(r < self.rows && c < self.cols, "({r}, {c}) outside the grid");
        self.tiles[r * self.cols + c]
    }

    /// Row-major index of the blank.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// `(row, column)` of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.cols, self.blank % self.cols)
    }

    /// Row-major index of `tile`, or `None` if the board has no such tile.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Index of the tile that `mv` would slide into the blank, if that tile
    /// lies inside the grid.
    fn source_of(&self, mv: Move) -> Option<usize> {
        let (r, c) = self.blank_position();
        match mv {
            Move::Up => (r + 1 < self.rows).then(|| self.blank + self.cols),
            Move::Down => (r > 0).then(|| self.blank - self.cols),
            Move::Left => (c + 1 < self.cols).then(|| self.blank + 1),
            Move::Right => (c > 0).then(|| self.blank - 1),
        }
    }

    /// Lists every move whose sliding tile exists for the current blank position.
    ///
    /// Moves are always reported in the order `Up, Down, Left, Right`.
    ///
    /// # Examples
    /// ```
    /// use slide_search::engine::{Board, Move};
    /// // Blank in the top-right corner of a 2x3 grid.
    /// let board = Board::new(2, 3, vec![4, 1, 0, 2, 5, 3]).unwrap();
    /// assert_eq!(board.legal_moves(), vec![Move::Up, Move::Right]);
    /// ```
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|&mv| self.source_of(mv).is_some())
            .collect()
    }

    fn successor(&self, mv: Move) -> Option<Board> {
        let source = self.source_of(mv)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, source);
        Some(Board {
            rows: self.rows,
            cols: self.cols,
            tiles,
            blank: source,
        })
    }

    /// Returns the board reached by playing `mv`, leaving `self` untouched.
    ///
    /// # Returns
    /// * `Ok(Board)` with the blank and the sliding tile swapped.
    /// * `Err(IllegalMove)` if `mv` is not in `self.legal_moves()`.
    pub fn apply(&self, mv: Move) -> Result<Board, IllegalMove> {
        self.successor(mv).ok_or_else(|| {
            let (blank_row, blank_col) = self.blank_position();
            IllegalMove {
                mv,
                blank_row,
                blank_col,
            }
        })
    }

    /// Every `(move, resulting board)` pair available from this board.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .into_iter()
            .filter_map(|mv| self.successor(mv).map(|next| (mv, next)))
            .collect()
    }

    /// Plays `moves` in order, stopping at the first illegal one.
    pub fn apply_all(&self, moves: &[Move]) -> Result<Board, IllegalMove> {
        moves
            .iter()
            .try_fold(self.clone(), |board, &mv| board.apply(mv))
    }

    /// Number of pairs of non-blank tiles that appear in decreasing order.
    pub fn inversions(&self) -> usize {
        let numbered: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        numbered
            .iter()
            .enumerate()
            .map(|(i, &tile)| numbered[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }

    // Invariant under every legal move: horizontal moves keep the inversion
    // count, vertical moves jump the tile over cols-1 others and change the
    // blank row by one.
    fn parity_class(&self) -> usize {
        let (blank_row, _) = self.blank_position();
        let row_term = if self.cols % 2 == 0 { blank_row } else { 0 };
        (self.inversions() + row_term) % 2
    }

    /// Whether `goal` can be reached from `self` by legal moves.
    ///
    /// Compares the permutation parity of both boards, which decides
    /// reachability for grids with at least two rows and two columns.
    /// Boards of different shapes are never mutually reachable.
    /// Search entry points never call this; rejecting unsolvable pairs up front
    /// is left to the caller.
    pub fn is_solvable_towards(&self, goal: &Board) -> bool {
        self.rows == goal.rows
            && self.cols == goal.cols
            && self.parity_class() == goal.parity_class()
    }
}

impl fmt::Display for Board {
    /// One grid row per line, the blank drawn as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.len() - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{:>width$}", tile)?;
                }
            }
        }
        Ok(())
    }
}

/// A sliding-tile puzzle instance: the transitions of `Board` plus a fixed goal.
#[derive(Clone, Debug)]
pub struct SlidingPuzzle {
    goal: Board,
}

impl SlidingPuzzle {
    pub fn new(goal: Board) -> Self {
        SlidingPuzzle { goal }
    }
}

impl StateSpace for SlidingPuzzle {
    type State = Board;
    type Move = Move;

    fn successors(&self, state: &Board) -> Vec<(Move, Board)> {
        state.successors()
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }
}

impl GoalSpace for SlidingPuzzle {
    fn goal(&self) -> &Board {
        &self.goal
    }
}
