use crate::engine::Board;
use crate::error::BoardError;

/// Splits `text` into tile numbers.
///
/// Commas, dots and any whitespace separate tiles, so `"4,1,0,2,5,3"`,
/// `"4 1 0 2 5 3"` and `"4.1.0 2,5 3"` all parse the same. Empty pieces are
/// ignored.
///
/// # Returns
/// * `Ok(Vec<u8>)` with the tiles in order. No range or uniqueness checks are
///   made here; `Board::new` does those.
/// * `Err(BoardError::InvalidToken)` for the first piece that is not a number in `0..=255`.
///
/// # Examples
/// ```
/// use slide_search::utils::parse_tiles;
/// assert_eq!(parse_tiles("4,1,0, 2 5.3").unwrap(), vec![4, 1, 0, 2, 5, 3]);
/// assert!(parse_tiles("4,x,0").is_err());
/// ```
pub fn parse_tiles(text: &str) -> Result<Vec<u8>, BoardError> {
    text.split(|ch: char| ch == ',' || ch == '.' || ch.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece
                .parse::<u8>()
                .map_err(|_| BoardError::InvalidToken(piece.to_string()))
        })
        .collect()
}

/// Guesses a grid shape from a tile count: 6 tiles make the 2x3 five-tile
/// puzzle, perfect squares make square grids.
pub fn infer_shape(len: usize) -> Option<(usize, usize)> {
    if len == 6 {
        return Some((2, 3));
    }
    let side = (1..=16).find(|side| side * side >= len)?;
    (side >= 2 && side * side == len).then_some((side, side))
}

/// Parses and validates a board.
///
/// # Arguments
/// * `text`: tile list accepted by [`parse_tiles`].
/// * `shape`: `(rows, cols)`, or `None` to infer it with [`infer_shape`].
pub fn board_from_str(text: &str, shape: Option<(usize, usize)>) -> Result<Board, BoardError> {
    let tiles = parse_tiles(text)?;
    let (rows, cols) = match shape {
        Some(shape) => shape,
        None => infer_shape(tiles.len()).ok_or(BoardError::UnknownShape(tiles.len()))?,
    };
    Board::new(rows, cols, tiles)
}
