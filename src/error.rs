//! Error types for board construction and input parsing.
use thiserror::Error;

/// Reasons a tile grid cannot be turned into a `Board`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The grid has no rows (dimension 0).
    #[error("board must have at least one row")]
    Empty,
    /// A row's length does not match the number of rows.
    #[error("row {row} has {found} tiles, expected {expected} for a square board")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A flat tile buffer does not hold exactly `dimension * dimension` tiles.
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },
    /// A tile value lies outside `0..n*n`.
    #[error("tile {tile} is out of range, tiles must be in 0..={max}")]
    TileOutOfRange { tile: u32, max: u32 },
    /// A tile value occurs more than once.
    #[error("tile {tile} appears more than once")]
    DuplicateTile { tile: u32 },
}

/// Errors raised while reading a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is empty, expected the board dimension first")]
    MissingDimension,
    #[error("'{token}' is not a non-negative integer")]
    InvalidNumber { token: String },
    #[error("expected {expected} tiles after the dimension, found {found}")]
    MissingTiles { expected: usize, found: usize },
    #[error("found {found} unexpected value(s) after the last tile")]
    TrailingInput { found: usize },
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),
}
