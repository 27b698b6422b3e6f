//! Error type for board and piece queries.

use thiserror::Error;

/// A coordinate or dimension the board cannot address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}, {z}) is outside the board")]
    OutOfBounds { x: i32, y: i32, z: i32 },

    #[error("local cell ({row}, {col}) is outside the piece grid")]
    LocalCellOutOfRange { row: usize, col: usize },

    #[error("invalid board dimensions {width}x{height}x{depth}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        depth: usize,
    },
}
