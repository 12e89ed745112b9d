//! Error types for board construction and run configuration.

use thiserror::Error;

use crate::board::Point;

/// Errors raised while building a [`Board`](crate::Board) from caller data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The matrix has no rows.
    #[error("cell matrix has no rows")]
    EmptyMatrix,

    /// The first row has no columns.
    #[error("cell matrix rows are empty")]
    EmptyRow,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The cells would reach past [`COORD_LIMIT`](crate::board::COORD_LIMIT).
    #[error("{width}x{height} board at {origin} does not fit the coordinate plane")]
    OutOfRange {
        origin: Point,
        width: usize,
        height: usize,
    },

    /// A plaintext pattern contains a character that is not a cell.
    #[error("invalid cell character {found:?} at row {row}, column {column}")]
    InvalidCellChar {
        row: usize,
        column: usize,
        found: char,
    },
}

/// Errors raised by [`RunConfig::validate`](crate::RunConfig::validate).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("density must be within [0, 1], got {0}")]
    InvalidDensity(f64),

    #[error("random soup size must be positive")]
    ZeroSize,

    #[error("invalid seed pattern: {0}")]
    Board(#[from] BoardError),
}
