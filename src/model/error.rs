use super::Color;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid color `{0}`: expected six hex digits like #1a2b3c")]
    InvalidColor(String),

    #[error("grid row count mismatch: declared {declared} rows but received {actual}")]
    RowCountMismatch { declared: usize, actual: usize },

    #[error("row {row} has {actual} cells but the grid declares {expected} columns")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("degenerate grid shape {rows}x{cols}: an empty grid must be 0x0")]
    InvalidShape { rows: usize, cols: usize },

    #[error("cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("crop region is inverted: rows {min_row}..={max_row}, cols {min_col}..={max_col}")]
    InvalidRegion {
        min_row: usize,
        max_row: usize,
        min_col: usize,
        max_col: usize,
    },

    #[error("declared count {declared} for {color} does not match the {actual} cells present")]
    StatsMismatch {
        color: Color,
        declared: u32,
        actual: u32,
    },
}
