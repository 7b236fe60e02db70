//! Error types for the Game of Life core

use thiserror::Error;

/// Errors reported by the grid, the engine and the pattern catalogue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("invalid grid dimensions {rows}x{cols}: rows and columns must be positive")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("malformed grid: row {row} has length {found}, expected {expected}")]
    MalformedGrid {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("malformed grid: {rows}x{cols} grid has {found} cells, expected {} cells", rows * cols)]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("pattern '{pattern}' ({height}x{width}) does not fit in a {slot_rows}x{slot_cols} slot")]
    DoesNotFit {
        pattern: &'static str,
        height: usize,
        width: usize,
        slot_rows: usize,
        slot_cols: usize,
    },
}
