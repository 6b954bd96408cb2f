//! Errors raised by checked component, entry and column access.

use thiserror::Error;

/// Out-of-range access into a vector or matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Vector component index past the last component.
    #[error("component index {index} out of range for a {len}-component vector")]
    Component { index: usize, len: usize },

    /// Matrix entry outside the `dim` x `dim` grid.
    #[error("entry ({row}, {column}) out of range for a {dim}x{dim} matrix")]
    Entry { row: usize, column: usize, dim: usize },

    /// Matrix column index past the last column.
    #[error("column {column} out of range for a {dim}x{dim} matrix")]
    Column { column: usize, dim: usize },

    /// Matrix row index past the last row.
    #[error("row {row} out of range for a {dim}x{dim} matrix")]
    Row { row: usize, dim: usize },
}

pub type MathResult<T> = Result<T, IndexError>;
