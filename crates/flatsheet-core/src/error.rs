//! Error types for flatsheet-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in flatsheet-core
#[derive(Debug, Error)]
pub enum Error {
    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// No cell exists at the given position
    #[error("Cell at ({0}, {1}) not found")]
    CellNotFound(u32, u16),

    /// Operation requires a formula cell
    #[error("Cell at ({0}, {1}) is not a formula")]
    NotAFormula(u32, u16),
}
