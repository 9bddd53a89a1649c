//! Error types for the core crate.

use thiserror::Error;

/// Rejected board construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("a {width}x{height} board needs {expected} cells, got {actual}")]
    CellCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
