//! Shared error definitions for grid primitives.

use thiserror::Error;

/// Result alias used throughout the GridPoint runtime.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or querying grid data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Point identifier failed validation.
    #[error("invalid point id: {reason}")]
    InvalidPointId {
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// A coordinate fell outside the grid bounds.
    #[error("coordinate `{axis}` value {value} is outside the grid range {min}..={max}", min = crate::GRID_MIN, max = crate::GRID_MAX)]
    InvalidCoordinate {
        /// Which axis was rejected (`x` or `y`).
        axis: &'static str,
        /// The offending value.
        value: i64,
    },

    /// Two catalog points shared the same identifier.
    #[error("point id `{id}` appears more than once in the catalog")]
    DuplicatePointId {
        /// The duplicated identifier.
        id: String,
    },

    /// A nearest-neighbor query ran against a catalog with no points.
    #[error("catalog contains no points")]
    EmptyCatalog,
}
