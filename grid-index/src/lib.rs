//! Nearest-point lookup over a fixed catalog.
//!
//! The index holds a read-only [`Catalog`](grid_primitives::Catalog) and
//! answers queries by exhaustive distance comparison. There is no shared
//! mutable state, so one index can serve any number of concurrent callers.

#![warn(missing_docs, clippy::pedantic)]

mod index;

/// Exhaustive-scan nearest-neighbor index.
pub use index::PointIndex;
