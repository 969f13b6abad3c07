//! GridPoint tool runtime SDK facade.
//!
//! Depend on this crate via `cargo add gridpoint`. It bundles the runtime
//! crates behind feature flags so downstream users can enable or disable
//! components as needed for their deployments.

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use grid_primitives as primitives;

/// Nearest-point query engine (enabled by `index` feature).
#[cfg(feature = "index")]
pub use grid_index as index;

/// Tool registry, validation, and envelopes (enabled by `tools` feature).
#[cfg(feature = "tools")]
pub use grid_tools as tools;

/// Append-only booking store (enabled by `bookings` feature).
#[cfg(feature = "bookings")]
pub use grid_bookings as bookings;
