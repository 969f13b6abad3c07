//! Tool invocation layer for the GridPoint runtime.
//!
//! The modules exposed here make it possible to declare tools with typed
//! parameter schemas, register them by name, validate caller input against
//! the declared schema, and translate outcomes into structured reply
//! envelopes. The manifest a registry advertises is derived from the same
//! schemas that drive validation, so the two cannot drift apart.

#![warn(missing_docs, clippy::pedantic)]

pub mod booking;
pub mod envelope;
pub mod manifest;
pub mod nearest;
pub mod params;
pub mod registry;
