//! Shared module - Common types used by every feature
//!
//! Holds the concept identifier model. Nothing here depends on the graph
//! machinery.

pub mod models;

pub use models::*;
