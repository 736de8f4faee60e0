//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to supply store
//! locations and synchronization behavior, and helpers to load it from disk.

mod load;
mod schema;

pub use schema::*;
