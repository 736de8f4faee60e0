//! Playlist data model shared by the store codecs and the merge engine.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
