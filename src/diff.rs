//! Sequence alignment and three-way merging of playlists.

mod align;
mod merge;

pub use align::{AlignOp, Alignment, align};
pub use merge::{MergeConflict, merge};

#[cfg(test)]
mod tests;
