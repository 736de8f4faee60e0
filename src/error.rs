use thiserror::Error;

use crate::diff::MergeConflict;

/// Errors from decoding one of the three persisted playlist forms.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("an m3u8 playlist must start with #EXTM3U")]
    MissingHeader,
    #[error("unsupported cache version {0}")]
    UnsupportedCacheVersion(u64),
    #[error("malformed cache JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-action failure taxonomy for the synchronizer.
///
/// `Format` and `Io` abort only the action that hit them. `Conflict` and
/// `NoBase` are expected outcomes of specific actions, reported for the
/// operator to resolve by hand; a later re-run picks up where this one left
/// off.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Conflict(#[from] MergeConflict),
    #[error(
        "cannot merge '{name}' without a cache anchor; \
         reconcile manually and delete one of the playlist files"
    )]
    NoBase { name: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
