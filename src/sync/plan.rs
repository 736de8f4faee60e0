use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// One synchronization step for a single playlist name.
///
/// The action set is closed by design: every realizable presence combination
/// across the three stores maps to exactly one variant, and the executor
/// dispatches on it exhaustively. Actions are created per run and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncAction {
    /// The playlist exists in the cmus store but not in m3u8 (any leftover
    /// cache snapshot is stale): derive the m3u8 file and (re)write the cache.
    NewFromCmus { name: String, cmus_path: PathBuf },
    /// Mirror image of `NewFromCmus`.
    NewFromM3u8 { name: String, m3u8_path: PathBuf },
    /// Present everywhere: reconcile both live stores against the cached base.
    ThreeWayMerge {
        name: String,
        cmus_path: PathBuf,
        m3u8_path: PathBuf,
        cache_path: PathBuf,
    },
    /// Both live stores have the playlist but no cache anchor exists; there is
    /// no safe automatic choice, so this always fails over to the operator.
    MergeWithoutBase {
        name: String,
        cmus_path: PathBuf,
        m3u8_path: PathBuf,
    },
    /// Only the cache remembers this playlist; drop the snapshot.
    DeleteStaleCache { name: String, cache_path: PathBuf },
}

impl SyncAction {
    pub fn name(&self) -> &str {
        match self {
            SyncAction::NewFromCmus { name, .. }
            | SyncAction::NewFromM3u8 { name, .. }
            | SyncAction::ThreeWayMerge { name, .. }
            | SyncAction::MergeWithoutBase { name, .. }
            | SyncAction::DeleteStaleCache { name, .. } => name,
        }
    }
}

/// Classify every playlist name visible in any store.
///
/// Pure function over the three listings; no I/O. Names are visited in sorted
/// order, so the plan (and thus the whole run) is reproducible.
pub fn plan(
    cmus: &BTreeMap<String, PathBuf>,
    m3u8: &BTreeMap<String, PathBuf>,
    cache: &BTreeMap<String, PathBuf>,
) -> Vec<SyncAction> {
    let mut names: BTreeSet<&String> = BTreeSet::new();
    names.extend(cmus.keys());
    names.extend(m3u8.keys());
    names.extend(cache.keys());

    let mut actions = Vec::with_capacity(names.len());
    for name in names {
        let action = match (cmus.get(name), m3u8.get(name), cache.get(name)) {
            (Some(c), None, _) => SyncAction::NewFromCmus {
                name: name.clone(),
                cmus_path: c.clone(),
            },
            (None, Some(m), _) => SyncAction::NewFromM3u8 {
                name: name.clone(),
                m3u8_path: m.clone(),
            },
            (Some(c), Some(m), Some(b)) => SyncAction::ThreeWayMerge {
                name: name.clone(),
                cmus_path: c.clone(),
                m3u8_path: m.clone(),
                cache_path: b.clone(),
            },
            (Some(c), Some(m), None) => SyncAction::MergeWithoutBase {
                name: name.clone(),
                cmus_path: c.clone(),
                m3u8_path: m.clone(),
            },
            (None, None, Some(b)) => SyncAction::DeleteStaleCache {
                name: name.clone(),
                cache_path: b.clone(),
            },
            // The name came from one of the three listings.
            (None, None, None) => continue,
        };
        actions.push(action);
    }
    actions
}
