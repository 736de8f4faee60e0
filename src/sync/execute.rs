use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::codec::{cache, cmus, m3u8};
use crate::diff::merge;
use crate::error::SyncError;
use crate::playlist::Playlist;

use super::plan::{SyncAction, plan};
use super::stores::list_store;

/// Everything an action needs to locate and rewrite the three stores.
#[derive(Debug, Clone)]
pub struct SyncContext {
    pub cmus_dir: PathBuf,
    pub m3u8_dir: PathBuf,
    pub cache_dir: PathBuf,
    /// Prefix stripped from cmus paths on decode and re-added on encode.
    pub cmus_prefix: String,
    pub m3u8_ext: String,
    pub cache_ext: String,
    /// When set, differing display names or runtimes count as a change even
    /// if the track paths line up.
    pub compare_metadata: bool,
}

impl SyncContext {
    fn cmus_path(&self, name: &str) -> PathBuf {
        self.cmus_dir.join(name)
    }

    fn m3u8_path(&self, name: &str) -> PathBuf {
        self.m3u8_dir.join(format!("{}{}", name, self.m3u8_ext))
    }

    fn cache_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{}{}", name, self.cache_ext))
    }

    fn playlists_equal(&self, a: &Playlist, b: &Playlist) -> bool {
        if self.compare_metadata {
            a == b
        } else {
            a.paths_equal(b)
        }
    }
}

/// What a successfully executed action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// At least one store was rewritten.
    Synced,
    /// All stores already agreed; nothing was written.
    UpToDate,
    CacheDeleted,
}

/// Aggregated per-action results of one run, in plan (name) order.
#[derive(Debug)]
pub struct SyncReport {
    pub outcomes: Vec<(String, Result<ActionOutcome, SyncError>)>,
}

impl SyncReport {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_err()).count()
    }
}

/// Which stores an action rewrites.
enum Store {
    Cmus,
    M3u8,
    Cache,
}

/// A write staged as a temp file next to its destination. Renaming into place
/// happens only after every write of the action has staged cleanly; dropping
/// an unstaged temp file removes it.
struct StagedWrite {
    tmp: NamedTempFile,
    dest: PathBuf,
}

fn stage(dest: PathBuf, content: &str) -> Result<StagedWrite, SyncError> {
    let dir = dest.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    Ok(StagedWrite { tmp, dest })
}

fn commit(staged: Vec<StagedWrite>) -> Result<(), SyncError> {
    for write in staged {
        write
            .tmp
            .persist(&write.dest)
            .map_err(|e| SyncError::Io(e.error))?;
    }
    Ok(())
}

fn write_stores(
    ctx: &SyncContext,
    name: &str,
    playlist: &Playlist,
    stores: &[Store],
) -> Result<(), SyncError> {
    let mut staged = Vec::with_capacity(stores.len());
    for store in stores {
        let (dest, content) = match store {
            Store::Cmus => (ctx.cmus_path(name), cmus::encode(playlist, &ctx.cmus_prefix)),
            Store::M3u8 => (ctx.m3u8_path(name), m3u8::encode(playlist)),
            Store::Cache => (ctx.cache_path(name), cache::encode(playlist)?),
        };
        staged.push(stage(dest, &content)?);
    }
    commit(staged)
}

/// Apply one planned action. A failure aborts only this action, and no final
/// path is touched unless every write for the action staged cleanly.
pub fn execute(action: &SyncAction, ctx: &SyncContext) -> Result<ActionOutcome, SyncError> {
    match action {
        SyncAction::NewFromCmus { name, cmus_path } => {
            let playlist = cmus::decode(&ctx.cmus_prefix, &fs::read_to_string(cmus_path)?);
            info!(%name, tracks = playlist.tracks.len(), "new playlist from cmus");
            write_stores(ctx, name, &playlist, &[Store::M3u8, Store::Cache])?;
            Ok(ActionOutcome::Synced)
        }
        SyncAction::NewFromM3u8 { name, m3u8_path } => {
            let playlist = m3u8::decode(&fs::read_to_string(m3u8_path)?)?;
            info!(%name, tracks = playlist.tracks.len(), "new playlist from m3u8");
            write_stores(ctx, name, &playlist, &[Store::Cmus, Store::Cache])?;
            Ok(ActionOutcome::Synced)
        }
        SyncAction::ThreeWayMerge {
            name,
            cmus_path,
            m3u8_path,
            cache_path,
        } => {
            let base = cache::decode(&fs::read_to_string(cache_path)?)?;
            let from_m3u8 = m3u8::decode(&fs::read_to_string(m3u8_path)?)?;
            let from_cmus = cmus::decode(&ctx.cmus_prefix, &fs::read_to_string(cmus_path)?);

            let cmus_matches_base = ctx.playlists_equal(&from_cmus, &base);
            let m3u8_matches_base = ctx.playlists_equal(&from_m3u8, &base);
            if cmus_matches_base && m3u8_matches_base {
                debug!(%name, "stores already in sync");
                Ok(ActionOutcome::UpToDate)
            } else if cmus_matches_base {
                info!(%name, "cmus is stale, taking m3u8");
                write_stores(ctx, name, &from_m3u8, &[Store::Cmus, Store::Cache])?;
                Ok(ActionOutcome::Synced)
            } else if m3u8_matches_base {
                info!(%name, "m3u8 is stale, taking cmus");
                write_stores(ctx, name, &from_cmus, &[Store::M3u8, Store::Cache])?;
                Ok(ActionOutcome::Synced)
            } else {
                // Side assignment is fixed: m3u8 is the left side, cmus the
                // right. A conflict propagates out before anything is staged.
                let merged = merge(&base, &from_m3u8, &from_cmus)?;
                info!(%name, tracks = merged.tracks.len(), "both sides changed, merged");
                write_stores(
                    ctx,
                    name,
                    &merged,
                    &[Store::Cmus, Store::M3u8, Store::Cache],
                )?;
                Ok(ActionOutcome::Synced)
            }
        }
        SyncAction::MergeWithoutBase { name, .. } => Err(SyncError::NoBase { name: name.clone() }),
        SyncAction::DeleteStaleCache { name, cache_path } => {
            match fs::remove_file(cache_path) {
                Ok(()) => debug!(%name, "removed stale cache entry"),
                // Already gone is fine; deletion is idempotent.
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
            Ok(ActionOutcome::CacheDeleted)
        }
    }
}

/// Plan and execute a full synchronization pass.
///
/// Actions are independent: a failure is recorded in the report and the run
/// moves on to the next name. Only listing failures (missing live store
/// directories) abort the whole run; the cache directory is created on
/// demand.
pub fn run(ctx: &SyncContext) -> io::Result<SyncReport> {
    fs::create_dir_all(&ctx.cache_dir)?;
    let cmus = list_store(&ctx.cmus_dir, "")?;
    let m3u8 = list_store(&ctx.m3u8_dir, &ctx.m3u8_ext)?;
    let cache = list_store(&ctx.cache_dir, &ctx.cache_ext)?;

    let actions = plan(&cmus, &m3u8, &cache);
    debug!(count = actions.len(), "planned actions");

    let mut outcomes = Vec::with_capacity(actions.len());
    for action in &actions {
        let result = execute(action, ctx);
        if let Err(err) = &result {
            warn!(name = action.name(), %err, "action failed");
        }
        outcomes.push((action.name().to_string(), result));
    }
    Ok(SyncReport { outcomes })
}
