use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/plsync/config.toml` or
/// `~/.config/plsync/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `PLSYNC__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub stores: StoreSettings,
    pub sync: SyncSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stores: StoreSettings::default(),
            sync: SyncSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Default directory of cmus playlists (bare path-per-line files).
    pub cmus_dir: Option<PathBuf>,
    /// Default directory of extended-M3U playlists.
    pub m3u8_dir: Option<PathBuf>,
    /// Default directory of JSON merge-base snapshots.
    pub cache_dir: Option<PathBuf>,
    /// Prefix stripped from cmus paths on decode and re-added on encode.
    pub cmus_prefix: Option<String>,
    /// File extension of m3u8 store entries (with dot).
    pub m3u8_extension: String,
    /// File extension of cache store entries (with dot).
    pub cache_extension: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            cmus_dir: None,
            m3u8_dir: None,
            cache_dir: None,
            cmus_prefix: None,
            m3u8_extension: ".m3u8".to_string(),
            cache_extension: ".json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Whether differing display names/runtimes count as a change when both
    /// live stores hold the same track paths. Off by default: only the track
    /// paths drive change detection.
    pub compare_metadata: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            compare_metadata: false,
        }
    }
}
