use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::playlist::{Playlist, Track};

const CACHE_VERSION: u64 = 1;

/// Wire form of a cache snapshot, the merge base for the next run.
#[derive(Debug, Serialize, Deserialize)]
struct CacheFile {
    version: u64,
    tracks: Vec<CacheTrack>,
}

#[derive(Debug, Serialize, Deserialize)]
struct CacheTrack {
    relative_path: String,
    display_name: String,
    runtime_s: Option<u64>,
}

/// Decode a JSON cache snapshot; any version other than 1 is rejected.
pub fn decode(text: &str) -> Result<Playlist, FormatError> {
    let file: CacheFile = serde_json::from_str(text)?;
    if file.version != CACHE_VERSION {
        return Err(FormatError::UnsupportedCacheVersion(file.version));
    }
    Ok(Playlist::new(
        file.tracks
            .into_iter()
            .map(|t| Track {
                relative_path: t.relative_path,
                display_name: t.display_name,
                runtime_s: t.runtime_s,
            })
            .collect(),
    ))
}

/// Encode a playlist as a version-1 cache snapshot.
pub fn encode(playlist: &Playlist) -> Result<String, FormatError> {
    let file = CacheFile {
        version: CACHE_VERSION,
        tracks: playlist
            .tracks
            .iter()
            .map(|t| CacheTrack {
                relative_path: t.relative_path.clone(),
                display_name: t.display_name.clone(),
                runtime_s: t.runtime_s,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file)?)
}
