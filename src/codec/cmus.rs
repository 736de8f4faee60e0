use std::path::Path;

use crate::playlist::{Playlist, Track};

/// Decode a cmus playlist: one path per line, blank lines skipped.
///
/// `prefix` is stripped from each path to obtain the store-relative path;
/// lines that do not start with the prefix are kept as-is. The display name
/// is the file's base name without extension; this format carries no runtime.
pub fn decode(prefix: &str, text: &str) -> Playlist {
    let mut tracks = Vec::new();
    for line in text.lines() {
        let path = line.trim();
        if path.is_empty() {
            continue;
        }
        let display_name = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_string();
        tracks.push(Track {
            relative_path: path.strip_prefix(prefix).unwrap_or(path).to_string(),
            display_name,
            runtime_s: None,
        });
    }
    Playlist::new(tracks)
}

/// Encode a playlist for cmus, prefixing every relative path back to the
/// configured location. The prefix is prepended verbatim, mirroring the exact
/// strip on decode, so decode/encode round-trip byte for byte.
pub fn encode(playlist: &Playlist, prefix: &str) -> String {
    let mut out = String::new();
    for track in &playlist.tracks {
        out.push_str(prefix);
        out.push_str(&track.relative_path);
        out.push('\n');
    }
    out
}
