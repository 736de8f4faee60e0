use crate::error::FormatError;
use crate::playlist::{Playlist, Track};

const HEADER: &str = "#EXTM3U";

/// Directives that carry nothing we synchronize.
const IGNORED_DIRECTIVES: [&str; 10] = [
    "#PLAYLIST", "#EXTGRP", "#EXTALB", "#EXTART", "#EXTGENRE", "#EXTM3A", "#EXTBYT", "#EXTBIN",
    "#EXTENC", "#EXTIMG",
];

/// Decode an extended-M3U playlist.
///
/// The first non-empty line must be `#EXTM3U` (an optional BOM in front of it
/// is tolerated). `#EXTINF:<runtime_or_empty>,<title>` supplies the metadata
/// of the next bare path line; every other `#` line is skipped. A bare path
/// closes out the current track and resets the metadata accumulator.
pub fn decode(text: &str) -> Result<Playlist, FormatError> {
    let mut lines = text
        .lines()
        .map(|l| l.trim_start_matches('\u{feff}').trim())
        .filter(|l| !l.is_empty());
    if lines.next() != Some(HEADER) {
        return Err(FormatError::MissingHeader);
    }

    let mut runtime_s: Option<u64> = None;
    let mut display_name = String::new();
    let mut tracks = Vec::new();
    for line in lines {
        if let Some(info) = line.strip_prefix("#EXTINF:") {
            // Empty, negative or unparsable runtimes all decode as unknown.
            match info.split_once(',') {
                Some((runtime, title)) => {
                    runtime_s = runtime.trim().parse().ok();
                    display_name = title.to_string();
                }
                None => display_name = info.to_string(),
            }
        } else if line.starts_with('#') {
            let directive = line.split(':').next().unwrap_or(line);
            if !IGNORED_DIRECTIVES.contains(&directive) {
                tracing::debug!(line, "skipping unrecognized m3u8 comment");
            }
        } else {
            tracks.push(Track {
                relative_path: line.to_string(),
                display_name: std::mem::take(&mut display_name),
                runtime_s: runtime_s.take(),
            });
        }
    }
    Ok(Playlist::new(tracks))
}

/// Encode a playlist as extended M3U. Unknown runtimes are written as `-1`.
pub fn encode(playlist: &Playlist) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for track in &playlist.tracks {
        let runtime = track.runtime_s.map_or(-1, |s| s as i64);
        out.push_str(&format!("#EXTINF:{},{}\n", runtime, track.display_name));
        out.push_str(&track.relative_path);
        out.push('\n');
    }
    out
}
