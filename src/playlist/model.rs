/// One entry of a playlist.
///
/// `relative_path` is the identity key: alignment and change detection compare
/// tracks by path only, never by metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Path relative to the music collection root.
    pub relative_path: String,
    pub display_name: String,
    /// Playback length in seconds; `None` when the source format does not
    /// carry one (cmus lines, `#EXTINF:-1`). Distinct from `Some(0)`.
    pub runtime_s: Option<u64>,
}

/// An ordered track sequence. Order is playback order and survives
/// parse/merge/write round trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// Whether both playlists hold the same paths in the same order, ignoring
    /// display names and runtimes. Full `==` also compares metadata.
    pub fn paths_equal(&self, other: &Playlist) -> bool {
        self.tracks.len() == other.tracks.len()
            && self
                .tracks
                .iter()
                .zip(&other.tracks)
                .all(|(a, b)| a.relative_path == b.relative_path)
    }
}
