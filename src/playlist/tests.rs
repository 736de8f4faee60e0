use super::*;

fn track(path: &str, name: &str, runtime_s: Option<u64>) -> Track {
    Track {
        relative_path: path.into(),
        display_name: name.into(),
        runtime_s,
    }
}

#[test]
fn paths_equal_ignores_metadata() {
    let a = Playlist::new(vec![track("x.mp3", "X", Some(10))]);
    let b = Playlist::new(vec![track("x.mp3", "other", None)]);
    assert!(a.paths_equal(&b));
    assert_ne!(a, b);
}

#[test]
fn paths_equal_requires_same_length() {
    let a = Playlist::new(vec![track("x.mp3", "X", None)]);
    let b = Playlist::new(vec![
        track("x.mp3", "X", None),
        track("y.mp3", "Y", None),
    ]);
    assert!(!a.paths_equal(&b));
}

#[test]
fn paths_equal_requires_same_order() {
    let a = Playlist::new(vec![track("x.mp3", "X", None), track("y.mp3", "Y", None)]);
    let b = Playlist::new(vec![track("y.mp3", "Y", None), track("x.mp3", "X", None)]);
    assert!(!a.paths_equal(&b));
}

#[test]
fn empty_playlists_are_paths_equal() {
    assert!(Playlist::default().paths_equal(&Playlist::default()));
}
