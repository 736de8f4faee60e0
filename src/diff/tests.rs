use super::align::{AlignOp, align};
use super::merge::merge;
use crate::playlist::{Playlist, Track};

fn t(path: &str) -> Track {
    Track {
        relative_path: path.into(),
        display_name: path.into(),
        runtime_s: None,
    }
}

fn pl(paths: &[&str]) -> Playlist {
    Playlist::new(paths.iter().map(|p| t(p)).collect())
}

#[test]
fn align_identical_sequences_costs_zero() {
    let a = pl(&["a", "b", "c"]);
    let alignment = align(&a.tracks, &a.tracks);
    assert_eq!(alignment.cost, 0);
    assert_eq!(
        alignment.ops,
        vec![
            AlignOp::Match { a: 0, b: 0 },
            AlignOp::Match { a: 1, b: 1 },
            AlignOp::Match { a: 2, b: 2 },
        ]
    );
}

#[test]
fn align_cost_zero_only_for_path_equal_sequences() {
    let a = pl(&["a", "b"]);
    let b = pl(&["a", "x"]);
    assert_ne!(align(&a.tracks, &b.tracks).cost, 0);
}

#[test]
fn align_ignores_metadata_differences() {
    let a = Playlist::new(vec![Track {
        relative_path: "a.mp3".into(),
        display_name: "one name".into(),
        runtime_s: Some(1),
    }]);
    let b = Playlist::new(vec![Track {
        relative_path: "a.mp3".into(),
        display_name: "another".into(),
        runtime_s: None,
    }]);
    assert_eq!(align(&a.tracks, &b.tracks).cost, 0);
}

#[test]
fn align_empty_sequences() {
    let empty = pl(&[]);
    let two = pl(&["x", "y"]);

    assert_eq!(align(&empty.tracks, &empty.tracks).cost, 0);
    assert!(align(&empty.tracks, &empty.tracks).ops.is_empty());

    let alignment = align(&empty.tracks, &two.tracks);
    assert_eq!(alignment.cost, 2);
    assert_eq!(
        alignment.ops,
        vec![AlignOp::OnlyInB { b: 0 }, AlignOp::OnlyInB { b: 1 }]
    );

    let alignment = align(&two.tracks, &empty.tracks);
    assert_eq!(alignment.cost, 2);
    assert_eq!(
        alignment.ops,
        vec![AlignOp::OnlyInA { a: 0 }, AlignOp::OnlyInA { a: 1 }]
    );
}

#[test]
fn align_cost_is_symmetric() {
    let cases = [
        (pl(&["a", "b", "c"]), pl(&["b", "c", "d"])),
        (pl(&["a"]), pl(&[])),
        (pl(&["a", "b"]), pl(&["b", "a"])),
        (pl(&["a", "b", "c", "d"]), pl(&["a", "x", "c"])),
    ];
    for (a, b) in &cases {
        assert_eq!(
            align(&a.tracks, &b.tracks).cost,
            align(&b.tracks, &a.tracks).cost
        );
    }
}

#[test]
fn align_detects_appended_tracks() {
    let a = pl(&["a", "b"]);
    let b = pl(&["a", "b", "c"]);
    let alignment = align(&a.tracks, &b.tracks);
    assert_eq!(alignment.cost, 1);
    assert_eq!(
        alignment.ops,
        vec![
            AlignOp::Match { a: 0, b: 0 },
            AlignOp::Match { a: 1, b: 1 },
            AlignOp::OnlyInB { b: 2 },
        ]
    );
}

#[test]
fn align_detects_removed_prefix() {
    let a = pl(&["a", "b", "c"]);
    let b = pl(&["b", "c"]);
    let alignment = align(&a.tracks, &b.tracks);
    assert_eq!(alignment.cost, 1);
    assert_eq!(
        alignment.ops,
        vec![
            AlignOp::OnlyInA { a: 0 },
            AlignOp::Match { a: 1, b: 0 },
            AlignOp::Match { a: 2, b: 1 },
        ]
    );
}

#[test]
fn align_tie_break_prefers_diagonal() {
    // Swapping two tracks could also be modelled as insert+delete pairs at
    // cost 2; the diagonal preference must pick two substitutions instead.
    let a = pl(&["a", "b"]);
    let b = pl(&["b", "a"]);
    let alignment = align(&a.tracks, &b.tracks);
    assert_eq!(alignment.cost, 2);
    assert_eq!(
        alignment.ops,
        vec![
            AlignOp::Substitute { a: 0, b: 0 },
            AlignOp::Substitute { a: 1, b: 1 },
        ]
    );
}

#[test]
fn align_is_deterministic() {
    let a = pl(&["a", "b", "c", "d", "e"]);
    let b = pl(&["e", "d", "c", "b", "a"]);
    let first = align(&a.tracks, &b.tracks);
    for _ in 0..3 {
        assert_eq!(align(&a.tracks, &b.tracks), first);
    }
}

#[test]
fn merge_side_equal_to_base_returns_other_side() {
    let base = pl(&["a", "b", "c"]);
    let changed = pl(&["a", "c", "d"]);

    let merged = merge(&base, &base, &changed).unwrap();
    assert_eq!(merged, changed);

    let merged = merge(&base, &changed, &base).unwrap();
    assert_eq!(merged, changed);
}

#[test]
fn merge_both_sides_equal_to_base_returns_base() {
    let base = pl(&["a", "b"]);
    assert_eq!(merge(&base, &base, &base).unwrap(), base);
}

#[test]
fn merge_appends_left_before_right() {
    let base = pl(&["a", "b"]);
    let left = pl(&["a", "b", "l1", "l2"]);
    let right = pl(&["a", "b", "r1"]);
    let merged = merge(&base, &left, &right).unwrap();
    assert_eq!(merged, pl(&["a", "b", "l1", "l2", "r1"]));
}

#[test]
fn merge_inserts_at_same_position_keep_left_first() {
    let base = pl(&["a", "b"]);
    let left = pl(&["a", "l", "b"]);
    let right = pl(&["a", "r", "b"]);
    let merged = merge(&base, &left, &right).unwrap();
    assert_eq!(merged, pl(&["a", "l", "r", "b"]));
}

#[test]
fn merge_combines_append_and_substitution() {
    // left appended d, right substituted b -> x; no conflict.
    let base = pl(&["a", "b", "c"]);
    let left = pl(&["a", "b", "c", "d"]);
    let right = pl(&["a", "x", "c"]);
    let merged = merge(&base, &left, &right).unwrap();
    assert_eq!(merged, pl(&["a", "x", "c", "d"]));
}

#[test]
fn merge_identical_substitutions_agree() {
    let base = pl(&["a", "b", "c"]);
    let left = pl(&["a", "x", "c"]);
    let right = pl(&["a", "x", "c"]);
    let merged = merge(&base, &left, &right).unwrap();
    assert_eq!(merged, pl(&["a", "x", "c"]));
}

#[test]
fn merge_conflicting_substitutions_name_the_base_track() {
    let base = pl(&["a", "b", "c"]);
    let left = pl(&["a", "y", "c"]);
    let right = pl(&["a", "z", "c"]);
    let conflict = merge(&base, &left, &right).unwrap_err();
    assert_eq!(conflict.base_path, "b");
    assert_eq!(conflict.left_change, "y");
    assert_eq!(conflict.right_change, "z");
}

#[test]
fn merge_deletion_wins_over_match() {
    let base = pl(&["a", "b", "c"]);
    let left = pl(&["a", "c"]);
    let right = pl(&["a", "b", "c", "d"]);
    let merged = merge(&base, &left, &right).unwrap();
    assert_eq!(merged, pl(&["a", "c", "d"]));
}

#[test]
fn merge_same_deletion_on_both_sides() {
    let base = pl(&["a", "b", "c"]);
    let left = pl(&["a", "c"]);
    let right = pl(&["a", "c"]);
    assert_eq!(merge(&base, &left, &right).unwrap(), pl(&["a", "c"]));
}

#[test]
fn merge_deletion_against_substitution_conflicts() {
    let base = pl(&["a", "b", "c"]);
    let left = pl(&["a", "c"]);
    let right = pl(&["a", "x", "c"]);
    let conflict = merge(&base, &left, &right).unwrap_err();
    assert_eq!(conflict.base_path, "b");
    assert_eq!(conflict.left_change, "(deleted)");
    assert_eq!(conflict.right_change, "x");
}

#[test]
fn merge_keeps_metadata_of_the_emitting_side() {
    let base = Playlist::new(vec![t("a"), t("b")]);
    let left = Playlist::new(vec![
        t("a"),
        Track {
            relative_path: "x".into(),
            display_name: "X from left".into(),
            runtime_s: Some(7),
        },
    ]);
    let right = base.clone();
    let merged = merge(&base, &left, &right).unwrap();
    assert_eq!(merged.tracks[1].display_name, "X from left");
    assert_eq!(merged.tracks[1].runtime_s, Some(7));
}
