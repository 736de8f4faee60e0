use thiserror::Error;

use crate::playlist::{Playlist, Track};

use super::align::{AlignOp, align};

/// Marker used in conflict reports when one side removed the base track.
const DELETED: &str = "(deleted)";

/// A base track was changed incompatibly on both sides. Reported as data, not
/// a fault: the caller surfaces it and leaves all stores untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("conflicting edits to '{base_path}': one side wants '{left_change}', the other '{right_change}'")]
pub struct MergeConflict {
    pub base_path: String,
    pub left_change: String,
    pub right_change: String,
}

/// Three-way merge of two derived playlists against their common ancestor.
///
/// Both sides are aligned against `base` and the two alignments are walked in
/// lockstep over the base index. Insertions never consume a base element and
/// drain left side first, the fixed tie-break mirroring the aligner's own.
/// Per base element:
///
/// - matched by both sides: keep the base track;
/// - matched by one side, substituted by the other: take the substitution;
/// - substituted identically on both sides: take the common replacement;
/// - removed on one side, matched on the other: drop it (the removal wins);
/// - substituted differently, or removed on one side while substituted on the
///   other: `MergeConflict`.
pub fn merge(base: &Playlist, left: &Playlist, right: &Playlist) -> Result<Playlist, MergeConflict> {
    let bl = align(&base.tracks, &left.tracks).ops;
    let br = align(&base.tracks, &right.tracks).ops;

    let mut merged: Vec<Track> = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    loop {
        if let Some(AlignOp::OnlyInB { b }) = bl.get(i) {
            merged.push(left.tracks[*b].clone());
            i += 1;
            continue;
        }
        if let Some(AlignOp::OnlyInB { b }) = br.get(j) {
            merged.push(right.tracks[*b].clone());
            j += 1;
            continue;
        }

        // Both alignments cover all of base, so once insertions are drained
        // either both cursors point at an op consuming the same base element
        // or both are exhausted.
        let (Some(op_left), Some(op_right)) = (bl.get(i), br.get(j)) else {
            break;
        };
        i += 1;
        j += 1;

        match (op_left, op_right) {
            (AlignOp::Match { a, .. }, AlignOp::Match { .. }) => {
                merged.push(base.tracks[*a].clone());
            }
            (AlignOp::Match { .. }, AlignOp::Substitute { b, .. }) => {
                merged.push(right.tracks[*b].clone());
            }
            (AlignOp::Substitute { b, .. }, AlignOp::Match { .. }) => {
                merged.push(left.tracks[*b].clone());
            }
            (AlignOp::Substitute { a, b: lb }, AlignOp::Substitute { b: rb, .. }) => {
                let from_left = &left.tracks[*lb];
                let from_right = &right.tracks[*rb];
                if from_left.relative_path == from_right.relative_path {
                    merged.push(from_left.clone());
                } else {
                    return Err(MergeConflict {
                        base_path: base.tracks[*a].relative_path.clone(),
                        left_change: from_left.relative_path.clone(),
                        right_change: from_right.relative_path.clone(),
                    });
                }
            }
            (AlignOp::OnlyInA { .. }, AlignOp::Match { .. })
            | (AlignOp::Match { .. }, AlignOp::OnlyInA { .. })
            | (AlignOp::OnlyInA { .. }, AlignOp::OnlyInA { .. }) => {}
            (AlignOp::OnlyInA { a }, AlignOp::Substitute { b, .. }) => {
                return Err(MergeConflict {
                    base_path: base.tracks[*a].relative_path.clone(),
                    left_change: DELETED.to_string(),
                    right_change: right.tracks[*b].relative_path.clone(),
                });
            }
            (AlignOp::Substitute { a, b }, AlignOp::OnlyInA { .. }) => {
                return Err(MergeConflict {
                    base_path: base.tracks[*a].relative_path.clone(),
                    left_change: left.tracks[*b].relative_path.clone(),
                    right_change: DELETED.to_string(),
                });
            }
            // Insertions were drained above.
            (AlignOp::OnlyInB { .. }, _) | (_, AlignOp::OnlyInB { .. }) => unreachable!(),
        }
    }

    Ok(Playlist::new(merged))
}
