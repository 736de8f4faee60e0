use crate::playlist::Track;

/// One step of an alignment between two track sequences `a` and `b`.
/// Indices point into the respective input slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOp {
    /// `a[a]` and `b[b]` are the same track by path.
    Match { a: usize, b: usize },
    /// `a[a]` was replaced by `b[b]`.
    Substitute { a: usize, b: usize },
    /// `a[a]` has no counterpart in `b`.
    OnlyInA { a: usize },
    /// `b[b]` has no counterpart in `a`.
    OnlyInB { b: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Number of non-`Match` operations.
    pub cost: usize,
    /// Operations in forward order over both sequences.
    pub ops: Vec<AlignOp>,
}

/// Back-pointer of one cost cell.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Step {
    Origin,
    Diag,
    Up,
    Left,
}

fn distance(a: &Track, b: &Track) -> usize {
    if a.relative_path == b.relative_path { 0 } else { 1 }
}

/// Minimal-edit alignment of two track sequences.
///
/// Classic edit-distance dynamic programming over a `(|a|+1) x (|b|+1)` cost
/// table with back-pointers, followed by a backtrace from the far corner.
/// Ties are broken diagonal first, then up (`OnlyInA`), then left (`OnlyInB`),
/// so equal elements align whenever possible and identical inputs always
/// produce identical output.
pub fn align(a: &[Track], b: &[Track]) -> Alignment {
    // One independently allocated row per index; a table built as n copies of
    // a single shared row would alias every row to the last one written.
    let mut table: Vec<Vec<(usize, Step)>> = (0..=a.len())
        .map(|_| vec![(0, Step::Origin); b.len() + 1])
        .collect();

    // Aligning an empty prefix against k elements costs k insertions.
    for (i, row) in table.iter_mut().enumerate().skip(1) {
        row[0] = (i, Step::Up);
    }
    for j in 1..=b.len() {
        table[0][j] = (j, Step::Left);
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let diag = table[i - 1][j - 1].0 + distance(&a[i - 1], &b[j - 1]);
            let up = table[i - 1][j].0 + 1;
            let left = table[i][j - 1].0 + 1;
            table[i][j] = if diag <= up && diag <= left {
                (diag, Step::Diag)
            } else if up <= left {
                (up, Step::Up)
            } else {
                (left, Step::Left)
            };
        }
    }

    let mut ops = Vec::with_capacity(a.len().max(b.len()));
    let (mut i, mut j) = (a.len(), b.len());
    loop {
        match table[i][j].1 {
            Step::Origin => break,
            Step::Diag => {
                i -= 1;
                j -= 1;
                ops.push(if distance(&a[i], &b[j]) == 0 {
                    AlignOp::Match { a: i, b: j }
                } else {
                    AlignOp::Substitute { a: i, b: j }
                });
            }
            Step::Up => {
                i -= 1;
                ops.push(AlignOp::OnlyInA { a: i });
            }
            Step::Left => {
                j -= 1;
                ops.push(AlignOp::OnlyInB { b: j });
            }
        }
    }
    ops.reverse();

    Alignment {
        cost: table[a.len()][b.len()].0,
        ops,
    }
}
