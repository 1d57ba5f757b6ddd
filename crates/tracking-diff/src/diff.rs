//! Line-granularity diff computation using the similar crate.

use similar::{ChangeTag, TextDiff};

use crate::model::{DiffSegment, SegmentKind};

impl From<ChangeTag> for SegmentKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Delete => SegmentKind::Removed,
            ChangeTag::Equal => SegmentKind::Kept,
            ChangeTag::Insert => SegmentKind::Added,
        }
    }
}

/// Decide whether a change should be rendered as a line diff.
///
/// Returns true only if both values are present and each contains at least
/// one newline. Single-line or missing values read better as a plain
/// before/after pair.
pub fn is_eligible_for_line_diff(old: Option<&str>, new: Option<&str>) -> bool {
    matches!((old, new), (Some(o), Some(n)) if o.contains('\n') && n.contains('\n'))
}

/// Compute a line-level diff between two text blobs.
///
/// Each full line is the atomic unit of comparison. The raw change stream is
/// coalesced into maximal same-kind runs, so the result alternates between
/// kinds. Segments come back in document order: concatenating the `Kept` and
/// `Removed` lines reconstructs `old`, concatenating `Kept` and `Added`
/// reconstructs `new`.
///
/// Degenerate inputs (empty strings, identical strings, no trailing newline)
/// are normal cases, not errors. Identical inputs yield a single `Kept`
/// segment.
pub fn compute_line_diff(old: &str, new: &str) -> Vec<DiffSegment> {
    // Naive split: a trailing newline contributes a final empty line.
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();

    let diff = TextDiff::from_slices(&old_lines, &new_lines);

    let mut segments: Vec<DiffSegment> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = SegmentKind::from(change.tag());
        let line = change.value();
        match segments.last_mut() {
            Some(last) if last.kind == kind => {
                last.text.push('\n');
                last.text.push_str(line);
            }
            _ => segments.push(DiffSegment::new(kind, line)),
        }
    }

    log::trace!(
        "diffed {} old / {} new lines into {} segments",
        old_lines.len(),
        new_lines.len(),
        segments.len()
    );

    segments
}
