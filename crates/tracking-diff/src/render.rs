//! Turn diff segments into numbered, HTML-escaped display lines.

use crate::model::{DiffSegment, RenderedLine, SegmentKind};

/// Escape `&`, `<` and `>` for safe embedding in HTML.
///
/// Ampersand is replaced first so the entities introduced by the other
/// substitutions are not escaped again.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render segments into display lines, numbering both sides from 1.
pub fn render_lines(segments: &[DiffSegment]) -> Vec<RenderedLine> {
    render_lines_from(segments, 1, 1)
}

/// Render segments into display lines with caller-supplied base numbers.
///
/// A multi-line segment becomes one entry per physical line, each inheriting
/// the segment's kind. Old-side numbering covers kept and removed lines,
/// new-side numbering covers kept and added lines; both increase by one per
/// numbered line with no gaps.
pub fn render_lines_from(
    segments: &[DiffSegment],
    base_old: u32,
    base_new: u32,
) -> Vec<RenderedLine> {
    let mut old_line = base_old;
    let mut new_line = base_new;
    let mut lines = Vec::new();

    for segment in segments {
        for text in segment.lines() {
            let escaped = escape_html(text);
            let rendered = match segment.kind {
                SegmentKind::Removed => {
                    let line = RenderedLine::removed(escaped, old_line);
                    old_line += 1;
                    line
                }
                SegmentKind::Kept => {
                    let line = RenderedLine::kept(escaped, old_line, new_line);
                    old_line += 1;
                    new_line += 1;
                    line
                }
                SegmentKind::Added => {
                    let line = RenderedLine::added(escaped, new_line);
                    new_line += 1;
                    line
                }
            };
            lines.push(rendered);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::compute_line_diff;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        // A pre-existing entity is escaped literally, not preserved.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_escapes_content() {
        let segments = vec![DiffSegment::new(SegmentKind::Added, "<script>")];
        let lines = render_lines(&segments);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].escaped_text, "&lt;script&gt;");
    }

    #[test]
    fn test_multi_line_segment_explodes() {
        let segments = vec![
            DiffSegment::new(SegmentKind::Kept, "a\nb"),
            DiffSegment::new(SegmentKind::Removed, "c\nd"),
            DiffSegment::new(SegmentKind::Added, "e"),
        ];
        let lines = render_lines(&segments);
        assert_eq!(lines.len(), 5);

        assert_eq!(lines[0].kind, SegmentKind::Kept);
        assert_eq!(lines[0].old_line, Some(1));
        assert_eq!(lines[0].new_line, Some(1));
        assert_eq!(lines[1].old_line, Some(2));
        assert_eq!(lines[1].new_line, Some(2));

        assert_eq!(lines[2].kind, SegmentKind::Removed);
        assert_eq!(lines[2].old_line, Some(3));
        assert_eq!(lines[2].new_line, None);
        assert_eq!(lines[3].old_line, Some(4));

        assert_eq!(lines[4].kind, SegmentKind::Added);
        assert_eq!(lines[4].old_line, None);
        assert_eq!(lines[4].new_line, Some(3));
    }

    #[test]
    fn test_numbering_is_gap_free() {
        let segments = compute_line_diff("a\nb\nc\nd\ne", "a\nx\nc\ny\nz\ne");
        let lines = render_lines(&segments);

        let old_numbers: Vec<u32> = lines.iter().filter_map(|l| l.old_line).collect();
        let new_numbers: Vec<u32> = lines.iter().filter_map(|l| l.new_line).collect();
        assert_eq!(old_numbers, (1..=5).collect::<Vec<u32>>());
        assert_eq!(new_numbers, (1..=6).collect::<Vec<u32>>());
    }

    #[test]
    fn test_custom_bases() {
        let segments = vec![
            DiffSegment::new(SegmentKind::Removed, "old"),
            DiffSegment::new(SegmentKind::Added, "new"),
            DiffSegment::new(SegmentKind::Kept, "same"),
        ];
        let lines = render_lines_from(&segments, 10, 20);
        assert_eq!(lines[0].old_line, Some(10));
        assert_eq!(lines[1].new_line, Some(20));
        assert_eq!(lines[2].old_line, Some(11));
        assert_eq!(lines[2].new_line, Some(21));
    }

    #[test]
    fn test_render_is_pure() {
        let segments = compute_line_diff("a\nb", "a\nc");
        assert_eq!(render_lines(&segments), render_lines(&segments));
    }
}
