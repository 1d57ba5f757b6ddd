//! Data models for line-level tracking value diffs.

use serde::{Deserialize, Serialize};

/// Classification of a diff segment or rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Line exists only in the old value.
    Removed,
    /// Line is unchanged between both values.
    Kept,
    /// Line exists only in the new value.
    Added,
}

impl SegmentKind {
    /// Stable lowercase name, usable as a CSS class by the view layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentKind::Removed => "removed",
            SegmentKind::Kept => "kept",
            SegmentKind::Added => "added",
        }
    }

    /// Get the unified-diff prefix character for this kind.
    pub fn prefix(&self) -> char {
        match self {
            SegmentKind::Removed => '-',
            SegmentKind::Kept => ' ',
            SegmentKind::Added => '+',
        }
    }
}

/// A maximal run of consecutive lines sharing one diff classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    /// Provenance of the run.
    pub kind: SegmentKind,
    /// The run's lines joined with `\n`; may be empty, never absent.
    pub text: String,
}

impl DiffSegment {
    /// Create a new segment.
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The individual physical lines of this segment.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A single display-ready line of the diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    /// Line type.
    pub kind: SegmentKind,
    /// Line number in the old value (for Kept and Removed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_line: Option<u32>,
    /// Line number in the new value (for Kept and Added).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_line: Option<u32>,
    /// Line content with `&`, `<` and `>` replaced by their HTML entities.
    pub escaped_text: String,
}

impl RenderedLine {
    /// Create a new kept (unchanged) line.
    pub fn kept(escaped_text: impl Into<String>, old_line: u32, new_line: u32) -> Self {
        Self {
            kind: SegmentKind::Kept,
            old_line: Some(old_line),
            new_line: Some(new_line),
            escaped_text: escaped_text.into(),
        }
    }

    /// Create a new removed line.
    pub fn removed(escaped_text: impl Into<String>, old_line: u32) -> Self {
        Self {
            kind: SegmentKind::Removed,
            old_line: Some(old_line),
            new_line: None,
            escaped_text: escaped_text.into(),
        }
    }

    /// Create a new added line.
    pub fn added(escaped_text: impl Into<String>, new_line: u32) -> Self {
        Self {
            kind: SegmentKind::Added,
            old_line: None,
            new_line: Some(new_line),
            escaped_text: escaped_text.into(),
        }
    }

    /// Old-side column content: the line number, or `+` for added rows.
    pub fn old_column(&self) -> String {
        match self.old_line {
            Some(n) => n.to_string(),
            None => "+".to_string(),
        }
    }

    /// New-side column content: the line number, or `-` for removed rows.
    pub fn new_column(&self) -> String {
        match self.new_line {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        }
    }
}
