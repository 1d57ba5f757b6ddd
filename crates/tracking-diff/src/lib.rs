//! Tracking Value Diff
//!
//! A library for turning a tracked field change (old value vs. new value)
//! into a displayable, numbered, HTML-safe line diff. Built for change-log
//! views where an audited field records before/after text blobs.
//!
//! The diff operates at line granularity: each full line is the atomic unit
//! of comparison. Output lines carry old/new line numbers and pre-escaped
//! content, ready for a two-column diff view.
//!
//! # Example
//!
//! ```
//! use tracking_diff::{compute_line_diff, render_lines};
//!
//! let segments = compute_line_diff("a\nb\nc", "a\nx\nc");
//! for line in render_lines(&segments) {
//!     println!("{:>4} {:>4} {}", line.old_column(), line.new_column(), line.escaped_text);
//! }
//! ```
//!
//! Changes where one side is missing or single-line fall back to a plain
//! before/after display; [`TrackingChange::display`] applies that policy.

mod change;
mod diff;
mod model;
mod render;

pub use change::{TrackingChange, TrackingDisplay};
pub use diff::{compute_line_diff, is_eligible_for_line_diff};
pub use model::{DiffSegment, RenderedLine, SegmentKind};
pub use render::{escape_html, render_lines, render_lines_from};
