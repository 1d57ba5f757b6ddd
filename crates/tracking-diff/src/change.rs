//! A tracked field change: line diff when eligible, plain fallback otherwise.

use serde::{Deserialize, Serialize};

use crate::diff::{compute_line_diff, is_eligible_for_line_diff};
use crate::model::RenderedLine;
use crate::render::render_lines;

/// A recorded before/after pair of values for an audited field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingChange {
    old_value: Option<String>,
    new_value: Option<String>,
}

/// How a tracking change should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingDisplay {
    /// Both values are multi-line: a numbered line diff.
    LineDiff(Vec<RenderedLine>),
    /// The raw before/after values, shown side by side.
    Plain {
        old: Option<String>,
        new: Option<String>,
    },
}

impl TrackingChange {
    /// Create a change from the recorded old and new values.
    pub fn new(old_value: Option<String>, new_value: Option<String>) -> Self {
        Self {
            old_value,
            new_value,
        }
    }

    /// The original old value, unescaped and un-diffed.
    ///
    /// This is the string a copy-to-clipboard action should use.
    pub fn old_value(&self) -> Option<&str> {
        self.old_value.as_deref()
    }

    /// The original new value, unescaped and un-diffed.
    pub fn new_value(&self) -> Option<&str> {
        self.new_value.as_deref()
    }

    /// Whether this change qualifies for the line diff display.
    pub fn is_multiline(&self) -> bool {
        is_eligible_for_line_diff(self.old_value.as_deref(), self.new_value.as_deref())
    }

    /// Compute the display form of this change.
    pub fn display(&self) -> TrackingDisplay {
        match (self.old_value.as_deref(), self.new_value.as_deref()) {
            (Some(old), Some(new)) if is_eligible_for_line_diff(Some(old), Some(new)) => {
                TrackingDisplay::LineDiff(render_lines(&compute_line_diff(old, new)))
            }
            _ => TrackingDisplay::Plain {
                old: self.old_value.clone(),
                new: self.new_value.clone(),
            },
        }
    }
}
