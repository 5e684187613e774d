//! Caret and range selection over the editable document.

use serde::{Deserialize, Serialize};

/// Selected character range, caret when collapsed.
///
/// Offsets are shell-reported and may be stale relative to the live
/// document; commands resolve them against the current content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Collapsed selection at one offset.
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Range selection; endpoints are stored in ascending order.
    pub fn range(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// True when nothing is highlighted.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Clamps both endpoints to a document of `len` characters.
    pub fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}
