//! Session-local identity allocation.
//!
//! # Responsibility
//! - Issue unique integer identifiers for notebooks, sections, and pages.
//! - Keep the three id spaces independent of each other.
//!
//! # Invariants
//! - Every id space is strictly increasing and starts at 1.
//! - Ids are never reused within a session, even when the record that drew
//!   one is discarded by the caller.

/// Unique integer identifier issued by [`IdAllocator`].
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UniqueId = u64;

/// Id space selector for [`IdAllocator::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    /// Top-level notebook containers.
    Notebook,
    /// Sections owned by a notebook.
    Section,
    /// Flat page list entries.
    Page,
}

/// Monotonic counter bundle for the three workspace id spaces.
///
/// Counters are process-local and reset with the session. There is no
/// reclamation path: a drawn id stays spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next_notebook: UniqueId,
    next_section: UniqueId,
    next_page: UniqueId,
}

impl IdAllocator {
    /// Creates an allocator with all three counters at 1.
    pub fn new() -> Self {
        Self {
            next_notebook: 1,
            next_section: 1,
            next_page: 1,
        }
    }

    /// Returns the current value for `kind` and advances that counter.
    pub fn next(&mut self, kind: IdKind) -> UniqueId {
        let slot = match kind {
            IdKind::Notebook => &mut self.next_notebook,
            IdKind::Section => &mut self.next_section,
            IdKind::Page => &mut self.next_page,
        };
        let id = *slot;
        *slot += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
