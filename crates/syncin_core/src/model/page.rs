//! Page domain model.
//!
//! # Responsibility
//! - Define the flat page list record with its frozen creation snapshot.
//!
//! # Invariants
//! - `created_date`/`created_time` are captured once and never rewritten;
//!   they record creation, not last modification.
//! - Pages are independent of the notebook/section hierarchy.

use crate::clock::TimeSnapshot;
use crate::ident::UniqueId;
use serde::{Deserialize, Serialize};

/// Stable page identifier.
pub type PageId = UniqueId;

/// Page list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Stable page id.
    pub id: PageId,
    /// User-facing label.
    pub name: String,
    /// Frozen creation date, e.g. `Monday, January 1, 2024`.
    pub created_date: String,
    /// Frozen creation time, e.g. `3:00 PM`.
    pub created_time: String,
}

impl Page {
    /// Creates a page with the default `Page {id}` name and the given
    /// creation snapshot.
    pub fn new(id: PageId, created: TimeSnapshot) -> Self {
        Self {
            id,
            name: format!("Page {id}"),
            created_date: created.date,
            created_time: created.time,
        }
    }
}
