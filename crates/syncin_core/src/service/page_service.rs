//! Page registry and active document use-case service.
//!
//! # Responsibility
//! - Own the flat, append-only page list and the id-keyed selection marker.
//! - Own the active document projection shared by the title header and the
//!   content surface.
//!
//! # Invariants
//! - Page creation snapshots are frozen at creation and never rewritten.
//! - `select_page` is the only operation that overwrites the projection as a
//!   whole; `set_page_name` touches only the name.
//! - Reselecting the selected page is a silent no-op.

use crate::clock::TimeSnapshot;
use crate::ident::{IdAllocator, IdKind};
use crate::model::page::{Page, PageId};
use log::debug;

/// Name a fresh projection carries before any page is selected.
pub const DEFAULT_PAGE_NAME: &str = "Untitled";

/// Shared projection of the currently displayed page.
///
/// Owned by [`PageService`] and handed out by reference, so reading it
/// outside the providing scope is a compile error rather than a runtime
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    page_name: String,
    date: String,
    time: String,
}

impl ActiveDocument {
    fn mounted_at(snapshot: TimeSnapshot) -> Self {
        Self {
            page_name: DEFAULT_PAGE_NAME.to_string(),
            date: snapshot.date,
            time: snapshot.time,
        }
    }

    /// Title shown by the header input.
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// Date line under the title.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Time shown next to the date line.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// True when the header should render the dimmed placeholder: the name
    /// is the literal default or trims to nothing.
    pub fn is_untitled(&self) -> bool {
        self.page_name == DEFAULT_PAGE_NAME || self.page_name.trim().is_empty()
    }
}

/// Page list state machine plus the active document projection.
#[derive(Debug)]
pub struct PageService {
    pages: Vec<Page>,
    selected: Option<PageId>,
    active: ActiveDocument,
}

impl PageService {
    /// Creates the registry at surface mount time: empty list, nothing
    /// selected, projection defaulting to `Untitled` and the mount instant.
    pub fn new() -> Self {
        Self::mounted_at(TimeSnapshot::now())
    }

    /// Creates the registry with a caller-provided mount snapshot.
    ///
    /// Used by tests and shells that already captured the instant.
    pub fn mounted_at(snapshot: TimeSnapshot) -> Self {
        Self {
            pages: Vec::new(),
            selected: None,
            active: ActiveDocument::mounted_at(snapshot),
        }
    }

    /// Pages in creation order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Looks up one page by id.
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Currently selected page id, if any.
    pub fn selected(&self) -> Option<PageId> {
        self.selected
    }

    /// The shared active document projection.
    pub fn active(&self) -> &ActiveDocument {
        &self.active
    }

    /// Appends a page stamped with the current instant. Does not select it.
    pub fn add_page(&mut self, ids: &mut IdAllocator) -> PageId {
        self.add_page_at(ids, TimeSnapshot::now())
    }

    /// Appends a page with a caller-provided creation snapshot.
    pub fn add_page_at(&mut self, ids: &mut IdAllocator, created: TimeSnapshot) -> PageId {
        let id = ids.next(IdKind::Page);
        self.pages.push(Page::new(id, created));
        debug!("event=page_added module=pages status=ok page_id={id}");
        id
    }

    /// Marks the page selected and republishes its stored name and snapshot
    /// into the projection. Unknown ids and reselects are silent no-ops.
    pub fn select_page(&mut self, id: PageId) {
        if self.selected == Some(id) {
            return;
        }
        let Some(page) = self.pages.iter().find(|page| page.id == id) else {
            debug!("event=page_selected module=pages status=miss page_id={id}");
            return;
        };
        let projection = ActiveDocument {
            page_name: page.name.clone(),
            date: page.created_date.clone(),
            time: page.created_time.clone(),
        };
        self.active = projection;
        self.selected = Some(id);
        debug!("event=page_selected module=pages status=ok page_id={id}");
    }

    /// Overwrites the projected title verbatim, no normalization. The stored
    /// page entry keeps its own name.
    pub fn set_page_name(&mut self, name: impl Into<String>) {
        self.active.page_name = name.into();
    }
}

impl Default for PageService {
    fn default() -> Self {
        Self::new()
    }
}
