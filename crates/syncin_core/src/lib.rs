//! Core domain logic for the SyncIN workspace.
//! This crate is the single source of truth for workspace invariants.

pub mod clock;
pub mod editor;
pub mod ident;
pub mod logging;
pub mod model;
pub mod service;

pub use clock::TimeSnapshot;
pub use editor::engine::{
    FocusTarget, FormatEngine, FormatToggles, ToolbarPopup, DEFAULT_FONT_COLOR,
    DEFAULT_FONT_SIZE_PX, DEFAULT_HIGHLIGHT_COLOR,
};
pub use editor::selection::Selection;
pub use editor::toolbar::{
    ToolbarCommand, ToolbarIndicator, ToolbarItem, COLOR_PALETTE, FONT_SIZES, TOOLBAR_ITEMS,
};
pub use ident::{IdAllocator, IdKind, UniqueId};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    Alignment, Block, BlockKind, DocumentError, EditorDocument, InlineStyle, TextRun,
};
pub use model::notebook::{Notebook, NotebookColor, NotebookId, Section, SectionId};
pub use model::page::{Page, PageId};
pub use service::page_service::{ActiveDocument, PageService, DEFAULT_PAGE_NAME};
pub use service::workspace_service::{EditTarget, WorkspaceService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
