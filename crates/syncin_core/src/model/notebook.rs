//! Notebook and section domain model.
//!
//! # Responsibility
//! - Define the sidebar hierarchy records: notebooks owning ordered sections.
//! - Provide the fixed marker palette and the uniform random pick for it.
//!
//! # Invariants
//! - A section belongs to exactly one notebook for its whole lifetime.
//! - `sections` preserves insertion order; nothing reorders siblings.

use crate::ident::UniqueId;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Stable notebook identifier.
pub type NotebookId = UniqueId;

/// Stable section identifier.
pub type SectionId = UniqueId;

/// Fixed sidebar palette for notebook markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotebookColor {
    Purple,
    Yellow,
    Orange,
    Blue,
    Green,
    Red,
    Pink,
}

impl NotebookColor {
    /// All palette entries, in picker display order.
    pub const ALL: [NotebookColor; 7] = [
        NotebookColor::Purple,
        NotebookColor::Yellow,
        NotebookColor::Orange,
        NotebookColor::Blue,
        NotebookColor::Green,
        NotebookColor::Red,
        NotebookColor::Pink,
    ];

    /// Draws one palette entry uniformly at random.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::ALL.choose(&mut rng).copied().unwrap_or(Self::Purple)
    }
}

/// Mid-level grouping record owned by one notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable section id.
    pub id: SectionId,
    /// User-facing label. May be empty; renames are stored verbatim.
    pub name: String,
}

impl Section {
    /// Creates a section with the default `Section {id}` name.
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            name: format!("Section {id}"),
        }
    }
}

/// Top-level grouping record in the sidebar hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notebook {
    /// Stable notebook id.
    pub id: NotebookId,
    /// User-facing label. May be empty; renames are stored verbatim.
    pub name: String,
    /// Sidebar marker color.
    pub color: NotebookColor,
    /// Owned sections in insertion order.
    pub sections: Vec<Section>,
}

impl Notebook {
    /// Creates a notebook with the default `Notebook {id}` name and a random
    /// palette color.
    pub fn new(id: NotebookId) -> Self {
        Self::with_color(id, NotebookColor::random())
    }

    /// Creates a notebook with a caller-provided color.
    ///
    /// Used by tests and import paths where the color already exists.
    pub fn with_color(id: NotebookId, color: NotebookColor) -> Self {
        Self {
            id,
            name: format!("Notebook {id}"),
            color,
            sections: Vec::new(),
        }
    }

    /// Looks up one owned section by id.
    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }
}
