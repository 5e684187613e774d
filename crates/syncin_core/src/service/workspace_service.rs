//! Workspace sidebar use-case service.
//!
//! # Responsibility
//! - Own the notebook/section hierarchy and its sidebar view state.
//! - Provide notebook/section create, rename, recolor, and expand operations.
//!
//! # Invariants
//! - Ids are drawn from the shared allocator at every creation site; the
//!   section counter advances even when the target notebook is missing.
//! - At most one inline editor and one color picker are open at a time.
//! - No operation reorders existing siblings.
//! - Lookup misses are silent no-ops; the collection stays untouched.

use crate::ident::{IdAllocator, IdKind};
use crate::model::notebook::{Notebook, NotebookColor, NotebookId, Section, SectionId};
use log::debug;
use std::collections::HashSet;

/// Inline rename target in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// A notebook title.
    Notebook(NotebookId),
    /// A section title inside one notebook.
    Section {
        notebook_id: NotebookId,
        section_id: SectionId,
    },
}

/// Sidebar workspace state machine.
#[derive(Debug, Default)]
pub struct WorkspaceService {
    notebooks: Vec<Notebook>,
    expanded: HashSet<NotebookId>,
    editing: Option<EditTarget>,
    color_picker: Option<NotebookId>,
}

impl WorkspaceService {
    /// Creates an empty workspace with nothing expanded or editing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notebooks in creation order.
    pub fn notebooks(&self) -> &[Notebook] {
        &self.notebooks
    }

    /// Looks up one notebook by id.
    pub fn notebook(&self, id: NotebookId) -> Option<&Notebook> {
        self.notebooks.iter().find(|notebook| notebook.id == id)
    }

    /// True when the notebook's section list is unfolded in the tree view.
    pub fn is_expanded(&self, id: NotebookId) -> bool {
        self.expanded.contains(&id)
    }

    /// The single open inline editor, if any.
    pub fn editing(&self) -> Option<EditTarget> {
        self.editing
    }

    /// The notebook whose color picker is open, if any.
    pub fn color_picker(&self) -> Option<NotebookId> {
        self.color_picker
    }

    /// Appends a notebook with a random palette color and the default name.
    /// The new notebook is not auto-expanded.
    pub fn add_notebook(&mut self, ids: &mut IdAllocator) -> NotebookId {
        let id = ids.next(IdKind::Notebook);
        self.notebooks.push(Notebook::new(id));
        debug!("event=notebook_added module=workspace status=ok notebook_id={id}");
        id
    }

    /// Appends a section to the named notebook. On a lookup miss the
    /// collection stays unchanged, but the drawn section id stays spent.
    pub fn add_section(&mut self, ids: &mut IdAllocator, notebook_id: NotebookId) -> Option<SectionId> {
        let id = ids.next(IdKind::Section);
        match self.notebook_mut(notebook_id) {
            Some(notebook) => {
                notebook.sections.push(Section::new(id));
                debug!(
                    "event=section_added module=workspace status=ok notebook_id={notebook_id} section_id={id}"
                );
                Some(id)
            }
            None => {
                debug!(
                    "event=section_added module=workspace status=miss notebook_id={notebook_id}"
                );
                None
            }
        }
    }

    /// Replaces the notebook name verbatim, empty string included, and
    /// closes the inline editor.
    pub fn rename_notebook(&mut self, id: NotebookId, new_name: impl Into<String>) {
        let new_name = new_name.into();
        if let Some(notebook) = self.notebook_mut(id) {
            notebook.name = new_name;
        }
        self.editing = None;
    }

    /// Replaces the section name verbatim and closes the inline editor.
    pub fn rename_section(
        &mut self,
        notebook_id: NotebookId,
        section_id: SectionId,
        new_name: impl Into<String>,
    ) {
        let new_name = new_name.into();
        if let Some(notebook) = self.notebook_mut(notebook_id) {
            if let Some(section) = notebook
                .sections
                .iter_mut()
                .find(|section| section.id == section_id)
            {
                section.name = new_name;
            }
        }
        self.editing = None;
    }

    /// Replaces the notebook marker color and closes the picker.
    pub fn change_notebook_color(&mut self, id: NotebookId, color: NotebookColor) {
        if let Some(notebook) = self.notebook_mut(id) {
            notebook.color = color;
        }
        self.color_picker = None;
    }

    /// Flips the notebook's membership in the expansion set. Self-inverse.
    pub fn toggle_expanded(&mut self, id: NotebookId) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Opens the color picker for the notebook, or closes it when it is
    /// already the open one. Opening for another notebook switches.
    pub fn toggle_color_picker(&mut self, id: NotebookId) {
        self.color_picker = if self.color_picker == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Opens the inline editor for one target, implicitly closing any other.
    pub fn begin_edit(&mut self, target: EditTarget) {
        self.editing = Some(target);
    }

    /// Closes the inline editor without applying a rename.
    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    fn notebook_mut(&mut self, id: NotebookId) -> Option<&mut Notebook> {
        self.notebooks.iter_mut().find(|notebook| notebook.id == id)
    }
}
