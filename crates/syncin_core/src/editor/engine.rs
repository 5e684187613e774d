//! Selection-scoped formatting engine.
//!
//! # Responsibility
//! - Apply toolbar commands to the attached document's current selection.
//! - Track the last-command toggle mirror used for button highlighting.
//! - Enforce the single-open-popup discipline for the three pickers.
//!
//! # Invariants
//! - Commands refocus the editable surface before mutating it.
//! - With no document attached, every command is a silent no-op and the
//!   toggle mirror stays untouched.
//! - The toggle mirror follows issued commands, not the caret; it is not
//!   resynchronized when the caret moves.

use crate::editor::selection::Selection;
use crate::editor::toolbar::ToolbarCommand;
use crate::model::document::{Alignment, EditorDocument, InlineStyle};
use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("valid hex color regex"));

/// Default pixel size mirrored by a fresh toolbar.
pub const DEFAULT_FONT_SIZE_PX: u32 = 16;
/// Default font color mirrored by a fresh toolbar.
pub const DEFAULT_FONT_COLOR: &str = "#000000";
/// Default highlight color mirrored by a fresh toolbar.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#FFFF00";

/// Popup owned by the formatting toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarPopup {
    FontSize,
    FontColor,
    Highlight,
}

/// Where input focus currently sits, as reported by the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    /// The editable surface.
    Editor,
    /// A toolbar popup or dock button.
    Popup,
    /// Anything else in the shell.
    #[default]
    Elsewhere,
}

/// Last-issued-command mirror used for toolbar button highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatToggles {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub font_size_px: u32,
    pub font_color: String,
    pub highlight_color: String,
    pub alignment: Alignment,
}

impl Default for FormatToggles {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            font_size_px: DEFAULT_FONT_SIZE_PX,
            font_color: DEFAULT_FONT_COLOR.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            alignment: Alignment::Left,
        }
    }
}

/// Formatting command state machine bound to one editable document.
///
/// The engine owns its target explicitly: the shell attaches the document on
/// mount and detaches it on unmount. There is no global lookup.
#[derive(Debug, Default)]
pub struct FormatEngine {
    document: Option<EditorDocument>,
    selection: Selection,
    focus: FocusTarget,
    toggles: FormatToggles,
    open_popup: Option<ToolbarPopup>,
}

impl FormatEngine {
    /// Creates a detached engine with default toggles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the editable document. Resets the caret to the document start.
    pub fn attach(&mut self, document: EditorDocument) {
        self.document = Some(document);
        self.selection = Selection::caret(0);
    }

    /// Releases the document on unmount and returns it to the shell.
    pub fn detach(&mut self) -> Option<EditorDocument> {
        self.focus = FocusTarget::Elsewhere;
        self.document.take()
    }

    pub fn document(&self) -> Option<&EditorDocument> {
        self.document.as_ref()
    }

    pub fn toggles(&self) -> &FormatToggles {
        &self.toggles
    }

    pub fn open_popup(&self) -> Option<ToolbarPopup> {
        self.open_popup
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Records the shell-reported selection.
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    /// Records the shell-reported focus target.
    pub fn set_focus(&mut self, target: FocusTarget) {
        self.focus = target;
    }

    /// Dispatches one dock button press.
    pub fn press(&mut self, command: ToolbarCommand) {
        match command {
            ToolbarCommand::FontSize => self.toggle_popup(ToolbarPopup::FontSize),
            ToolbarCommand::FontColor => self.toggle_popup(ToolbarPopup::FontColor),
            ToolbarCommand::Bold => self.toggle_bold(),
            ToolbarCommand::Italic => self.toggle_italic(),
            ToolbarCommand::Underline => self.toggle_underline(),
            ToolbarCommand::Strikethrough => self.toggle_strikethrough(),
            ToolbarCommand::Highlight => self.toggle_popup(ToolbarPopup::Highlight),
            ToolbarCommand::Bullets => self.toggle_list(),
            ToolbarCommand::AlignLeft => self.set_alignment(Alignment::Left),
            ToolbarCommand::AlignCenter => self.set_alignment(Alignment::Center),
            ToolbarCommand::AlignRight => self.set_alignment(Alignment::Right),
        }
    }

    pub fn toggle_bold(&mut self) {
        self.toggle_mark(
            |toggles| toggles.bold,
            |toggles, flag| toggles.bold = flag,
            |style, flag| style.bold = flag,
        );
    }

    pub fn toggle_italic(&mut self) {
        self.toggle_mark(
            |toggles| toggles.italic,
            |toggles, flag| toggles.italic = flag,
            |style, flag| style.italic = flag,
        );
    }

    pub fn toggle_underline(&mut self) {
        self.toggle_mark(
            |toggles| toggles.underline,
            |toggles, flag| toggles.underline = flag,
            |style, flag| style.underline = flag,
        );
    }

    pub fn toggle_strikethrough(&mut self) {
        self.toggle_mark(
            |toggles| toggles.strikethrough,
            |toggles, flag| toggles.strikethrough = flag,
            |style, flag| style.strikethrough = flag,
        );
    }

    /// Aligns the blocks under the selection. A caret aligns its own block.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let selection = self.resolved_selection();
        if let Some(document) = self.document.as_mut() {
            document.set_alignment(selection.start, selection.end, alignment);
        }
        self.toggles.alignment = alignment;
    }

    /// Opens the popup, closing any other; pressing the open popup's button
    /// closes it again.
    pub fn toggle_popup(&mut self, popup: ToolbarPopup) {
        if self.open_popup == Some(popup) {
            self.open_popup = None;
        } else {
            self.open_popup = Some(popup);
            self.focus = FocusTarget::Popup;
        }
    }

    /// Outside pointer press: closes any open popup.
    pub fn pointer_pressed_outside(&mut self) {
        self.open_popup = None;
    }

    /// Applies a picked pixel size to the selection and closes the picker.
    pub fn pick_font_size(&mut self, size_px: u32) {
        self.open_popup = None;
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let selection = self.resolved_selection();
        if let Some(document) = self.document.as_mut() {
            if !selection.is_caret() {
                document.apply_inline(selection.start, selection.end, |style| {
                    style.font_size_px = Some(size_px);
                });
            }
        }
        self.toggles.font_size_px = size_px;
    }

    /// Applies a picked font color to the selection and closes the picker.
    ///
    /// Values outside `#rrggbb` are ignored; the color input cannot produce
    /// them.
    pub fn pick_font_color(&mut self, color: &str) {
        let Some(color) = normalize_hex(color) else {
            return;
        };
        self.open_popup = None;
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let selection = self.resolved_selection();
        if let Some(document) = self.document.as_mut() {
            if !selection.is_caret() {
                let value = color.clone();
                document.apply_inline(selection.start, selection.end, move |style| {
                    style.font_color = Some(value.clone());
                });
            }
        }
        self.toggles.font_color = color;
    }

    /// Applies a picked highlight color to the selection and closes the
    /// picker.
    pub fn pick_highlight(&mut self, color: &str) {
        let Some(color) = normalize_hex(color) else {
            return;
        };
        self.open_popup = None;
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let selection = self.resolved_selection();
        if let Some(document) = self.document.as_mut() {
            if !selection.is_caret() {
                let value = color.clone();
                document.apply_inline(selection.start, selection.end, move |style| {
                    style.highlight = Some(value.clone());
                });
            }
        }
        self.toggles.highlight_color = color;
    }

    /// Bullet command: a caret gets a fresh empty list item at its position;
    /// a range delegates to block-level list toggling. A toggle failure is
    /// reported to the diagnostic log, never to the caller.
    pub fn toggle_list(&mut self) {
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let selection = self.resolved_selection();
        let Some(document) = self.document.as_mut() else {
            return;
        };
        if selection.is_caret() {
            let caret = document.insert_list_item(selection.start);
            self.selection = Selection::caret(caret);
        } else if let Err(err) = document.toggle_list_items(selection.start, selection.end) {
            error!("event=list_toggle_failed module=editor status=error reason={err}");
        }
    }

    /// Replaces the selection with typed text and collapses the caret after
    /// it.
    pub fn replace_selection(&mut self, text: &str) {
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let selection = self.resolved_selection();
        if let Some(document) = self.document.as_mut() {
            let caret = document.replace_range(selection.start, selection.end, text);
            self.selection = Selection::caret(caret);
        }
    }

    fn toggle_mark(
        &mut self,
        current: fn(&FormatToggles) -> bool,
        record: fn(&mut FormatToggles, bool),
        restyle: fn(&mut InlineStyle, bool),
    ) {
        if self.document.is_none() {
            return;
        }
        self.ensure_focus();
        let flag = !current(&self.toggles);
        let selection = self.resolved_selection();
        if let Some(document) = self.document.as_mut() {
            if !selection.is_caret() {
                document.apply_inline(selection.start, selection.end, move |style| {
                    restyle(style, flag)
                });
            }
        }
        record(&mut self.toggles, flag);
    }

    /// Popups and dock buttons steal focus; mutation requires it back on the
    /// editable surface.
    fn ensure_focus(&mut self) {
        if self.focus != FocusTarget::Editor {
            self.focus = FocusTarget::Editor;
        }
    }

    fn resolved_selection(&self) -> Selection {
        match &self.document {
            Some(document) => self.selection.clamp(document.char_len()),
            None => self.selection,
        }
    }
}

fn normalize_hex(color: &str) -> Option<String> {
    if HEX_COLOR_RE.is_match(color) {
        Some(color.to_string())
    } else {
        debug!("event=color_rejected module=editor status=ignored value_len={}", color.len());
        None
    }
}
