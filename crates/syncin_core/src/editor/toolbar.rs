//! Toolbar command descriptors for the floating dock.
//!
//! # Responsibility
//! - Fix the command order and titles the shell renders.
//! - Project per-command visual indicators from the toggle mirror.
//!
//! # Invariants
//! - `TOOLBAR_ITEMS` order matches the rendered dock left to right.
//! - Indicators are derived; they hold no state of their own.

use super::engine::FormatToggles;
use crate::model::document::Alignment;

/// Toolbar commands in dock order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    FontSize,
    FontColor,
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Highlight,
    Bullets,
    AlignLeft,
    AlignCenter,
    AlignRight,
}

/// Visual state a dock button renders for its command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarIndicator {
    /// On/off button highlight.
    Active(bool),
    /// Current size label, e.g. `16px`.
    SizeLabel(String),
    /// Current color swatch.
    Swatch(String),
    /// Plain icon without state.
    Plain,
}

/// One dock entry: stable title plus the command it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarItem {
    pub title: &'static str,
    pub command: ToolbarCommand,
}

/// Dock entries in display order.
pub const TOOLBAR_ITEMS: [ToolbarItem; 11] = [
    ToolbarItem {
        title: "Font Size",
        command: ToolbarCommand::FontSize,
    },
    ToolbarItem {
        title: "Font Color",
        command: ToolbarCommand::FontColor,
    },
    ToolbarItem {
        title: "Bold",
        command: ToolbarCommand::Bold,
    },
    ToolbarItem {
        title: "Italic",
        command: ToolbarCommand::Italic,
    },
    ToolbarItem {
        title: "Underline",
        command: ToolbarCommand::Underline,
    },
    ToolbarItem {
        title: "Strikethrough",
        command: ToolbarCommand::Strikethrough,
    },
    ToolbarItem {
        title: "Highlight",
        command: ToolbarCommand::Highlight,
    },
    ToolbarItem {
        title: "Bullets",
        command: ToolbarCommand::Bullets,
    },
    ToolbarItem {
        title: "Align Left",
        command: ToolbarCommand::AlignLeft,
    },
    ToolbarItem {
        title: "Align Center",
        command: ToolbarCommand::AlignCenter,
    },
    ToolbarItem {
        title: "Align Right",
        command: ToolbarCommand::AlignRight,
    },
];

/// Pixel sizes offered by the font size picker.
pub const FONT_SIZES: [u32; 13] = [8, 10, 12, 14, 16, 18, 20, 24, 28, 32, 36, 48, 72];

/// Swatch palette shared by the font color and highlight pickers.
pub const COLOR_PALETTE: [&str; 15] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#FFA500", "#800080", "#008000", "#FFC0CB", "#A52A2A", "#808080", "#C0C0C0",
];

impl ToolbarCommand {
    /// Indicator this command renders for the given toggle mirror.
    pub fn indicator(self, toggles: &FormatToggles) -> ToolbarIndicator {
        match self {
            Self::FontSize => ToolbarIndicator::SizeLabel(format!("{}px", toggles.font_size_px)),
            Self::FontColor => ToolbarIndicator::Swatch(toggles.font_color.clone()),
            Self::Bold => ToolbarIndicator::Active(toggles.bold),
            Self::Italic => ToolbarIndicator::Active(toggles.italic),
            Self::Underline => ToolbarIndicator::Active(toggles.underline),
            Self::Strikethrough => ToolbarIndicator::Active(toggles.strikethrough),
            Self::Highlight => ToolbarIndicator::Swatch(toggles.highlight_color.clone()),
            Self::Bullets => ToolbarIndicator::Plain,
            Self::AlignLeft => ToolbarIndicator::Active(toggles.alignment == Alignment::Left),
            Self::AlignCenter => ToolbarIndicator::Active(toggles.alignment == Alignment::Center),
            Self::AlignRight => ToolbarIndicator::Active(toggles.alignment == Alignment::Right),
        }
    }
}
