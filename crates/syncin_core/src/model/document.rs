//! Attributed-range model for the editable surface.
//!
//! # Responsibility
//! - Represent freeform rich text as blocks of styled runs.
//! - Provide range-scoped mutations: restyle, align, list toggle, text replace.
//!
//! # Invariants
//! - Offsets are in characters; each block boundary counts as one character.
//! - Adjacent runs with equal style are merged after every mutation.
//! - Blocks never reorder; mutations only split, merge, or retag them.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from editable-document mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The requested range does not touch any block.
    NoBlockInRange { start: usize, end: usize },
}

impl Display for DocumentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoBlockInRange { start, end } => {
                write!(f, "no block covers range {start}..{end}")
            }
        }
    }
}

impl Error for DocumentError {}

/// Paragraph-level alignment. Three-valued: the alignments are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Block container kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Plain paragraph.
    Paragraph,
    /// Unordered-list item.
    ListItem,
}

/// Inline style attributes carried by one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    /// Explicit pixel size; `None` inherits the surface default.
    pub font_size_px: Option<u32>,
    /// Text color as `#rrggbb`; `None` inherits.
    pub font_color: Option<String>,
    /// Background highlight as `#rrggbb`; `None` means no highlight.
    pub highlight: Option<String>,
}

/// Span of text carrying one consistent style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub style: InlineStyle,
}

impl TextRun {
    /// Creates an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: InlineStyle::default(),
        }
    }

    /// Creates a run with the given style.
    pub fn styled(text: impl Into<String>, style: InlineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// One block of the editable surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub alignment: Alignment,
    runs: Vec<TextRun>,
}

impl Block {
    /// Creates an empty paragraph.
    pub fn paragraph() -> Self {
        Self {
            kind: BlockKind::Paragraph,
            alignment: Alignment::Left,
            runs: Vec::new(),
        }
    }

    /// Creates an empty unordered-list item.
    pub fn list_item() -> Self {
        Self {
            kind: BlockKind::ListItem,
            alignment: Alignment::Left,
            runs: Vec::new(),
        }
    }

    fn with_runs(kind: BlockKind, alignment: Alignment, runs: Vec<TextRun>) -> Self {
        let mut block = Self {
            kind,
            alignment,
            runs,
        };
        block.normalize();
        block
    }

    /// Styled runs in reading order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Character count of the block text.
    pub fn char_len(&self) -> usize {
        self.runs.iter().map(TextRun::char_len).sum()
    }

    /// Plain text of the block.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Merges adjacent runs with equal style and drops empty runs.
    fn normalize(&mut self) {
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            if run.text.is_empty() {
                continue;
            }
            match self.runs.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => self.runs.push(run),
            }
        }
    }

    fn restyle<F: Fn(&mut InlineStyle)>(&mut self, start: usize, end: usize, f: &F) {
        let runs = std::mem::take(&mut self.runs);
        let mut out = Vec::new();
        let mut cursor = 0;
        for run in runs {
            let len = run.char_len();
            let (run_start, run_end) = (cursor, cursor + len);
            cursor = run_end;
            if run_end <= start || run_start >= end {
                out.push(run);
                continue;
            }
            let lo = start.saturating_sub(run_start);
            let hi = (end - run_start).min(len);
            let (head, rest) = char_split(&run.text, lo);
            let (mid, tail) = char_split(&rest, hi - lo);
            if !head.is_empty() {
                out.push(TextRun::styled(head, run.style.clone()));
            }
            if !mid.is_empty() {
                let mut style = run.style.clone();
                f(&mut style);
                out.push(TextRun::styled(mid, style));
            }
            if !tail.is_empty() {
                out.push(TextRun::styled(tail, run.style));
            }
        }
        self.runs = out;
        self.normalize();
    }

    fn delete_local(&mut self, start: usize, end: usize) {
        let runs = std::mem::take(&mut self.runs);
        let (head, rest) = split_runs(runs, start);
        let (_, tail) = split_runs(rest, end.saturating_sub(start));
        self.runs = head;
        self.runs.extend(tail);
        self.normalize();
    }

    fn insert_local(&mut self, at: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let style = self.style_for_insert(at);
        let runs = std::mem::take(&mut self.runs);
        let (mut head, tail) = split_runs(runs, at);
        head.push(TextRun::styled(text, style));
        head.extend(tail);
        self.runs = head;
        self.normalize();
    }

    /// Inserted text inherits the style left of the caret, falling back to
    /// the style right of it.
    fn style_for_insert(&self, at: usize) -> InlineStyle {
        let before = at.checked_sub(1).and_then(|idx| self.style_at(idx));
        before
            .or_else(|| self.style_at(at))
            .unwrap_or_default()
    }

    fn style_at(&self, char_idx: usize) -> Option<InlineStyle> {
        let mut cursor = 0;
        for run in &self.runs {
            let len = run.char_len();
            if char_idx < cursor + len {
                return Some(run.style.clone());
            }
            cursor += len;
        }
        None
    }

    fn split_off(&mut self, at: usize) -> Vec<TextRun> {
        let runs = std::mem::take(&mut self.runs);
        let (head, tail) = split_runs(runs, at);
        self.runs = head;
        tail
    }

    fn extend_runs(&mut self, runs: Vec<TextRun>) {
        self.runs.extend(runs);
        self.normalize();
    }
}

/// The editable surface content.
///
/// A fresh document has no blocks at all, matching an untouched editable
/// region; typing or list insertion creates the first block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorDocument {
    blocks: Vec<Block>,
}

impl EditorDocument {
    /// Creates an empty document with no blocks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document of left-aligned paragraphs, one per input line.
    pub fn from_plain_text(text: &str) -> Self {
        let blocks = text
            .split('\n')
            .map(|line| {
                let runs = if line.is_empty() {
                    Vec::new()
                } else {
                    vec![TextRun::plain(line)]
                };
                Block::with_runs(BlockKind::Paragraph, Alignment::Left, runs)
            })
            .collect();
        Self { blocks }
    }

    /// Blocks in reading order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// True when the document has no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Character count including one character per block boundary.
    pub fn char_len(&self) -> usize {
        let text: usize = self.blocks.iter().map(Block::char_len).sum();
        text + self.blocks.len().saturating_sub(1)
    }

    /// Plain text with block boundaries rendered as newlines.
    pub fn text(&self) -> String {
        let lines: Vec<String> = self.blocks.iter().map(Block::text).collect();
        lines.join("\n")
    }

    /// Applies a style mutation to every run fragment inside the range.
    pub fn apply_inline<F: Fn(&mut InlineStyle)>(&mut self, start: usize, end: usize, f: F) {
        let (start, end) = self.clamp(start, end);
        if start >= end {
            return;
        }
        let mut offset = 0;
        for block in &mut self.blocks {
            let len = block.char_len();
            if offset >= end {
                break;
            }
            if start <= offset + len && end > offset {
                let local_start = start.saturating_sub(offset);
                let local_end = (end - offset).min(len);
                if local_start < local_end {
                    block.restyle(local_start, local_end, &f);
                }
            }
            offset += len + 1;
        }
    }

    /// Sets the alignment of every block the range touches. A collapsed
    /// range aligns the block containing the caret.
    pub fn set_alignment(&mut self, start: usize, end: usize, alignment: Alignment) {
        let (start, end) = self.clamp(start, end);
        for idx in self.intersected_blocks(start, end) {
            self.blocks[idx].alignment = alignment;
        }
    }

    /// Toggles list membership for every block the range touches: if all of
    /// them are list items they revert to paragraphs, otherwise all become
    /// list items.
    pub fn toggle_list_items(&mut self, start: usize, end: usize) -> Result<(), DocumentError> {
        let (start, end) = self.clamp(start, end);
        let hits = self.intersected_blocks(start, end);
        if hits.is_empty() {
            return Err(DocumentError::NoBlockInRange { start, end });
        }
        let all_items = hits
            .iter()
            .all(|&idx| self.blocks[idx].kind == BlockKind::ListItem);
        let kind = if all_items {
            BlockKind::Paragraph
        } else {
            BlockKind::ListItem
        };
        for idx in hits {
            self.blocks[idx].kind = kind;
        }
        Ok(())
    }

    /// Splits the block at `caret` and wedges a fresh empty list item in
    /// between. Returns the caret position inside the new item.
    pub fn insert_list_item(&mut self, caret: usize) -> usize {
        let caret = caret.min(self.char_len());
        if self.blocks.is_empty() {
            self.blocks.push(Block::list_item());
            return 0;
        }

        let (idx, local) = self.locate(caret);
        let original = self.blocks.remove(idx);
        let kind = original.kind;
        let alignment = original.alignment;
        let (head, tail) = split_runs(original.runs, local);

        let mut replacement = Vec::new();
        if !head.is_empty() {
            replacement.push(Block::with_runs(kind, alignment, head));
        }
        let item_idx = idx + replacement.len();
        replacement.push(Block::list_item());
        if !tail.is_empty() {
            replacement.push(Block::with_runs(kind, alignment, tail));
        }
        self.blocks.splice(idx..idx, replacement);

        self.block_start(item_idx)
    }

    /// Replaces the range with plain text. Newlines split blocks; the
    /// inserted text inherits the style adjacent to the caret. Returns the
    /// caret position after the inserted text.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> usize {
        let (start, end) = self.clamp(start, end);
        if self.blocks.is_empty() {
            self.blocks.push(Block::paragraph());
        }
        self.delete_range(start, end);
        self.insert_text_at(start, text)
    }

    fn delete_range(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        let (first_idx, first_local) = self.locate(start);
        let (last_idx, last_local) = self.locate(end);
        if first_idx == last_idx {
            self.blocks[first_idx].delete_local(first_local, last_local);
            return;
        }
        let tail = self.blocks[last_idx].split_off(last_local);
        self.blocks[first_idx].split_off(first_local);
        self.blocks[first_idx].extend_runs(tail);
        self.blocks.drain(first_idx + 1..=last_idx);
    }

    fn insert_text_at(&mut self, caret: usize, text: &str) -> usize {
        let (idx, local) = self.locate(caret);
        let mut segments = text.split('\n');
        let first = segments.next().unwrap_or("");
        self.blocks[idx].insert_local(local, first);

        let mut caret_block = idx;
        let mut caret_local = local + first.chars().count();
        for segment in segments {
            let tail = self.blocks[caret_block].split_off(caret_local);
            let kind = self.blocks[caret_block].kind;
            let alignment = self.blocks[caret_block].alignment;
            let mut next = Block::with_runs(kind, alignment, tail);
            next.insert_local(0, segment);
            self.blocks.insert(caret_block + 1, next);
            caret_block += 1;
            caret_local = segment.chars().count();
        }
        self.block_start(caret_block) + caret_local
    }

    /// Block index and local offset containing `caret`. A caret sitting on a
    /// block boundary belongs to the earlier block.
    fn locate(&self, caret: usize) -> (usize, usize) {
        let mut offset = 0;
        for (idx, block) in self.blocks.iter().enumerate() {
            let len = block.char_len();
            if caret <= offset + len {
                return (idx, caret - offset);
            }
            offset += len + 1;
        }
        let last = self.blocks.len().saturating_sub(1);
        (last, self.blocks.last().map(Block::char_len).unwrap_or(0))
    }

    fn block_start(&self, idx: usize) -> usize {
        self.blocks
            .iter()
            .take(idx)
            .map(|block| block.char_len() + 1)
            .sum()
    }

    fn intersected_blocks(&self, start: usize, end: usize) -> Vec<usize> {
        let mut hits = Vec::new();
        let mut offset = 0;
        for (idx, block) in self.blocks.iter().enumerate() {
            let len = block.char_len();
            let intersects = if start == end {
                start >= offset && start <= offset + len
            } else {
                start <= offset + len && end > offset
            };
            if intersects {
                hits.push(idx);
                if start == end {
                    break;
                }
            }
            offset += len + 1;
        }
        hits
    }

    fn clamp(&self, start: usize, end: usize) -> (usize, usize) {
        let len = self.char_len();
        let lo = start.min(end).min(len);
        let hi = start.max(end).min(len);
        (lo, hi)
    }
}

fn char_split(text: &str, at: usize) -> (String, String) {
    match text.char_indices().nth(at) {
        Some((byte, _)) => (text[..byte].to_string(), text[byte..].to_string()),
        None => (text.to_string(), String::new()),
    }
}

fn split_runs(runs: Vec<TextRun>, at: usize) -> (Vec<TextRun>, Vec<TextRun>) {
    let mut head = Vec::new();
    let mut tail = Vec::new();
    let mut cursor = 0;
    for run in runs {
        let len = run.char_len();
        if cursor + len <= at {
            head.push(run);
        } else if cursor >= at {
            tail.push(run);
        } else {
            let (left, right) = char_split(&run.text, at - cursor);
            if !left.is_empty() {
                head.push(TextRun::styled(left, run.style.clone()));
            }
            if !right.is_empty() {
                tail.push(TextRun::styled(right, run.style));
            }
        }
        cursor += len;
    }
    (head, tail)
}

#[cfg(test)]
mod tests {
    use super::{Alignment, BlockKind, EditorDocument, InlineStyle};

    fn bold(style: &mut InlineStyle) {
        style.bold = true;
    }

    #[test]
    fn restyle_splits_runs_at_range_edges() {
        let mut doc = EditorDocument::from_plain_text("hello world");
        doc.apply_inline(0, 5, bold);

        let runs = doc.blocks()[0].runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "hello");
        assert!(runs[0].style.bold);
        assert_eq!(runs[1].text, " world");
        assert!(!runs[1].style.bold);
    }

    #[test]
    fn equal_styles_merge_back_into_one_run() {
        let mut doc = EditorDocument::from_plain_text("hello world");
        doc.apply_inline(0, 5, bold);
        doc.apply_inline(5, 11, bold);

        let runs = doc.blocks()[0].runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "hello world");
        assert!(runs[0].style.bold);
    }

    #[test]
    fn restyle_spans_block_boundaries() {
        let mut doc = EditorDocument::from_plain_text("ab\ncd");
        doc.apply_inline(1, 4, bold);

        assert!(!doc.blocks()[0].runs()[0].style.bold);
        assert!(doc.blocks()[0].runs()[1].style.bold);
        assert!(doc.blocks()[1].runs()[0].style.bold);
        assert!(!doc.blocks()[1].runs()[1].style.bold);
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let mut doc = EditorDocument::from_plain_text("héllo");
        doc.apply_inline(1, 2, bold);

        let runs = doc.blocks()[0].runs();
        assert_eq!(runs[1].text, "é");
        assert!(runs[1].style.bold);
    }

    #[test]
    fn caret_alignment_targets_the_containing_block() {
        let mut doc = EditorDocument::from_plain_text("ab\ncd");
        doc.set_alignment(4, 4, Alignment::Center);

        assert_eq!(doc.blocks()[0].alignment, Alignment::Left);
        assert_eq!(doc.blocks()[1].alignment, Alignment::Center);
    }

    #[test]
    fn list_toggle_unifies_mixed_blocks_before_reverting() {
        let mut doc = EditorDocument::from_plain_text("a\nb");
        doc.toggle_list_items(0, 1).unwrap();
        assert_eq!(doc.blocks()[0].kind, BlockKind::ListItem);
        assert_eq!(doc.blocks()[1].kind, BlockKind::Paragraph);

        doc.toggle_list_items(0, 3).unwrap();
        assert!(doc
            .blocks()
            .iter()
            .all(|block| block.kind == BlockKind::ListItem));

        doc.toggle_list_items(0, 3).unwrap();
        assert!(doc
            .blocks()
            .iter()
            .all(|block| block.kind == BlockKind::Paragraph));
    }

    #[test]
    fn list_toggle_reports_missing_blocks() {
        let mut doc = EditorDocument::new();
        let err = doc.toggle_list_items(0, 3).unwrap_err();
        assert_eq!(
            err,
            super::DocumentError::NoBlockInRange { start: 0, end: 0 }
        );
    }

    #[test]
    fn insert_list_item_splits_the_block_at_the_caret() {
        let mut doc = EditorDocument::from_plain_text("hello");
        let caret = doc.insert_list_item(2);

        assert_eq!(doc.blocks().len(), 3);
        assert_eq!(doc.blocks()[0].text(), "he");
        assert_eq!(doc.blocks()[1].kind, BlockKind::ListItem);
        assert_eq!(doc.blocks()[1].char_len(), 0);
        assert_eq!(doc.blocks()[2].text(), "llo");
        assert_eq!(caret, 3);
    }

    #[test]
    fn insert_list_item_at_block_end_appends_only_the_item() {
        let mut doc = EditorDocument::from_plain_text("hello");
        let caret = doc.insert_list_item(5);

        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.blocks()[1].kind, BlockKind::ListItem);
        assert_eq!(caret, 6);
    }

    #[test]
    fn replace_range_merges_blocks_when_the_range_spans_them() {
        let mut doc = EditorDocument::from_plain_text("ab\ncd");
        let caret = doc.replace_range(1, 4, "X");

        assert_eq!(doc.text(), "aXd");
        assert_eq!(caret, 2);
    }

    #[test]
    fn replace_range_splits_blocks_on_newlines() {
        let mut doc = EditorDocument::from_plain_text("abcd");
        let caret = doc.replace_range(2, 2, "x\ny");

        assert_eq!(doc.text(), "abx\nycd");
        assert_eq!(caret, 5);
    }

    #[test]
    fn typed_text_inherits_the_style_left_of_the_caret() {
        let mut doc = EditorDocument::from_plain_text("ab");
        doc.apply_inline(0, 1, bold);
        doc.replace_range(1, 1, "x");

        let runs = doc.blocks()[0].runs();
        assert_eq!(runs[0].text, "ax");
        assert!(runs[0].style.bold);
        assert_eq!(runs[1].text, "b");
    }

    #[test]
    fn typing_into_an_empty_document_creates_the_first_block() {
        let mut doc = EditorDocument::new();
        assert!(doc.is_empty());

        let caret = doc.replace_range(0, 0, "hi");
        assert_eq!(doc.blocks().len(), 1);
        assert_eq!(doc.text(), "hi");
        assert_eq!(caret, 2);
    }
}
