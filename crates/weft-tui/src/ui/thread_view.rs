//! Thread view: one conversation rendered as an indented tree with a single
//! movable selection.
//!
//! Rendering and selection resolution both consume `Thread::walk()`, so the
//! line at index `i` and the message `resolve(i)` returns are the same node
//! by construction. The view itself only owns two scalars, the viewport
//! offset and the selected index; the tree is immutable once built.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use thiserror::Error;
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use weft_core::{Message, Thread, ThreadEntry, ThreadStore};

use crate::ui::format::format_relative_time;
use crate::ui::theme;

/// Branch glyph for a message with later siblings.
const GLYPH_TEE: &str = "├";
/// Branch glyph for the last sibling at its level.
const GLYPH_CORNER: &str = "└";
/// Continuation line drawn under an ancestor that still has later siblings.
const GLYPH_CONTINUATION: &str = "│";
/// Drawn in the final column when a line does not fit the canvas width.
const GLYPH_TRUNCATED: &str = "…";

#[derive(Debug, Error)]
pub enum ViewError {
    /// The backend has no thread matching the identifier; the view is never
    /// constructed in that case.
    #[error("invalid thread: {0}")]
    InvalidThread(String),
}

#[derive(Debug)]
pub struct ThreadView {
    id: String,
    thread: Thread,
    /// Walk index of the first visible line.
    offset: usize,
    /// Walk index of the selected message.
    selected_index: usize,
    /// Height recorded at the last render; navigation uses it to keep the
    /// selection inside the viewport.
    viewport_height: usize,
}

impl ThreadView {
    /// Build the view for one thread. Fails before any state exists when the
    /// backend cannot produce exactly one matching thread.
    pub fn open(store: &dyn ThreadStore, thread_id: &str) -> Result<Self, ViewError> {
        let thread = store
            .lookup_thread(thread_id)
            .map_err(|_| ViewError::InvalidThread(thread_id.to_string()))?;

        // The backend's count and a full walk must agree; a mismatch would
        // desynchronize selection from rendering.
        debug_assert_eq!(thread.walk().count(), thread.total_count);
        debug!(thread_id, total_count = thread.total_count, "opened thread");

        Ok(Self {
            id: thread_id.to_string(),
            thread,
            offset: 0,
            selected_index: 0,
            viewport_height: 0,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Total number of lines this view can produce. O(1): the backend
    /// counted the tree once at construction.
    pub fn line_count(&self) -> usize {
        self.thread.total_count
    }

    /// Status strip: the thread identifier and a 1-based position indicator.
    pub fn status(&self) -> Vec<String> {
        vec![
            format!("thread-id: {}", self.id),
            format!(
                "message {} of {}",
                self.selected_index + 1,
                self.thread.total_count
            ),
        ]
    }

    /// Message under the selection. `None` only for an empty thread; for a
    /// non-empty thread the selection invariant keeps the index in bounds.
    pub fn selected_message(&self) -> Option<&Message> {
        if self.thread.total_count == 0 {
            return None;
        }
        let resolved = self.thread.resolve(self.selected_index);
        debug_assert!(resolved.is_some(), "selected index outside thread bounds");
        resolved
    }

    /// Redraw into `area`: clear it, then emit one line per message whose
    /// walk index falls inside the viewport.
    pub fn update(&mut self, f: &mut Frame, area: Rect) {
        self.set_viewport_height(area.height as usize);

        let background = Block::default().style(Style::default().bg(theme::BG_APP));
        f.render_widget(background, area);

        let (lines, visited) = self.visible_lines(area.height as usize, area.width as usize);
        debug_assert!(visited <= self.thread.total_count);
        f.render_widget(Paragraph::new(lines), area);
    }

    /// Record the canvas height and re-clamp the viewport, e.g. after a
    /// terminal resize shrinks the window above the selection.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll_to_selection();
    }

    /// Build the visible lines for a `height` x `width` canvas. Returns the
    /// lines and the number of messages visited; the walk stops as soon as
    /// the window is exhausted, so the count is a diagnostic lower bound,
    /// not a replacement for `line_count()`.
    pub fn visible_lines(&self, height: usize, width: usize) -> (Vec<Line<'static>>, usize) {
        let mut lines = Vec::new();
        if height == 0 {
            return (lines, 0);
        }

        let end = self.offset.saturating_add(height);
        let mut visited = 0;
        for entry in self.thread.walk() {
            if entry.index >= end {
                break;
            }
            visited += 1;
            if entry.index >= self.offset {
                lines.push(self.message_line(&entry, width));
            }
        }
        (lines, visited)
    }

    /// One rendered line: ancestor leading markers, branch glyph, sender,
    /// relative date, tags. Fields that would overflow the width are dropped
    /// in favor of a truncation indicator in the last column.
    fn message_line(&self, entry: &ThreadEntry<'_>, width: usize) -> Line<'static> {
        let mut base = Style::default();
        if entry.index == self.selected_index {
            base = base.add_modifier(Modifier::REVERSED);
        }
        if entry.message.is_unread() {
            base = base.add_modifier(Modifier::BOLD);
        }

        let marker = base.fg(theme::TREE_MARKER);
        let mut pieces: Vec<(String, Style)> = Vec::new();
        for open in &entry.leading {
            let glyph = if *open { GLYPH_CONTINUATION } else { " " };
            pieces.push((glyph.to_string(), marker));
        }
        let branch = if entry.last { GLYPH_CORNER } else { GLYPH_TEE };
        pieces.push((format!("{branch}>"), marker));
        pieces.push((format!(" {}", entry.message.sender), base.fg(theme::TEXT_PRIMARY)));
        pieces.push((
            format!(" {}", format_relative_time(entry.message.date)),
            base.fg(theme::DATE),
        ));
        let tags = entry.message.tag_line();
        if !tags.is_empty() {
            pieces.push((format!(" {tags}"), base.fg(theme::TAGS)));
        }

        fit_line(pieces, width, base)
    }

    // --- navigation -------------------------------------------------------
    //
    // Every mutation clamps the selection to [0, total) and then pulls the
    // offset along so the selected line stays inside the viewport.

    pub fn select_next(&mut self, amount: usize) {
        if self.thread.total_count == 0 {
            return;
        }
        self.selected_index = self
            .selected_index
            .saturating_add(amount)
            .min(self.thread.total_count - 1);
        self.scroll_to_selection();
    }

    pub fn select_previous(&mut self, amount: usize) {
        self.selected_index = self.selected_index.saturating_sub(amount);
        self.scroll_to_selection();
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
        self.scroll_to_selection();
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.thread.total_count.saturating_sub(1);
        self.scroll_to_selection();
    }

    pub fn page_down(&mut self) {
        self.select_next(self.viewport_height.max(1));
    }

    pub fn page_up(&mut self) {
        self.select_previous(self.viewport_height.max(1));
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Move `offset` by exactly the overflow amount so that the selected
    /// line lies within `[offset, offset + height)`.
    fn scroll_to_selection(&mut self) {
        let height = self.viewport_height;
        if height == 0 {
            return;
        }
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + height {
            self.offset = self.selected_index + 1 - height;
        }
    }
}

/// Lay styled pieces into a line of at most `width` columns. When the pieces
/// overflow, drawing stops and the final column carries a truncation glyph;
/// an overlong line is a per-line condition, never a render failure.
fn fit_line(pieces: Vec<(String, Style)>, width: usize, base: Style) -> Line<'static> {
    if width == 0 {
        return Line::default();
    }

    let total: usize = pieces.iter().map(|(text, _)| text.width()).sum();
    if total <= width {
        let spans = pieces
            .into_iter()
            .map(|(text, style)| Span::styled(text, style))
            .collect::<Vec<_>>();
        return Line::from(spans);
    }

    let budget = width - 1;
    let mut used = 0;
    let mut spans = Vec::new();
    for (text, style) in pieces {
        if used == budget {
            break;
        }
        let text_width = text.width();
        if used + text_width <= budget {
            used += text_width;
            spans.push(Span::styled(text, style));
        } else {
            let cut = take_columns(&text, budget - used);
            used += cut.width();
            if !cut.is_empty() {
                spans.push(Span::styled(cut, style));
            }
            break;
        }
    }
    // Pad up to the indicator column when a wide character fell short.
    if used < budget {
        spans.push(Span::styled(" ".repeat(budget - used), base));
    }
    spans.push(Span::styled(
        GLYPH_TRUNCATED.to_string(),
        base.fg(theme::TEXT_MUTED),
    ));
    Line::from(spans)
}

/// Longest prefix of `text` that fits in `columns` terminal columns.
fn take_columns(text: &str, columns: usize) -> String {
    let mut used = 0;
    let mut result = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > columns {
            break;
        }
        used += w;
        result.push(ch);
    }
    result
}
