//! Chat list pane
//!
//! One row per chat: cursor highlight, active-chat marker, and an inline
//! edit row while a rename is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use solomon_app::state::{AppState, UiMode};

use crate::theme::{styles, Palette};

/// Chat list widget
pub struct ChatList<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> ChatList<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for ChatList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.ui_mode != UiMode::Compose;
        let block = styles::pane_block(self.palette, focused)
            .title(format!(" Journal ({}) ", self.state.chats.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.chats.is_empty() {
            let lines = vec![
                Line::default(),
                Line::from(Span::styled(
                    " No chats yet.",
                    styles::text_muted(self.palette),
                )),
                Line::from(Span::styled(
                    " Press n to begin.",
                    styles::text_muted(self.palette),
                )),
            ];
            Paragraph::new(lines).render(inner, buf);
            return;
        }

        // Keep the cursor row inside the visible window.
        let height = inner.height as usize;
        let cursor = self.state.list_cursor;
        let first = if cursor >= height { cursor + 1 - height } else { 0 };

        let renaming = self.state.rename.as_ref();
        let row_width = inner.width as usize;

        let lines: Vec<Line> = self
            .state
            .chats
            .iter()
            .enumerate()
            .skip(first)
            .take(height)
            .map(|(index, chat)| {
                if let Some(rename) = renaming.filter(|r| r.chat_id == chat.id) {
                    let text = truncate_to_width(
                        &format!("✎ {}▏", rename.buffer),
                        row_width.saturating_sub(1),
                    );
                    return Line::from(Span::styled(
                        format!(" {text}"),
                        styles::accent(self.palette),
                    ));
                }

                let is_cursor = index == cursor;
                let is_active = self.state.active_chat_id.as_deref() == Some(chat.id.as_str());

                let prefix = if is_cursor { "▸" } else { " " };
                let marker = if is_active { "●" } else { " " };
                let name = truncate_to_width(&chat.name, row_width.saturating_sub(5));

                let style = if is_cursor {
                    styles::selected_highlight(self.palette)
                } else if is_active {
                    styles::accent_bold(self.palette)
                } else {
                    styles::text_primary(self.palette)
                };

                Line::from(Span::styled(format!("{prefix} {marker} {name}"), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate a string to the given display width, appending `…` when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
