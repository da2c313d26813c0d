//! Active thread pane
//!
//! Messages render as aligned bubbles: right for the user, left for the
//! future self, each with a localized timestamp label beneath. No
//! virtualization -- threads stay small; a scroll offset from the bottom is
//! enough.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use solomon_core::{format_timestamp_label, Chat};

use crate::theme::{styles, Palette};

/// Thread view widget
pub struct ThreadView<'a> {
    chat: &'a Chat,
    /// Scroll offset in lines, measured from the bottom (0 = newest).
    scroll_from_bottom: u16,
    pending_reply: bool,
    palette: &'a Palette,
}

impl<'a> ThreadView<'a> {
    pub fn new(chat: &'a Chat, palette: &'a Palette) -> Self {
        Self {
            chat,
            scroll_from_bottom: 0,
            pending_reply: false,
            palette,
        }
    }

    pub fn scroll(mut self, from_bottom: u16) -> Self {
        self.scroll_from_bottom = from_bottom;
        self
    }

    pub fn pending_reply(mut self, pending: bool) -> Self {
        self.pending_reply = pending;
        self
    }
}

impl Widget for ThreadView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::pane_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 8 {
            return;
        }

        // Bubbles take at most two thirds of the pane, like the source UI.
        let bubble_width = ((inner.width as usize * 2) / 3).max(8);

        let mut lines: Vec<Line> = Vec::new();
        for message in &self.chat.messages {
            let (style, alignment) = if message.is_old_self {
                (styles::bubble_future(self.palette), Alignment::Left)
            } else {
                (styles::bubble_user(self.palette), Alignment::Right)
            };

            for segment in wrap_text(&message.content, bubble_width) {
                lines.push(
                    Line::from(Span::styled(format!(" {segment} "), style)).alignment(alignment),
                );
            }
            lines.push(
                Line::from(Span::styled(
                    format_timestamp_label(message.timestamp),
                    styles::text_muted(self.palette),
                ))
                .alignment(alignment),
            );
            lines.push(Line::default());
        }

        if self.chat.messages.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                " Nothing here yet. Press i to write the first entry.",
                styles::text_muted(self.palette),
            )));
        }

        if self.pending_reply {
            lines.push(
                Line::from(Span::styled(
                    " future self is thinking…",
                    styles::text_secondary(self.palette).add_modifier(Modifier::ITALIC),
                ))
                .alignment(Alignment::Left),
            );
        }

        // Pin to the bottom, then back off by the scroll offset.
        let total = lines.len() as u16;
        let max_offset = total.saturating_sub(inner.height);
        let from_bottom = self.scroll_from_bottom.min(max_offset);
        let offset_top = max_offset - from_bottom;

        Paragraph::new(lines)
            .scroll((offset_top, 0))
            .render(inner, buf);
    }
}

/// Greedy word wrap by display width; words longer than the limit are
/// hard-broken.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();

        if current_width > 0 && current_width + 1 + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > max_width {
            // Hard-break an overlong word.
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > max_width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(c);
                current_width += w;
            }
        } else {
            if current_width > 0 {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(word);
            current_width += word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_text("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_hard_breaks_long_words() {
        let lines = wrap_text("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_yields_one_empty_line() {
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_wrap_collapses_inner_whitespace() {
        assert_eq!(wrap_text("a   b", 10), vec!["a b"]);
    }
}
