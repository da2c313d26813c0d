//! Compose bar: the draft input and its persona tag

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use solomon_app::state::{AppState, UiMode};

use crate::theme::{styles, Palette};

/// Compose bar widget
pub struct ComposeBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> ComposeBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }
}

impl Widget for ComposeBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.ui_mode == UiMode::Compose;
        let block = styles::pane_block(self.palette, focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = Vec::new();

        if self.state.active_chat_id.is_none() {
            spans.push(Span::styled(
                " Select a chat to start writing",
                styles::text_muted(self.palette),
            ));
        } else {
            let tag_style = if self.state.draft.as_future_self {
                styles::bubble_future(self.palette)
            } else {
                styles::bubble_user(self.palette)
            };
            let tag = if self.state.draft.as_future_self {
                " Future self "
            } else {
                " You "
            };
            spans.push(Span::styled(tag, tag_style));
            spans.push(Span::raw(" "));

            if self.state.draft.text.is_empty() && !focused {
                spans.push(Span::styled(
                    "Press i to write…",
                    styles::text_muted(self.palette),
                ));
            } else {
                spans.push(Span::styled(
                    self.state.draft.text.clone(),
                    styles::text_primary(self.palette),
                ));
                if focused {
                    spans.push(Span::styled("▏", styles::accent(self.palette)));
                }
            }
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
