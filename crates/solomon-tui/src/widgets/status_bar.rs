//! Status bar widget
//!
//! One line: transient status message (when set), persona flag, theme,
//! reply-in-flight indicator, and the key hints for the current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use solomon_app::state::{AppState, UiMode};

use crate::theme::{styles, Palette};

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn persona_indicator(&self) -> Span<'static> {
        if self.state.draft.as_future_self {
            Span::styled(
                "✎ Future self",
                styles::accent(self.palette).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("✎ You", styles::text_secondary(self.palette))
        }
    }

    fn theme_indicator(&self) -> Span<'static> {
        let label = if self.state.dark_mode { "☾ dark" } else { "☀ light" };
        Span::styled(label, styles::text_muted(self.palette))
    }

    fn key_hints(&self) -> Span<'static> {
        let hints = match self.state.ui_mode {
            UiMode::Normal => "n new · ⏎ open · i write · g reply · ␣ persona · t theme · q quit",
            UiMode::Compose => "⏎ send · Tab persona · Esc done",
            UiMode::Rename => "⏎ save · Esc cancel",
        };
        Span::styled(hints.to_string(), styles::text_muted(self.palette))
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];

        if let Some(status) = &self.state.status {
            let style = if status.is_error {
                styles::status_error(self.palette)
            } else {
                styles::status_ok(self.palette)
            };
            spans.push(Span::styled(status.text.clone(), style));
            spans.push(Span::styled("  ·  ", styles::text_muted(self.palette)));
        }

        if self.state.pending_reply {
            spans.push(Span::styled(
                "✦ thinking…",
                styles::accent(self.palette),
            ));
            spans.push(Span::styled("  ·  ", styles::text_muted(self.palette)));
        }

        spans.push(self.persona_indicator());
        spans.push(Span::styled("  ·  ", styles::text_muted(self.palette)));
        spans.push(self.theme_indicator());
        spans.push(Span::styled("  ·  ", styles::text_muted(self.palette)));
        spans.push(self.key_hints());

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(self.palette.surface))
            .render(area, buf);
    }
}
