//! Header bar widget
//!
//! Shows the app title and the active chat name (or a selection hint).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

/// Main header showing app title and the active chat name
pub struct MainHeader<'a> {
    chat_name: Option<&'a str>,
    palette: &'a Palette,
}

impl<'a> MainHeader<'a> {
    pub fn new(chat_name: Option<&'a str>, palette: &'a Palette) -> Self {
        Self { chat_name, palette }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::pane_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(" Solomon ", styles::accent_bold(self.palette)),
            Span::styled("· ", styles::text_muted(self.palette)),
        ];
        match self.chat_name {
            Some(name) => spans.push(Span::styled(
                name.to_string(),
                styles::text_primary(self.palette),
            )),
            None => spans.push(Span::styled(
                "Select or create a chat",
                styles::text_muted(self.palette),
            )),
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
