//! Semantic style builders over a [`Palette`]

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_error(p: &Palette) -> Style {
    Style::default().fg(p.status_error)
}

pub fn status_ok(p: &Palette) -> Style {
    Style::default().fg(p.status_ok)
}

// --- Message bubbles ---
pub fn bubble_user(p: &Palette) -> Style {
    Style::default().fg(p.bubble_user_fg).bg(p.bubble_user_bg)
}

pub fn bubble_future(p: &Palette) -> Style {
    Style::default().fg(p.bubble_future_fg).bg(p.bubble_future_bg)
}

// --- Selection ---
pub fn selected_highlight(p: &Palette) -> Style {
    Style::default()
        .fg(p.selection_fg)
        .bg(p.selection_bg)
        .add_modifier(Modifier::BOLD)
}

// --- Containers ---
/// Bordered pane block; the border brightens when the pane has focus.
pub fn pane_block(p: &Palette, active: bool) -> Block<'static> {
    let border_color = if active { p.border_active } else { p.border_dim };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(p.surface))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_styles_follow_palette() {
        let p = Palette::dark();
        assert_eq!(bubble_user(&p).bg, Some(p.bubble_user_bg));
        assert_eq!(bubble_future(&p).bg, Some(p.bubble_future_bg));
    }

    #[test]
    fn test_pane_block_border_reflects_focus() {
        // Smoke test: both variants build without panicking
        let p = Palette::light();
        let _ = pane_block(&p, true);
        let _ = pane_block(&p, false);
    }
}
