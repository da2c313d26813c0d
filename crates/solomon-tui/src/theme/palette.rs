//! Color palettes for the dark and light themes

use ratatui::style::Color;

/// Named colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub background: Color,
    pub surface: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Message bubbles ---
    /// User-authored messages (right-aligned)
    pub bubble_user_fg: Color,
    pub bubble_user_bg: Color,
    /// Future-self messages (left-aligned)
    pub bubble_future_fg: Color,
    pub bubble_future_bg: Color,

    // --- Status ---
    pub status_error: Color,
    pub status_ok: Color,

    // --- Selection ---
    pub selection_fg: Color,
    pub selection_bg: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            background: Color::Black,
            surface: Color::Black,
            border_dim: Color::DarkGray,
            border_active: Color::Cyan,
            accent: Color::Cyan,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            bubble_user_fg: Color::White,
            bubble_user_bg: Color::Blue,
            bubble_future_fg: Color::White,
            bubble_future_bg: Color::DarkGray,
            status_error: Color::Red,
            status_ok: Color::Green,
            selection_fg: Color::Black,
            selection_bg: Color::Cyan,
        }
    }

    pub const fn light() -> Self {
        Self {
            background: Color::White,
            surface: Color::White,
            border_dim: Color::Gray,
            border_active: Color::Blue,
            accent: Color::Blue,
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            text_muted: Color::Gray,
            bubble_user_fg: Color::White,
            bubble_user_bg: Color::Blue,
            bubble_future_fg: Color::Black,
            bubble_future_bg: Color::Gray,
            status_error: Color::Red,
            status_ok: Color::Green,
            selection_fg: Color::White,
            selection_bg: Color::Blue,
        }
    }

    /// Palette for the persisted dark-mode flag.
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
