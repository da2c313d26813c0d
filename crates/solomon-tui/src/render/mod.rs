//! Main render/view function (View in TEA pattern)

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use solomon_app::state::AppState;

use crate::layout;
use crate::theme::{styles, Palette};
use crate::widgets;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the complete UI (View function in TEA)
///
/// Pure rendering -- never modifies state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_mode(state.dark_mode);
    let area = frame.area();

    // Fill the terminal with the theme background
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let areas = layout::create(area);

    let header =
        widgets::MainHeader::new(state.active_chat().map(|c| c.name.as_str()), &palette);
    frame.render_widget(header, areas.header);

    if let Some(loading) = &state.loading {
        render_loading(frame, areas.body, &palette, &loading.message, loading.animation_frame);
    } else {
        render_body(frame, areas.body, state, &palette);
    }

    frame.render_widget(widgets::StatusBar::new(state, &palette), areas.status);
}

fn render_body(frame: &mut Frame, body: Rect, state: &AppState, palette: &Palette) {
    let panes = layout::split_body(body, state.compact, state.active_chat_id.is_some());

    if let Some(list_area) = panes.list {
        frame.render_widget(widgets::ChatList::new(state, palette), list_area);
    }

    if let Some(thread_area) = panes.thread {
        let thread = layout::split_thread(thread_area);

        match state.active_chat() {
            Some(chat) => frame.render_widget(
                widgets::ThreadView::new(chat, palette)
                    .scroll(state.thread_scroll)
                    .pending_reply(state.pending_reply),
                thread.messages,
            ),
            None => render_thread_placeholder(frame, thread.messages, palette),
        }

        frame.render_widget(widgets::ComposeBar::new(state, palette), thread.compose);
    }
}

fn render_thread_placeholder(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = styles::pane_block(palette, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Select or create a chat",
            styles::text_muted(palette),
        )))
        .alignment(Alignment::Center),
        centered_line(inner),
    );
}

fn render_loading(frame: &mut Frame, body: Rect, palette: &Palette, message: &str, frame_no: u64) {
    let spinner = SPINNER_FRAMES[(frame_no as usize) % SPINNER_FRAMES.len()];
    frame.render_widget(
        Paragraph::new(format!("{spinner} {message}"))
            .alignment(Alignment::Center)
            .style(styles::text_secondary(palette)),
        centered_line(body),
    );
}

/// The single row at the vertical middle of an area.
fn centered_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use solomon_core::{Chat, ChatMessage};

    fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.loading = None;
        state
    }

    #[test]
    fn test_empty_state_shows_hints() {
        let state = loaded_state();
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Solomon"));
        assert!(screen.contains("Journal (0)"));
        assert!(screen.contains("No chats yet."));
        assert!(screen.contains("Select or create a chat"));
    }

    #[test]
    fn test_active_thread_renders_messages_and_timestamps() {
        let mut state = loaded_state();
        let mut chat = Chat::new("1", "March 3, 2025");
        chat.push_message(ChatMessage::new("Hello", false, 1_741_000_000_000));
        chat.push_message(ChatMessage::new("Hello, younger me", true, 1_741_000_000_001));
        state.chats.push(chat);
        state.select_chat("1");

        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("March 3, 2025"));
        assert!(screen.contains("Hello"));
        assert!(screen.contains("Hello, younger me"));
        // Compose bar persona tag
        assert!(screen.contains("You"));
    }

    #[test]
    fn test_loading_screen_shows_message() {
        let state = AppState::new();
        let message = state.loading.as_ref().unwrap().message.clone();
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains(&message));
    }

    #[test]
    fn test_compact_layout_without_selection_shows_only_list() {
        let mut state = loaded_state();
        state.chats.push(Chat::new("1", "Only entry"));
        state.compact = true;

        let screen = render_to_string(&state, 60, 24);
        assert!(screen.contains("Journal (1)"));
        assert!(!screen.contains("Press i to write"));
    }

    #[test]
    fn test_compact_layout_with_selection_shows_only_thread() {
        let mut state = loaded_state();
        state.chats.push(Chat::new("1", "Only entry"));
        state.select_chat("1");
        state.compact = true;

        let screen = render_to_string(&state, 60, 24);
        assert!(!screen.contains("Journal (1)"));
        assert!(screen.contains("Nothing here yet"));
    }

    #[test]
    fn test_status_line_error_is_rendered() {
        let mut state = loaded_state();
        state.set_error("Save failed: boom");
        let screen = render_to_string(&state, 100, 30);
        assert!(screen.contains("Save failed: boom"));
    }
}
