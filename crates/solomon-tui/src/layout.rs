//! Screen layout definitions for the TUI
//!
//! The two-pane layout (chat list + thread) collapses to a single pane
//! below the configured compact width: list when no chat is selected,
//! thread when one is -- the terminal analogue of the source app's mobile
//! breakpoint.

use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed width of the chat-list pane in the two-pane layout
pub const LIST_PANE_WIDTH: u16 = 32;

/// Height of the compose bar at the bottom of the thread pane
pub const COMPOSE_BAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (app title + active chat name)
    pub header: Rect,

    /// Main content area (list and/or thread panes)
    pub body: Rect,

    /// One-line status bar at the bottom
    pub status: Rect,
}

/// Body panes. `None` means the pane is hidden in the current layout.
#[derive(Debug, Clone, Copy)]
pub struct BodyAreas {
    pub list: Option<Rect>,
    pub thread: Option<Rect>,
}

/// Thread pane split into the message area and the compose bar
#[derive(Debug, Clone, Copy)]
pub struct ThreadAreas {
    pub messages: Rect,
    pub compose: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the body into panes.
///
/// Wide layout shows both; compact layout shows the thread when a chat is
/// selected and the list otherwise.
pub fn split_body(area: Rect, compact: bool, has_active_chat: bool) -> BodyAreas {
    if compact {
        if has_active_chat {
            BodyAreas {
                list: None,
                thread: Some(area),
            }
        } else {
            BodyAreas {
                list: Some(area),
                thread: None,
            }
        }
    } else {
        let chunks =
            Layout::horizontal([Constraint::Length(LIST_PANE_WIDTH), Constraint::Min(0)])
                .split(area);
        BodyAreas {
            list: Some(chunks[0]),
            thread: Some(chunks[1]),
        }
    }
}

/// Split the thread pane into message area and compose bar
pub fn split_thread(area: Rect) -> ThreadAreas {
    let chunks =
        Layout::vertical([Constraint::Min(0), Constraint::Length(COMPOSE_BAR_HEIGHT)]).split(area);
    ThreadAreas {
        messages: chunks[0],
        compose: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_rows() {
        let areas = create(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.body.height, 26);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.status.y, 29);
    }

    #[test]
    fn test_wide_layout_shows_both_panes() {
        let body = Rect::new(0, 3, 100, 26);
        let panes = split_body(body, false, false);
        let list = panes.list.unwrap();
        let thread = panes.thread.unwrap();
        assert_eq!(list.width, LIST_PANE_WIDTH);
        assert_eq!(thread.width, 100 - LIST_PANE_WIDTH);
        assert_eq!(thread.x, LIST_PANE_WIDTH);
    }

    #[test]
    fn test_compact_layout_shows_list_without_selection() {
        let body = Rect::new(0, 3, 60, 26);
        let panes = split_body(body, true, false);
        assert!(panes.list.is_some());
        assert!(panes.thread.is_none());
    }

    #[test]
    fn test_compact_layout_shows_thread_with_selection() {
        let body = Rect::new(0, 3, 60, 26);
        let panes = split_body(body, true, true);
        assert!(panes.list.is_none());
        assert_eq!(panes.thread.unwrap(), body);
    }

    #[test]
    fn test_thread_split_reserves_compose_bar() {
        let thread = Rect::new(32, 3, 68, 26);
        let areas = split_thread(thread);
        assert_eq!(areas.compose.height, COMPOSE_BAR_HEIGHT);
        assert_eq!(areas.messages.height, 26 - COMPOSE_BAR_HEIGHT);
    }
}
