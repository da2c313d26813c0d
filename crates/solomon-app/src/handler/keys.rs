//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Compose => handle_key_compose(key),
        UiMode::Rename => handle_key_rename(key),
    }
}

/// Handle key events in normal (browsing) mode.
///
/// No text input is focused here, so Space is the persona-flag shortcut.
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit; Esc first backs out of the thread in the compact layout
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Esc => {
            if state.compact && state.active_chat_id.is_some() {
                Some(Message::BackToList)
            } else {
                Some(Message::Quit)
            }
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Persona flag shortcut (suppressed in the input modes)
        InputKey::Char(' ') => Some(Message::TogglePersona),

        // ─────────────────────────────────────────────────────────
        // Chat List
        // ─────────────────────────────────────────────────────────
        InputKey::Char('n') => Some(Message::CreateChat),
        InputKey::Up | InputKey::Char('k') => Some(Message::ListUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ListDown),
        InputKey::Enter => state
            .chat_under_cursor()
            .map(|chat| Message::SelectChat { id: chat.id.clone() }),
        InputKey::Char('d') | InputKey::Delete => state
            .chat_under_cursor()
            .map(|chat| Message::DeleteChat { id: chat.id.clone() }),
        InputKey::Char('r') => state.chat_under_cursor().map(|_| Message::StartRename),

        // ─────────────────────────────────────────────────────────
        // Thread / Compose
        // ─────────────────────────────────────────────────────────
        InputKey::Char('i') | InputKey::Char('e') => {
            // The compose input is disabled until a chat is selected
            state.active_chat_id.as_ref().map(|_| Message::FocusCompose)
        }
        InputKey::PageUp => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::ScrollDown),

        // Ask the future self for a reply (one request at a time)
        InputKey::Char('g') if !state.pending_reply => Some(Message::RequestReply),

        // Theme
        InputKey::Char('t') => Some(Message::ToggleDarkMode),

        _ => None,
    }
}

/// Handle key events while the compose input is focused.
///
/// Space types a literal space here -- the persona shortcut only applies
/// when no text input has focus. Tab still flips the flag, mirroring the
/// always-reachable persona switch next to the input.
fn handle_key_compose(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::BlurCompose),
        InputKey::Enter => Some(Message::SubmitMessage),
        InputKey::Backspace => Some(Message::ComposeBackspace),
        InputKey::Tab => Some(Message::TogglePersona),
        InputKey::Char(c) => Some(Message::ComposeInput { c }),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while a chat name is being edited.
fn handle_key_rename(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelRename),
        InputKey::Enter => Some(Message::CommitRename),
        InputKey::Backspace => Some(Message::RenameBackspace),
        InputKey::Char(c) => Some(Message::RenameInput { c }),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solomon_core::Chat;

    fn state() -> AppState {
        let mut state = AppState::new();
        state.loading = None;
        state.chats.push(Chat::new("1", "First"));
        state
    }

    #[test]
    fn test_space_toggles_persona_only_in_normal_mode() {
        let mut s = state();
        assert!(matches!(
            handle_key(&s, InputKey::Char(' ')),
            Some(Message::TogglePersona)
        ));

        s.ui_mode = UiMode::Compose;
        assert!(matches!(
            handle_key(&s, InputKey::Char(' ')),
            Some(Message::ComposeInput { c: ' ' })
        ));

        s.ui_mode = UiMode::Rename;
        assert!(matches!(
            handle_key(&s, InputKey::Char(' ')),
            Some(Message::RenameInput { c: ' ' })
        ));
    }

    #[test]
    fn test_enter_selects_chat_under_cursor() {
        let s = state();
        match handle_key(&s, InputKey::Enter) {
            Some(Message::SelectChat { id }) => assert_eq!(id, "1"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_delete_targets_chat_under_cursor() {
        let s = state();
        match handle_key(&s, InputKey::Char('d')) {
            Some(Message::DeleteChat { id }) => assert_eq!(id, "1"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_list_keys_noop_on_empty_list() {
        let mut s = state();
        s.chats.clear();
        assert!(handle_key(&s, InputKey::Enter).is_none());
        assert!(handle_key(&s, InputKey::Char('d')).is_none());
        assert!(handle_key(&s, InputKey::Char('r')).is_none());
    }

    #[test]
    fn test_compose_focus_requires_active_chat() {
        let mut s = state();
        assert!(handle_key(&s, InputKey::Char('i')).is_none());

        s.select_chat("1");
        assert!(matches!(
            handle_key(&s, InputKey::Char('i')),
            Some(Message::FocusCompose)
        ));
    }

    #[test]
    fn test_reply_request_suppressed_while_pending() {
        let mut s = state();
        s.select_chat("1");
        assert!(matches!(
            handle_key(&s, InputKey::Char('g')),
            Some(Message::RequestReply)
        ));

        s.pending_reply = true;
        assert!(handle_key(&s, InputKey::Char('g')).is_none());
    }

    #[test]
    fn test_esc_backs_out_of_thread_in_compact_layout() {
        let mut s = state();
        s.select_chat("1");
        s.compact = true;
        assert!(matches!(
            handle_key(&s, InputKey::Esc),
            Some(Message::BackToList)
        ));

        s.compact = false;
        assert!(matches!(handle_key(&s, InputKey::Esc), Some(Message::Quit)));
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let mut s = state();
        for mode in [UiMode::Normal, UiMode::Compose, UiMode::Rename] {
            s.ui_mode = mode;
            assert!(matches!(
                handle_key(&s, InputKey::CharCtrl('c')),
                Some(Message::Quit)
            ));
        }
    }
}
