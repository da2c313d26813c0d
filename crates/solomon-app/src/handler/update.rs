//! Main update function - handles state transitions (TEA pattern)

use solomon_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, RenameState, UiMode};

use super::{chats, keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_status();
            if let Some(loading) = &mut state.loading {
                loading.tick();
            }
            UpdateResult::none()
        }

        Message::Resized { width, .. } => {
            state.apply_resize(width);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chat List
        // ─────────────────────────────────────────────────────────
        Message::CreateChat => chats::handle_create_chat(state),
        Message::DeleteChat { id } => chats::handle_delete_chat(state, &id),

        Message::SelectChat { id } => {
            state.select_chat(&id);
            UpdateResult::none()
        }

        Message::BackToList => {
            state.back_to_list();
            UpdateResult::none()
        }

        Message::ListUp => {
            state.list_cursor = state.list_cursor.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ListDown => {
            if !state.chats.is_empty() && state.list_cursor + 1 < state.chats.len() {
                state.list_cursor += 1;
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Rename Flow
        // ─────────────────────────────────────────────────────────
        Message::StartRename => {
            let seed = state
                .chat_under_cursor()
                .map(|chat| (chat.id.clone(), chat.name.clone()));
            if let Some((chat_id, buffer)) = seed {
                state.rename = Some(RenameState { chat_id, buffer });
                state.ui_mode = UiMode::Rename;
            }
            UpdateResult::none()
        }

        Message::RenameInput { c } => {
            if let Some(rename) = &mut state.rename {
                rename.buffer.push(c);
            }
            UpdateResult::none()
        }

        Message::RenameBackspace => {
            if let Some(rename) = &mut state.rename {
                rename.buffer.pop();
            }
            UpdateResult::none()
        }

        Message::CommitRename => chats::handle_commit_rename(state),

        Message::CancelRename => {
            state.rename = None;
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Compose Flow
        // ─────────────────────────────────────────────────────────
        Message::FocusCompose => {
            if state.active_chat_id.is_some() {
                state.ui_mode = UiMode::Compose;
            }
            UpdateResult::none()
        }

        Message::BlurCompose => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::ComposeInput { c } => {
            state.draft.text.push(c);
            UpdateResult::none()
        }

        Message::ComposeBackspace => {
            state.draft.text.pop();
            UpdateResult::none()
        }

        Message::SubmitMessage => chats::handle_submit_message(state),

        Message::TogglePersona => {
            state.draft.as_future_self = !state.draft.as_future_self;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Thread View
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.thread_scroll = state.thread_scroll.saturating_add(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            state.thread_scroll = state.thread_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            UpdateResult::action(UpdateAction::PersistDarkMode)
        }

        // ─────────────────────────────────────────────────────────
        // Persona Reply
        // ─────────────────────────────────────────────────────────
        Message::RequestReply => {
            if state.pending_reply {
                return UpdateResult::none();
            }
            let Some((chat_id, transcript)) = state
                .active_chat()
                .map(|chat| (chat.id.clone(), chat.transcript()))
            else {
                return UpdateResult::none();
            };

            state.pending_reply = true;
            UpdateResult::action(UpdateAction::RequestReply { chat_id, transcript })
        }

        Message::ReplyReceived { chat_id, text } => {
            chats::handle_reply_received(state, &chat_id, text)
        }

        Message::ReplyFailed { error } => {
            warn!("Persona reply failed: {error}");
            state.pending_reply = false;
            state.set_error(format!("Reply failed: {error}"));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Remote Results
        // ─────────────────────────────────────────────────────────
        Message::ChatsLoaded { chats } => {
            info!(count = chats.len(), "Chat collection loaded");
            state.chats = chats;
            state.clamp_cursor();
            state.loading = None;
            UpdateResult::none()
        }

        Message::DarkModeLoaded { dark_mode } => {
            state.dark_mode = dark_mode;
            UpdateResult::none()
        }

        Message::PersistFailed { error } => {
            warn!("Persistence write failed: {error}");
            state.set_error(format!("Save failed: {error}"));
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use solomon_core::{today_long_date, Chat, ChatMessage};

    /// Drive a message through update, following any follow-up messages,
    /// and collect the actions produced -- a miniature of the event loop.
    fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
        let mut actions = Vec::new();
        let mut msg = Some(message);
        while let Some(m) = msg {
            let result = update(state, m);
            if let Some(action) = result.action {
                actions.push(action);
            }
            msg = result.message;
        }
        actions
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            drive(state, Message::Key(InputKey::Char(c)));
        }
    }

    #[test]
    fn test_scenario_create_submit_shows_one_entry() {
        let mut state = AppState::new();
        state.loading = None;

        drive(&mut state, Message::CreateChat);
        drive(&mut state, Message::Key(InputKey::Char('i')));
        assert_eq!(state.ui_mode, UiMode::Compose);

        type_text(&mut state, "Hello");
        let actions = drive(&mut state, Message::Key(InputKey::Enter));

        let chat = state.active_chat().unwrap();
        assert_eq!(chat.name, today_long_date());
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].content, "Hello");
        assert!(!chat.messages[0].is_old_self);
        assert_eq!(state.chats.len(), 1);
        assert!(matches!(actions[..], [UpdateAction::PersistChats]));
    }

    #[test]
    fn test_space_flips_flag_once_per_press_in_normal_mode() {
        let mut state = AppState::new();
        assert!(!state.draft.as_future_self);

        drive(&mut state, Message::Key(InputKey::Char(' ')));
        assert!(state.draft.as_future_self);

        drive(&mut state, Message::Key(InputKey::Char(' ')));
        assert!(!state.draft.as_future_self);
    }

    #[test]
    fn test_space_does_not_flip_flag_while_composing() {
        let mut state = AppState::new();
        state.loading = None;
        drive(&mut state, Message::CreateChat);
        drive(&mut state, Message::FocusCompose);

        drive(&mut state, Message::Key(InputKey::Char(' ')));
        assert!(!state.draft.as_future_self);
        assert_eq!(state.draft.text, " ");
    }

    #[test]
    fn test_submit_empty_via_keys_leaves_thread_unchanged() {
        let mut state = AppState::new();
        state.loading = None;
        drive(&mut state, Message::CreateChat);
        drive(&mut state, Message::FocusCompose);

        let actions = drive(&mut state, Message::Key(InputKey::Enter));
        assert!(state.active_chat().unwrap().messages.is_empty());
        assert!(actions.is_empty());
    }

    #[test]
    fn test_toggle_dark_mode_persists_settings() {
        let mut state = AppState::new();
        let actions = drive(&mut state, Message::ToggleDarkMode);
        assert!(state.dark_mode);
        assert!(matches!(actions[..], [UpdateAction::PersistDarkMode]));
    }

    #[test]
    fn test_request_reply_snapshots_transcript() {
        let mut state = AppState::new();
        state.loading = None;
        let mut chat = Chat::new("7", "chat");
        chat.push_message(ChatMessage::new("What now?", false, 1));
        state.chats.push(chat);
        state.select_chat("7");

        let actions = drive(&mut state, Message::RequestReply);
        assert!(state.pending_reply);
        match &actions[..] {
            [UpdateAction::RequestReply { chat_id, transcript }] => {
                assert_eq!(chat_id, "7");
                assert_eq!(transcript.len(), 1);
                assert_eq!(transcript[0].content, "What now?");
            }
            other => panic!("unexpected actions: {other:?}"),
        }
    }

    #[test]
    fn test_request_reply_without_active_chat_is_noop() {
        let mut state = AppState::new();
        let actions = drive(&mut state, Message::RequestReply);
        assert!(actions.is_empty());
        assert!(!state.pending_reply);
    }

    #[test]
    fn test_request_reply_suppressed_while_pending() {
        let mut state = AppState::new();
        state.loading = None;
        state.chats.push(Chat::new("7", "chat"));
        state.select_chat("7");

        drive(&mut state, Message::RequestReply);
        let actions = drive(&mut state, Message::RequestReply);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_reply_failure_surfaces_in_status_line() {
        let mut state = AppState::new();
        state.pending_reply = true;

        drive(
            &mut state,
            Message::ReplyFailed {
                error: "endpoint melted".to_string(),
            },
        );
        assert!(!state.pending_reply);
        let status = state.status.as_ref().unwrap();
        assert!(status.is_error);
        assert!(status.text.contains("endpoint melted"));
    }

    #[test]
    fn test_chats_loaded_replaces_collection_and_clears_loading() {
        let mut state = AppState::new();
        assert!(state.loading.is_some());

        drive(
            &mut state,
            Message::ChatsLoaded {
                chats: vec![Chat::new("1", "a"), Chat::new("2", "b")],
            },
        );
        assert_eq!(state.chats.len(), 2);
        assert!(state.loading.is_none());
    }

    #[test]
    fn test_list_navigation_clamps_at_both_ends() {
        let mut state = AppState::new();
        state.loading = None;
        state.chats.push(Chat::new("1", "a"));
        state.chats.push(Chat::new("2", "b"));

        drive(&mut state, Message::ListUp);
        assert_eq!(state.list_cursor, 0);
        drive(&mut state, Message::ListDown);
        assert_eq!(state.list_cursor, 1);
        drive(&mut state, Message::ListDown);
        assert_eq!(state.list_cursor, 1);
    }

    #[test]
    fn test_rename_flow_via_keys() {
        let mut state = AppState::new();
        state.loading = None;
        state.chats.push(Chat::new("1", "Old name"));

        drive(&mut state, Message::Key(InputKey::Char('r')));
        assert_eq!(state.ui_mode, UiMode::Rename);
        assert_eq!(state.rename.as_ref().unwrap().buffer, "Old name");

        // Clear the seeded buffer, type a new name, commit.
        for _ in 0.."Old name".len() {
            drive(&mut state, Message::Key(InputKey::Backspace));
        }
        type_text(&mut state, "Fresh start");
        drive(&mut state, Message::Key(InputKey::Enter));

        assert_eq!(state.chats[0].name, "Fresh start");
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.rename.is_none());
    }

    #[test]
    fn test_cancel_rename_keeps_old_name() {
        let mut state = AppState::new();
        state.loading = None;
        state.chats.push(Chat::new("1", "Old name"));

        drive(&mut state, Message::StartRename);
        type_text(&mut state, " scribbles");
        drive(&mut state, Message::Key(InputKey::Esc));

        assert_eq!(state.chats[0].name, "Old name");
        assert_eq!(state.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_delete_under_cursor_via_keys_persists() {
        let mut state = AppState::new();
        state.loading = None;
        state.chats.push(Chat::new("1", "a"));
        state.select_chat("1");

        let actions = drive(&mut state, Message::Key(InputKey::Char('d')));
        assert!(state.chats.is_empty());
        assert_eq!(state.active_chat_id, None);
        assert!(matches!(actions[..], [UpdateAction::PersistChats]));
    }

    #[test]
    fn test_quit_message_sets_quitting_phase() {
        let mut state = AppState::new();
        drive(&mut state, Message::Quit);
        assert!(state.should_quit());
    }
}
