//! Chat collection mutation handlers
//!
//! Each handler is a pure transform of `AppState`; persistence happens via
//! the returned `UpdateAction`, never directly.

use super::{UpdateAction, UpdateResult};
use crate::state::{AppState, UiMode};
use solomon_core::prelude::*;
use solomon_core::{epoch_millis, today_long_date, Chat, ChatMessage};

/// Derive a unique chat id from the creation time.
///
/// Ids are epoch milliseconds rendered as decimal strings. Creating two
/// chats within the same millisecond would collide, so the value is bumped
/// until it is unique within the collection.
pub(crate) fn next_chat_id(chats: &[Chat], now_millis: i64) -> String {
    let mut candidate = now_millis;
    while chats.iter().any(|c| c.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

/// Create a new chat named after today's date and make it active.
pub(crate) fn handle_create_chat(state: &mut AppState) -> UpdateResult {
    let id = next_chat_id(&state.chats, epoch_millis());
    let chat = Chat::new(id.clone(), today_long_date());
    debug!(id = %chat.id, name = %chat.name, "Creating chat");

    state.chats.push(chat);
    state.list_cursor = state.chats.len() - 1;
    state.active_chat_id = Some(id);
    state.thread_scroll = 0;

    UpdateResult::action(UpdateAction::PersistChats)
}

/// Delete the chat with the given id. Deleting the active chat clears the
/// active selection; deleting an unknown id is a no-op.
pub(crate) fn handle_delete_chat(state: &mut AppState, id: &str) -> UpdateResult {
    let before = state.chats.len();
    state.chats.retain(|c| c.id != id);
    if state.chats.len() == before {
        return UpdateResult::none();
    }

    debug!(%id, "Deleted chat");
    if state.active_chat_id.as_deref() == Some(id) {
        state.active_chat_id = None;
    }
    // A rename in flight for the deleted chat has nothing left to rename.
    if state.rename.as_ref().is_some_and(|r| r.chat_id == id) {
        state.rename = None;
        state.ui_mode = UiMode::Normal;
    }
    state.clamp_cursor();

    UpdateResult::action(UpdateAction::PersistChats)
}

/// Commit an in-flight rename. A whitespace-only buffer leaves the name
/// unchanged; either way the edit mode ends.
pub(crate) fn handle_commit_rename(state: &mut AppState) -> UpdateResult {
    let Some(rename) = state.rename.take() else {
        state.ui_mode = UiMode::Normal;
        return UpdateResult::none();
    };
    state.ui_mode = UiMode::Normal;

    let new_name = rename.buffer.trim();
    if new_name.is_empty() {
        return UpdateResult::none();
    }

    let Some(chat) = state.chats.iter_mut().find(|c| c.id == rename.chat_id) else {
        // Deleted while the edit was open.
        return UpdateResult::none();
    };
    if chat.name == new_name {
        return UpdateResult::none();
    }

    chat.name = new_name.to_string();
    UpdateResult::action(UpdateAction::PersistChats)
}

/// Submit the compose draft to the active chat.
///
/// Requires a trimmed-non-empty draft and an active chat; otherwise a
/// silent no-op. The draft text is cleared, the persona flag survives.
pub(crate) fn handle_submit_message(state: &mut AppState) -> UpdateResult {
    let text = state.draft.text.trim().to_string();
    if text.is_empty() {
        return UpdateResult::none();
    }
    let as_future_self = state.draft.as_future_self;
    let Some(chat) = state.active_chat_mut() else {
        return UpdateResult::none();
    };

    chat.push_message(ChatMessage::new(text, as_future_self, epoch_millis()));
    state.draft.text.clear();
    state.thread_scroll = 0;

    UpdateResult::action(UpdateAction::PersistChats)
}

/// Append a persona reply to the chat it was requested for.
///
/// The chat may have been deleted while the request was in flight; the
/// reply is dropped in that case.
pub(crate) fn handle_reply_received(
    state: &mut AppState,
    chat_id: &str,
    text: String,
) -> UpdateResult {
    state.pending_reply = false;

    let Some(chat) = state.chats.iter_mut().find(|c| c.id == chat_id) else {
        warn!(%chat_id, "Dropping reply for deleted chat");
        return UpdateResult::none();
    };

    chat.push_message(ChatMessage::new(text, true, epoch_millis()));
    if state.active_chat_id.as_deref() == Some(chat_id) {
        state.thread_scroll = 0;
    }

    UpdateResult::action(UpdateAction::PersistChats)
}
