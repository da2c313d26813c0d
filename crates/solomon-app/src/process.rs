//! Message processing: the TEA loop body and action dispatch
//!
//! `process_message` runs a message (and any follow-ups) through the pure
//! update function, then executes the side effects the handlers signalled:
//! enqueueing persistence commands and spawning persona reply requests.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::persist::PersistCommand;
use crate::state::AppState;
use solomon_core::prelude::*;
use solomon_remote::PersonaClient;

/// Process a message through the TEA update function
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    persist_tx: &mpsc::Sender<PersistCommand>,
    persona: &Arc<PersonaClient>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, state, msg_tx, persist_tx, persona);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

fn handle_action(
    action: UpdateAction,
    state: &AppState,
    msg_tx: &mpsc::Sender<Message>,
    persist_tx: &mpsc::Sender<PersistCommand>,
    persona: &Arc<PersonaClient>,
) {
    match action {
        UpdateAction::PersistChats => {
            // Handlers only signal intent; the snapshot is taken here so the
            // pure update path never clones the collection.
            let snapshot = state.chats.clone();
            if persist_tx.try_send(PersistCommand::Chats(snapshot)).is_err() {
                warn!("Persistence queue unavailable; dropping chats snapshot");
            }
        }

        UpdateAction::PersistDarkMode => {
            let command = PersistCommand::DarkMode(state.dark_mode);
            if persist_tx.try_send(command).is_err() {
                warn!("Persistence queue unavailable; dropping settings write");
            }
        }

        UpdateAction::RequestReply { chat_id, transcript } => {
            let persona = Arc::clone(persona);
            let tx = msg_tx.clone();
            tokio::spawn(async move {
                let message = match persona.compose_reply(&transcript).await {
                    Ok(text) => Message::ReplyReceived { chat_id, text },
                    Err(e) => Message::ReplyFailed {
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(message).await;
            });
        }
    }
}
