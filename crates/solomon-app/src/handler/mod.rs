//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `chats`: Chat collection mutation handlers

pub(crate) mod chats;
pub(crate) mod keys;
pub(crate) mod update;

use crate::message::Message;
use solomon_core::TranscriptEntry;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
///
/// Handlers signal intent only; `process` hydrates snapshots from the state
/// before dispatching, so the pure update path never clones the collection.
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Enqueue a write of the full chat collection
    PersistChats,

    /// Enqueue a write of the settings record
    PersistDarkMode,

    /// Ask the persona reply service for a completion of this transcript
    RequestReply {
        chat_id: String,
        transcript: Vec<TranscriptEntry>,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
