//! Core domain types: chats, messages, settings, transcripts
//!
//! The serde forms match the remote document layout (camelCase fields),
//! so these types serialize directly into the documents the store holds.

use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// Immutable once appended to a chat; append order within a chat is the only
/// ordering guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message text. Non-empty after trimming -- enforced at the submit
    /// boundary, not here.
    pub content: String,

    /// Persona flag: `true` when the message is attributed to the
    /// 85-year-old future self, `false` for the current user.
    pub is_old_self: bool,

    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(content: impl Into<String>, is_old_self: bool, timestamp: i64) -> Self {
        Self {
            content: content.into(),
            is_old_self,
            timestamp,
        }
    }

    /// The transcript role this message carries.
    pub fn role(&self) -> Role {
        if self.is_old_self {
            Role::FutureSelf
        } else {
            Role::User
        }
    }
}

/// A chat thread: a time-derived id, a user-editable name, and its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Unique within the collection; derived from creation time
    /// (epoch milliseconds rendered as a decimal string).
    pub id: String,

    /// Display name. Defaults to the long-form creation date; renamable.
    pub name: String,

    /// Ordered message sequence (append order).
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Chat {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message. Messages are never edited or reordered afterwards.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Role-tagged transcript of this chat, in message order.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.messages
            .iter()
            .map(|m| TranscriptEntry {
                role: m.role(),
                content: m.content.clone(),
            })
            .collect()
    }
}

/// Speaker role for a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    FutureSelf,
}

impl Role {
    /// Label used when serializing a transcript into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::FutureSelf => "85-year-old self",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One role-tagged line of conversation handed to the persona reply service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
}

impl TranscriptEntry {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Process-wide user settings record.
///
/// Persisted wholesale as the `settings` document. Dark mode defaults to
/// `false` everywhere: initial state, absent document, and decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(default)]
    pub dark_mode: bool,
}
