//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use solomon_core::Chat;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (status expiry, loading animation)
    Tick,

    /// Terminal was resized; drives the compact/two-pane layout decision
    Resized { width: u16, height: u16 },

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Chat List Intents
    // ─────────────────────────────────────────────────────────
    /// Create a new chat named after today's date and make it active
    CreateChat,

    /// Delete the chat with the given id
    DeleteChat { id: String },

    /// Make the chat with the given id active
    SelectChat { id: String },

    /// Return to the list without an active chat (compact layout only)
    BackToList,

    /// Move the list cursor up one entry
    ListUp,

    /// Move the list cursor down one entry
    ListDown,

    // ─────────────────────────────────────────────────────────
    // Rename Flow
    // ─────────────────────────────────────────────────────────
    /// Begin renaming the chat under the cursor
    StartRename,

    /// Character typed into the rename buffer
    RenameInput { c: char },

    /// Backspace in the rename buffer
    RenameBackspace,

    /// Commit the rename (trimmed-non-empty, otherwise a no-op)
    CommitRename,

    /// Abandon the rename, keeping the old name
    CancelRename,

    // ─────────────────────────────────────────────────────────
    // Compose Flow
    // ─────────────────────────────────────────────────────────
    /// Focus the compose input (requires an active chat)
    FocusCompose,

    /// Unfocus the compose input, back to browsing
    BlurCompose,

    /// Character typed into the compose draft
    ComposeInput { c: char },

    /// Backspace in the compose draft
    ComposeBackspace,

    /// Submit the draft as a message to the active chat
    SubmitMessage,

    /// Flip whether the draft is attributed to the future self
    TogglePersona,

    // ─────────────────────────────────────────────────────────
    // Thread View
    // ─────────────────────────────────────────────────────────
    /// Scroll the active thread up (towards older messages)
    ScrollUp,

    /// Scroll the active thread down (towards newest messages)
    ScrollDown,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    /// Flip dark mode; re-themes the UI and persists the settings record
    ToggleDarkMode,

    // ─────────────────────────────────────────────────────────
    // Persona Reply
    // ─────────────────────────────────────────────────────────
    /// Ask the future self to reply to the active chat's transcript
    RequestReply,

    /// A reply arrived for the chat with the given id
    ReplyReceived { chat_id: String, text: String },

    /// The reply request failed; surfaced in the status line
    ReplyFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Remote Results (startup load, persistence)
    // ─────────────────────────────────────────────────────────
    /// Initial chat collection finished loading
    ChatsLoaded { chats: Vec<Chat> },

    /// Initial dark-mode flag finished loading
    DarkModeLoaded { dark_mode: bool },

    /// A background persistence write failed (logged + status line)
    PersistFailed { error: String },
}
