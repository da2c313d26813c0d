//! Application state (Model in TEA pattern)

use rand::Rng;

use crate::config::Settings;
use solomon_core::Chat;

/// Current UI mode. Determines which pane owns keyboard input.
///
/// `Compose` and `Rename` are the "text input focused" modes: while one of
/// them is active, Space types a literal space instead of toggling the
/// persona flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Browsing: list navigation, global shortcuts
    #[default]
    Normal,

    /// Compose input focused
    Compose,

    /// Chat name edit focused
    Rename,
}

/// Current application phase (used for app-level quitting state)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The in-progress, not-yet-submitted compose-box message.
#[derive(Debug, Clone, Default)]
pub struct DraftState {
    /// Draft text, edited in place.
    pub text: String,

    /// Pending persona flag: the next submitted message is attributed to
    /// the future self when `true`. Survives submission.
    pub as_future_self: bool,
}

/// In-flight rename of one chat's display name.
#[derive(Debug, Clone)]
pub struct RenameState {
    /// Id of the chat being renamed (it may be deleted mid-edit).
    pub chat_id: String,

    /// Edit buffer, seeded with the current name.
    pub buffer: String,
}

/// Transient status-line message, auto-expired after a few seconds.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
    /// Ticks since the message was set (50ms per tick).
    age: u64,
}

/// Ticks before a status message disappears (~4s at the 50ms poll rate).
const STATUS_TTL_TICKS: u64 = 80;

impl StatusLine {
    fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            age: 0,
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            age: 0,
        }
    }
}

/// Loading messages cycled while the chat collection loads
const LOADING_MESSAGES: &[&str] = &[
    "Opening the journal...",
    "Dusting off old memories...",
    "Locating your future self...",
    "Rereading past entries...",
    "Warming up the time machine...",
    "Listening for echoes...",
    "Untangling the timeline...",
    "Fetching eighty-five years of perspective...",
];

/// Loading state for the startup chats fetch
#[derive(Debug, Clone)]
pub struct LoadingState {
    /// Current loading message
    pub message: String,
    /// Animation frame counter for the spinner
    pub animation_frame: u64,
    /// Current index into LOADING_MESSAGES for cycling
    message_index: usize,
}

impl LoadingState {
    pub fn new() -> Self {
        // Start at a random index for variety
        let start_index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());

        Self {
            message: LOADING_MESSAGES[start_index].to_string(),
            animation_frame: 0,
            message_index: start_index,
        }
    }

    /// Tick the animation frame and cycle the message every ~15 ticks.
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.animation_frame % 15 == 0 {
            self.message_index = (self.message_index + 1) % LOADING_MESSAGES.len();
            self.message = LOADING_MESSAGES[self.message_index].to_string();
        }
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// The chat collection. Owned exclusively here; persisted wholesale.
    pub chats: Vec<Chat>,

    /// Id of the active chat, if any. Invariant: always refers to an
    /// existing entry in `chats`.
    pub active_chat_id: Option<String>,

    /// List-pane cursor (index into `chats`). Clamped on every mutation.
    pub list_cursor: usize,

    /// Compose draft (text + pending persona flag)
    pub draft: DraftState,

    /// In-flight rename, when `ui_mode == Rename`
    pub rename: Option<RenameState>,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Dark mode flag. Defaults to `false` (light) until the settings
    /// document loads; the absent-document default is also `false`.
    pub dark_mode: bool,

    /// Single-pane layout flag (terminal narrower than the configured
    /// compact threshold)
    pub compact: bool,

    /// Thread scroll offset in lines, measured from the bottom (0 = pinned
    /// to the newest message)
    pub thread_scroll: u16,

    /// Loading state while the startup chats fetch is in flight
    pub loading: Option<LoadingState>,

    /// A persona reply request is in flight; suppresses concurrent requests
    pub pending_reply: bool,

    /// Transient status-line message
    pub status: Option<StatusLine>,

    /// Current application phase
    pub phase: AppPhase,

    /// Application settings from the config file
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new AppState with default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a new AppState with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            chats: Vec::new(),
            active_chat_id: None,
            list_cursor: 0,
            draft: DraftState::default(),
            rename: None,
            ui_mode: UiMode::Normal,
            dark_mode: false,
            compact: false,
            thread_scroll: 0,
            loading: Some(LoadingState::new()),
            pending_reply: false,
            status: None,
            phase: AppPhase::Running,
            settings,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Chat Selection
    // ─────────────────────────────────────────────────────────

    /// The active chat, if one is selected.
    pub fn active_chat(&self) -> Option<&Chat> {
        let id = self.active_chat_id.as_deref()?;
        self.chats.iter().find(|c| c.id == id)
    }

    /// Mutable access to the active chat.
    pub fn active_chat_mut(&mut self) -> Option<&mut Chat> {
        let id = self.active_chat_id.clone()?;
        self.chats.iter_mut().find(|c| c.id == id)
    }

    /// The chat the list cursor points at.
    pub fn chat_under_cursor(&self) -> Option<&Chat> {
        self.chats.get(self.list_cursor)
    }

    /// Select a chat by id. Selecting a nonexistent id is a no-op, so a
    /// deleted chat can never become active again.
    pub fn select_chat(&mut self, id: &str) {
        if let Some(index) = self.chats.iter().position(|c| c.id == id) {
            self.active_chat_id = Some(id.to_string());
            self.list_cursor = index;
            self.thread_scroll = 0;
        }
    }

    /// Clear the active selection without touching any data.
    pub fn back_to_list(&mut self) {
        self.active_chat_id = None;
        self.thread_scroll = 0;
    }

    /// Clamp the list cursor after the collection changed.
    pub fn clamp_cursor(&mut self) {
        if self.chats.is_empty() {
            self.list_cursor = 0;
        } else if self.list_cursor >= self.chats.len() {
            self.list_cursor = self.chats.len() - 1;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Status Line
    // ─────────────────────────────────────────────────────────

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine::info(text));
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusLine::error(text));
    }

    /// Age the status message on each tick; expire it after its TTL.
    pub fn tick_status(&mut self) {
        if let Some(status) = &mut self.status {
            status.age += 1;
            if status.age >= STATUS_TTL_TICKS {
                self.status = None;
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Recompute the compact-layout flag from the terminal width.
    pub fn apply_resize(&mut self, width: u16) {
        self.compact = width < self.settings.ui.compact_width;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
