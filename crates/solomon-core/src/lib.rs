//! # solomon-core - Core Domain Types
//!
//! Foundation crate for Solomon. Provides the chat domain types, error
//! handling, time helpers, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Chat`] - A named thread of messages, identified by a time-derived id
//! - [`ChatMessage`] - A single immutable message with a persona flag
//! - [`UserSettings`] - The process-wide settings record (dark mode)
//! - [`Role`], [`TranscriptEntry`] - Role-tagged transcript entries for the
//!   persona reply service
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use solomon_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod time;
pub mod types;

/// Prelude for common imports used throughout all Solomon crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use time::{epoch_millis, format_long_date, format_timestamp_label, today_long_date};
pub use types::{Chat, ChatMessage, Role, TranscriptEntry, UserSettings};
