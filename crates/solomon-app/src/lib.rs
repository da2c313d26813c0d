//! solomon-app - Application state and orchestration for Solomon
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`state::AppState`] model, the [`message::Message`] intent
//! enum, the pure [`handler::update`] function, and the side-effect layer
//! ([`process`], [`persist`]) that executes [`handler::UpdateAction`]s.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod persist;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use persist::PersistCommand;
pub use state::{AppPhase, AppState, UiMode};
