//! solomon-tui - Terminal UI for Solomon
//!
//! This crate provides the ratatui-based terminal interface: terminal
//! setup, event polling, the two-pane layout, the widget set, and the main
//! runner that drives the TEA loop in solomon-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
