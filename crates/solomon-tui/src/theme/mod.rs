//! Theme: palettes and semantic style builders
//!
//! Unlike a fixed theme, Solomon's palette is selected at render time from
//! the persisted dark-mode flag, so every constant lives on a [`Palette`]
//! value instead of a module-level const.

pub mod palette;
pub mod styles;

pub use palette::Palette;
