//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key and mouse events into
//! [`crate::types::SessionAction`] and [`crate::types::PointerEvent`]. The
//! session core never sees crossterm types.

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, should_save};
