//! Terminal rendering module.
//!
//! Renders a session into a framebuffer of styled glyphs, then flushes it to
//! the terminal with crossterm. One glyph is one camera pixel.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so frames can be asserted on in tests
//! - Only emit the glyphs that changed since the last frame

pub mod fb;
pub mod life_view;
pub mod renderer;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use life_view::{LifeView, Viewport, HUD_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
