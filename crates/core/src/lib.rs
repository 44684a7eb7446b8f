//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the automaton, the camera transform and the drawing
//! interaction. It has **no dependencies** on terminals, files or clocks:
//!
//! - **Deterministic**: a seed fully determines `Randomize`
//! - **Testable**: generations can be stepped without any renderer
//! - **Portable**: the same session drives the terminal frontend or a test harness
//!
//! # Module Structure
//!
//! - [`grid`]: dense `rows x cols` board, neighbor counting, Conway stepping
//! - [`camera`]: world/screen transform, clamped pan, anchored zoom
//! - [`line`]: Bresenham rasterization
//! - [`brush`]: pointer-drag painting built on [`line`]
//! - [`patterns`]: named seed patterns
//! - [`rng`]: seeded LCG
//! - [`session`]: grid + camera + brush + run/step flags
//!
//! # Example
//!
//! ```
//! use tui_life_core::{patterns, Session, SessionConfig};
//! use tui_life_core::types::{GridPos, SessionAction};
//!
//! let mut session = Session::new(SessionConfig::default());
//! session.grid_mut().stamp(&patterns::BLOCK, GridPos::new(10, 10));
//!
//! session.apply_action(SessionAction::Step);
//! assert!(session.tick());
//!
//! // A block is a still life.
//! assert_eq!(session.grid().population(), 4);
//! ```

pub mod brush;
pub mod camera;
pub mod grid;
pub mod line;
pub mod patterns;
pub mod rng;
pub mod session;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use brush::Brush;
pub use camera::{Camera, CameraConfig, CellRect};
pub use grid::{conway_rule, CellWindow, Grid};
pub use line::{line_points, LinePoints};
pub use patterns::Pattern;
pub use rng::SimpleRng;
pub use session::{Session, SessionConfig, SessionStatus};
