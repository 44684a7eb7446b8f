//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, level files).
//!
//! # Coordinates
//!
//! Two coordinate spaces are in play:
//!
//! - **World**: grid cells, addressed as `(row, col)` or `(col, row)` when a
//!   function mirrors screen order. Signed so that pointer mappings which fall
//!   outside the grid are representable (and then ignored).
//! - **Screen**: pixels of the viewport. In the terminal frontend one pixel is
//!   one character cell.
//!
//! # Camera Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CELL_SIZE` | 20 | Initial zoom in pixels per cell |
//! | `MAX_CELL_SIZE` | 200 | Upper zoom bound |
//! | `ZOOM_STEP` | 2 | Pixels added/removed per wheel notch |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{CellState, SessionAction};
//!
//! assert_eq!(CellState::Dead.flipped(), CellState::Alive);
//! assert_eq!(CellState::Alive.as_u8(), 1);
//!
//! assert_eq!(SessionAction::ToggleRun.as_str(), "toggleRun");
//! ```

/// Default grid height in cells
pub const DEFAULT_ROWS: usize = 100;

/// Default grid width in cells
pub const DEFAULT_COLS: usize = 100;

/// Initial zoom level (pixels per cell)
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// Largest zoom level (pixels per cell)
pub const MAX_CELL_SIZE: i32 = 200;

/// Zoom increment per wheel notch or zoom key press
pub const ZOOM_STEP: i32 = 2;

/// Probability used by `Randomize` when nothing else is configured
pub const DEFAULT_DENSITY: f64 = 0.2;

/// Simulation tick interval in milliseconds for continuous run mode
pub const DEFAULT_TICK_MS: u32 = 100;

/// Liveness of a single automaton cell.
///
/// Persisted as `0` (dead) and `1` (alive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }

    /// The opposite state.
    pub fn flipped(self) -> Self {
        match self {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            CellState::Dead => 0,
            CellState::Alive => 1,
        }
    }
}

/// A cell address in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// How neighbor counting treats cells beyond the grid edge.
///
/// - **Fixed**: off-grid neighbors are dead (the classic bounded board)
/// - **Toroidal**: the grid wraps on both axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Boundary {
    #[default]
    Fixed,
    Toroidal,
}

/// Camera pan direction. Each press moves the view by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

impl PanDirection {
    /// Unit vector in screen space (x right, y down).
    pub fn unit(self) -> (i32, i32) {
        match self {
            PanDirection::Left => (-1, 0),
            PanDirection::Right => (1, 0),
            PanDirection::Up => (0, -1),
            PanDirection::Down => (0, 1),
        }
    }
}

/// Discrete commands that change session state.
///
/// Produced by the key map and applied by `Session::apply_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Flip between running and paused
    ToggleRun,
    /// Start continuous stepping
    Start,
    /// Pause continuous stepping
    Stop,
    /// Advance exactly one generation on the next tick
    Step,
    /// Refill the grid at the configured density
    Randomize,
    /// Kill every cell
    Clear,
    /// Move the camera by one cell
    Pan(PanDirection),
    /// Zoom in around the viewport center
    ZoomIn,
    /// Zoom out around the viewport center
    ZoomOut,
    /// Drop a glider under the viewport center
    StampGlider,
    /// Select the next pattern of the library
    CyclePattern,
    /// Drop the selected pattern under the viewport center
    StampPattern,
}

impl SessionAction {
    /// camelCase name, used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::ToggleRun => "toggleRun",
            SessionAction::Start => "start",
            SessionAction::Stop => "stop",
            SessionAction::Step => "step",
            SessionAction::Randomize => "randomize",
            SessionAction::Clear => "clear",
            SessionAction::Pan(PanDirection::Left) => "panLeft",
            SessionAction::Pan(PanDirection::Right) => "panRight",
            SessionAction::Pan(PanDirection::Up) => "panUp",
            SessionAction::Pan(PanDirection::Down) => "panDown",
            SessionAction::ZoomIn => "zoomIn",
            SessionAction::ZoomOut => "zoomOut",
            SessionAction::StampGlider => "stampGlider",
            SessionAction::CyclePattern => "cyclePattern",
            SessionAction::StampPattern => "stampPattern",
        }
    }
}

/// Pointer input in screen pixels, delivered in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Drag { x: i32, y: i32 },
    Up,
    /// Positive `delta` zooms in, negative zooms out.
    Wheel { delta: i32, x: i32, y: i32 },
}
