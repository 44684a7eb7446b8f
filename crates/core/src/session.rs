//! Session - one running simulation: grid, camera, brush and run flags.
//!
//! The host loop owns a single `Session` and, once per iteration:
//!
//! 1. feeds input through [`Session::apply_action`] / [`Session::handle_pointer`]
//! 2. calls [`Session::tick`], which advances at most one generation
//! 3. renders from [`Session::visible_cells`] and [`Session::status`]
//!
//! Nothing here performs I/O, so a test can drive generations directly.

use tracing::{debug, info};

use crate::brush::Brush;
use crate::camera::{Camera, CameraConfig, CellRect};
use crate::grid::Grid;
use crate::patterns::{self, Pattern};
use crate::rng::SimpleRng;
use crate::types::{
    Boundary, GridPos, PointerEvent, SessionAction, DEFAULT_COLS, DEFAULT_DENSITY, DEFAULT_ROWS,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    pub boundary: Boundary,
    /// Viewport extent in pixels
    pub view_width: i32,
    pub view_height: i32,
    pub camera: CameraConfig,
    /// Alive probability used by `Randomize`
    pub density: f64,
    pub seed: u32,
    /// Pattern stamped by `StampPattern` until `CyclePattern` moves on
    pub pattern: &'static Pattern,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            boundary: Boundary::Fixed,
            view_width: 800,
            view_height: 600,
            camera: CameraConfig::default(),
            density: DEFAULT_DENSITY,
            seed: 1,
            pattern: &patterns::GLIDER,
        }
    }
}

/// Snapshot of the numbers a HUD shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStatus {
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub cell_size: i32,
    pub pan: (i32, i32),
    pub pattern: &'static str,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    camera: Camera,
    brush: Brush,
    rng: SimpleRng,
    density: f64,
    running: bool,
    step_pending: bool,
    pattern: &'static Pattern,
    /// One-line notice for the HUD, dropped on the next input
    message: Option<String>,
}

impl Session {
    /// Fresh all-dead session.
    ///
    /// # Panics
    ///
    /// Panics on zero grid dimensions or a density outside `[0, 1]`.
    pub fn new(config: SessionConfig) -> Self {
        let grid = Grid::with_boundary(config.rows, config.cols, config.boundary);
        Self::with_grid(grid, config)
    }

    /// Session around an existing grid; `config.rows`/`cols` are ignored.
    pub fn with_grid(grid: Grid, config: SessionConfig) -> Self {
        assert!(
            (0.0..=1.0).contains(&config.density),
            "density must be within [0, 1], got {}",
            config.density
        );
        let camera = Camera::new(
            grid.cols() as i32,
            grid.rows() as i32,
            config.view_width,
            config.view_height,
            config.camera,
        );
        Self {
            grid,
            camera,
            brush: Brush::new(),
            rng: SimpleRng::new(config.seed),
            density: config.density,
            running: false,
            step_pending: false,
            pattern: config.pattern,
            message: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn step_pending(&self) -> bool {
        self.step_pending
    }

    pub fn pattern(&self) -> &'static Pattern {
        self.pattern
    }

    /// Show `message` in the HUD until the next action or pointer press.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn apply_action(&mut self, action: SessionAction) {
        debug!(action = action.as_str(), "apply action");
        self.message = None;
        match action {
            SessionAction::ToggleRun => self.set_running(!self.running),
            SessionAction::Start => self.set_running(true),
            SessionAction::Stop => self.set_running(false),
            SessionAction::Step => self.step_pending = true,
            SessionAction::Randomize => {
                self.grid.randomize(self.density, &mut self.rng);
                info!(
                    density = self.density,
                    population = self.grid.population(),
                    "grid randomized"
                );
            }
            SessionAction::Clear => {
                self.grid.reset();
                info!("grid cleared");
            }
            SessionAction::Pan(direction) => {
                let (ux, uy) = direction.unit();
                let step = self.camera.cell_size();
                self.camera.pan(ux * step, uy * step);
            }
            SessionAction::ZoomIn => {
                let (cx, cy) = self.camera.view_center();
                self.zoom(true, cx, cy);
            }
            SessionAction::ZoomOut => {
                let (cx, cy) = self.camera.view_center();
                self.zoom(false, cx, cy);
            }
            SessionAction::StampGlider => {
                self.stamp_at_center(&patterns::GLIDER);
            }
            SessionAction::CyclePattern => {
                let current = patterns::PATTERNS
                    .iter()
                    .position(|p| p.name == self.pattern.name)
                    .unwrap_or(0);
                self.pattern = &patterns::PATTERNS[(current + 1) % patterns::PATTERNS.len()];
                debug!(pattern = self.pattern.name, "pattern selected");
            }
            SessionAction::StampPattern => {
                let pattern = self.pattern;
                self.stamp_at_center(pattern);
            }
        }
    }

    fn set_running(&mut self, running: bool) {
        if self.running != running {
            info!(running, generation = self.grid.generation(), "run state changed");
        }
        self.running = running;
    }

    fn zoom(&mut self, zoom_in: bool, anchor_x: i32, anchor_y: i32) {
        let changed = if zoom_in {
            self.camera.zoom_in(anchor_x, anchor_y)
        } else {
            self.camera.zoom_out(anchor_x, anchor_y)
        };
        if changed {
            debug!(
                cell_size = self.camera.cell_size(),
                anchor_x, anchor_y, "zoom changed"
            );
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => {
                self.message = None;
                self.brush.press(&mut self.grid, &self.camera, x, y);
            }
            PointerEvent::Drag { x, y } => {
                self.brush.drag(&mut self.grid, &self.camera, x, y);
            }
            PointerEvent::Up => self.brush.release(),
            PointerEvent::Wheel { delta, x, y } => {
                if delta != 0 {
                    self.zoom(delta > 0, x, y);
                }
            }
        }
    }

    /// Advance at most one generation if running or a step was requested.
    ///
    /// Returns whether a generation was computed.
    pub fn tick(&mut self) -> bool {
        if !(self.running || self.step_pending) {
            return false;
        }
        self.step_pending = false;
        self.grid.advance();
        true
    }

    /// Center `pattern` on the cell under the viewport center.
    pub fn stamp_at_center(&mut self, pattern: &Pattern) {
        let (cx, cy) = self.camera.view_center();
        let (col, row) = self.camera.screen_to_world(cx, cy);
        let (h, w) = pattern.extent();
        let origin = GridPos::new(row - h / 2, col - w / 2);
        self.grid.stamp(pattern, origin);
        debug!(pattern = pattern.name, row = origin.row, col = origin.col, "pattern stamped");
    }

    /// Screen rectangles of live cells inside the camera window.
    pub fn visible_cells(&self) -> impl Iterator<Item = CellRect> + '_ {
        let camera = &self.camera;
        self.grid
            .live_cells_in(camera.visible_window())
            .map(move |pos| camera.cell_rect(pos.col, pos.row))
    }

    pub fn resize_view(&mut self, view_width: i32, view_height: i32) {
        self.camera.set_view_size(view_width, view_height);
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            generation: self.grid.generation(),
            population: self.grid.population(),
            running: self.running,
            cell_size: self.camera.cell_size(),
            pan: self.camera.pan_offset(),
            pattern: self.pattern.name,
        }
    }
}
