//! Camera module - world/screen transform with clamped pan and anchored zoom
//!
//! World space is measured in cells, screen space in pixels. The camera keeps
//! a top-left pan offset (in pixels of the zoomed world) and a zoom level
//! (`cell_size`, pixels per cell).
//!
//! Invariants held after every public mutation:
//! - `min_cell_size <= cell_size <= max_cell_size`
//! - `0 <= pan_x <= max(0, world_width * cell_size - view_width)`, same for y
//! - `world_* * max_cell_size` fits in `i32` (unless the view alone forces a
//!   larger minimum), so every world pixel has an `i32` coordinate

use crate::grid::CellWindow;
use crate::types::{DEFAULT_CELL_SIZE, MAX_CELL_SIZE, ZOOM_STEP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfig {
    /// Initial zoom (clamped into the valid range on construction)
    pub cell_size: i32,
    pub max_cell_size: i32,
    /// Change in `cell_size` per `zoom_in`/`zoom_out`
    pub zoom_step: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            max_cell_size: MAX_CELL_SIZE,
            zoom_step: ZOOM_STEP,
        }
    }
}

/// Screen rectangle of one cell, `side` pixels square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub side: i32,
}

impl CellRect {
    /// True when any pixel of the rectangle lies in `[0, w) x [0, h)`.
    pub fn intersects_view(&self, w: i32, h: i32) -> bool {
        self.x < w && self.y < h && self.x + self.side > 0 && self.y + self.side > 0
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    world_width: i32,
    world_height: i32,
    view_width: i32,
    view_height: i32,
    cell_size: i32,
    min_cell_size: i32,
    max_cell_size: i32,
    /// Upper bound as configured, before raising it to `min_cell_size`
    configured_max_cell_size: i32,
    zoom_step: i32,
    pan_x: i32,
    pan_y: i32,
}

#[inline]
fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1).div_euclid(b)
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl Camera {
    /// `world_*` in cells, `view_*` in pixels.
    ///
    /// # Panics
    ///
    /// Panics if the world is empty or the view has a negative extent.
    pub fn new(
        world_width: i32,
        world_height: i32,
        view_width: i32,
        view_height: i32,
        config: CameraConfig,
    ) -> Self {
        assert!(world_width > 0 && world_height > 0, "world must be non-empty");
        assert!(view_width >= 0 && view_height >= 0, "view extent must be non-negative");

        let mut camera = Self {
            world_width,
            world_height,
            view_width,
            view_height,
            cell_size: config.cell_size,
            min_cell_size: 1,
            max_cell_size: config.max_cell_size,
            configured_max_cell_size: config.max_cell_size,
            zoom_step: config.zoom_step.max(1),
            pan_x: 0,
            pan_y: 0,
        };
        camera.recompute_zoom_bounds();
        camera.cell_size = config.cell_size.clamp(camera.min_cell_size, camera.max_cell_size);
        camera.clamp_pan();
        camera
    }

    /// Smallest zoom at which the world still covers the whole viewport.
    fn recompute_zoom_bounds(&mut self) {
        let min_x = ceil_div(self.view_width as i64, self.world_width as i64);
        let min_y = ceil_div(self.view_height as i64, self.world_height as i64);
        self.min_cell_size = saturate(min_x.max(min_y).max(1));

        // Keep the zoomed world addressable in i32 pixels.
        let widest = self.world_width.max(self.world_height);
        let pixel_cap = (i32::MAX / widest).max(1);
        self.max_cell_size = self
            .configured_max_cell_size
            .min(pixel_cap)
            .max(self.min_cell_size);
    }

    pub fn world_size(&self) -> (i32, i32) {
        (self.world_width, self.world_height)
    }

    pub fn view_size(&self) -> (i32, i32) {
        (self.view_width, self.view_height)
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn min_cell_size(&self) -> i32 {
        self.min_cell_size
    }

    pub fn max_cell_size(&self) -> i32 {
        self.max_cell_size
    }

    pub fn pan_offset(&self) -> (i32, i32) {
        (self.pan_x, self.pan_y)
    }

    pub fn view_center(&self) -> (i32, i32) {
        (self.view_width / 2, self.view_height / 2)
    }

    /// Largest legal pan per axis at the current zoom.
    pub fn max_pan(&self) -> (i32, i32) {
        let cell = self.cell_size as i64;
        let max_x = (self.world_width as i64 * cell - self.view_width as i64).max(0);
        let max_y = (self.world_height as i64 * cell - self.view_height as i64).max(0);
        (saturate(max_x), saturate(max_y))
    }

    fn clamp_pan(&mut self) {
        let (max_x, max_y) = self.max_pan();
        self.pan_x = self.pan_x.clamp(0, max_x);
        self.pan_y = self.pan_y.clamp(0, max_y);
    }

    /// Scroll by a pixel delta, never past the world edges.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.pan_x = self.pan_x.saturating_add(dx);
        self.pan_y = self.pan_y.saturating_add(dy);
        self.clamp_pan();
    }

    /// Change zoom while keeping the world point under the anchor pixel fixed.
    ///
    /// `pan' = floor((pan + anchor) * new / old) - anchor`, then clamped.
    /// Returns whether the zoom level changed.
    pub fn zoom_to(&mut self, new_cell_size: i32, anchor_x: i32, anchor_y: i32) -> bool {
        let old = self.cell_size as i64;
        let new = new_cell_size.clamp(self.min_cell_size, self.max_cell_size);
        if new as i64 == old {
            return false;
        }

        let rescale = |pan: i32, anchor: i32| -> i32 {
            let world_scaled = (pan as i64 + anchor as i64) * new as i64;
            saturate(world_scaled.div_euclid(old) - anchor as i64)
        };

        self.pan_x = rescale(self.pan_x, anchor_x);
        self.pan_y = rescale(self.pan_y, anchor_y);
        self.cell_size = new;
        self.clamp_pan();
        true
    }

    pub fn zoom_in(&mut self, anchor_x: i32, anchor_y: i32) -> bool {
        self.zoom_to(self.cell_size + self.zoom_step, anchor_x, anchor_y)
    }

    pub fn zoom_out(&mut self, anchor_x: i32, anchor_y: i32) -> bool {
        self.zoom_to(self.cell_size - self.zoom_step, anchor_x, anchor_y)
    }

    /// Resize the viewport (e.g. terminal resize). Zoom and pan are re-clamped.
    pub fn set_view_size(&mut self, view_width: i32, view_height: i32) {
        self.view_width = view_width.max(0);
        self.view_height = view_height.max(0);
        self.recompute_zoom_bounds();
        self.cell_size = self.cell_size.clamp(self.min_cell_size, self.max_cell_size);
        self.clamp_pan();
    }

    /// Top-left pixel of cell (col, row).
    pub fn world_to_screen(&self, col: i32, row: i32) -> (i32, i32) {
        let cell = self.cell_size as i64;
        (
            saturate(col as i64 * cell - self.pan_x as i64),
            saturate(row as i64 * cell - self.pan_y as i64),
        )
    }

    /// Cell containing pixel (x, y). May lie outside the grid.
    pub fn screen_to_world(&self, pixel_x: i32, pixel_y: i32) -> (i32, i32) {
        let cell = self.cell_size as i64;
        (
            saturate((pixel_x as i64 + self.pan_x as i64).div_euclid(cell)),
            saturate((pixel_y as i64 + self.pan_y as i64).div_euclid(cell)),
        )
    }

    /// Drawable rectangle for a cell, leaving a 1px gutter when zoomed in.
    pub fn cell_rect(&self, col: i32, row: i32) -> CellRect {
        let (x, y) = self.world_to_screen(col, row);
        CellRect {
            x,
            y,
            side: (self.cell_size - 1).max(1),
        }
    }

    /// Cells intersecting the viewport, clipped to the world.
    pub fn visible_window(&self) -> CellWindow {
        let cell = self.cell_size as i64;
        let span = |pan: i32, view: i32, world: i32| -> (i32, i32) {
            let world = world as i64;
            let start = (pan as i64).div_euclid(cell).clamp(0, world);
            let end = ceil_div(pan as i64 + view as i64, cell).clamp(0, world);
            (start as i32, end as i32)
        };
        let (row_start, row_end) = span(self.pan_y, self.view_height, self.world_height);
        let (col_start, col_end) = span(self.pan_x, self.view_width, self.world_width);
        CellWindow {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }
}
