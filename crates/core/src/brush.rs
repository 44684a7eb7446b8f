//! Brush - turns pointer drag gestures into cell edits.
//!
//! A stroke captures its draw value once, on press: the opposite of the cell
//! under the pointer. Every cell touched for the rest of the gesture is set to
//! that value, so a drag either paints or erases, never both. Consecutive
//! samples are joined with a Bresenham line so fast motion leaves no gaps.

use crate::camera::Camera;
use crate::grid::Grid;
use crate::line::line_points;
use crate::types::{CellState, GridPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stroke {
    last: GridPos,
    value: CellState,
}

#[derive(Debug, Clone, Default)]
pub struct Brush {
    stroke: Option<Stroke>,
}

impl Brush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    /// Value being painted by the active stroke.
    pub fn draw_value(&self) -> Option<CellState> {
        self.stroke.map(|s| s.value)
    }

    /// Most recently painted cell of the active stroke.
    pub fn last_cell(&self) -> Option<GridPos> {
        self.stroke.map(|s| s.last)
    }

    /// Start a stroke at pixel (x, y). Returns the number of cells written.
    ///
    /// Pressing outside the grid starts nothing.
    pub fn press(&mut self, grid: &mut Grid, camera: &Camera, x: i32, y: i32) -> usize {
        let (col, row) = camera.screen_to_world(x, y);
        let Some(current) = grid.get(row, col) else {
            self.stroke = None;
            return 0;
        };

        let value = current.flipped();
        grid.toggle(row, col, Some(value));
        self.stroke = Some(Stroke {
            last: GridPos::new(row, col),
            value,
        });
        1
    }

    /// Continue the stroke to pixel (x, y). Returns the number of cells written.
    ///
    /// Samples outside the grid are skipped; the stroke resumes from its last
    /// in-bounds cell.
    pub fn drag(&mut self, grid: &mut Grid, camera: &Camera, x: i32, y: i32) -> usize {
        let Some(stroke) = self.stroke.as_mut() else {
            return 0;
        };

        let (col, row) = camera.screen_to_world(x, y);
        if !grid.in_bounds(row, col) {
            return 0;
        }
        let target = GridPos::new(row, col);
        if target == stroke.last {
            return 0;
        }

        let mut written = 0;
        for (c, r) in line_points((stroke.last.col, stroke.last.row), (col, row)) {
            if grid.toggle(r, c, Some(stroke.value)) {
                written += 1;
            }
        }
        stroke.last = target;
        written
    }

    /// End the stroke.
    pub fn release(&mut self) {
        self.stroke = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraConfig;

    fn setup() -> (Grid, Camera) {
        let grid = Grid::new(20, 20);
        let config = CameraConfig {
            cell_size: 10,
            ..CameraConfig::default()
        };
        let camera = Camera::new(20, 20, 100, 100, config);
        (grid, camera)
    }

    #[test]
    fn press_paints_opposite_of_current() {
        let (mut grid, camera) = setup();
        assert_eq!(brush_press(&mut grid, &camera, 15, 25), 1);
        assert!(grid.is_alive(2, 1));
    }

    #[test]
    fn press_on_live_cell_erases() {
        let (mut grid, camera) = setup();
        grid.toggle(2, 1, Some(CellState::Alive));
        let mut brush = Brush::new();
        brush.press(&mut grid, &camera, 15, 25);
        assert_eq!(brush.draw_value(), Some(CellState::Dead));
        assert!(!grid.is_alive(2, 1));
    }

    #[test]
    fn press_outside_grid_starts_nothing() {
        let (mut grid, camera) = setup();
        let mut brush = Brush::new();
        assert_eq!(brush.press(&mut grid, &camera, -5, 5), 0);
        assert!(!brush.is_drawing());
        assert_eq!(brush.drag(&mut grid, &camera, 5, 5), 0);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn drag_fills_gap_between_samples() {
        let (mut grid, camera) = setup();
        let mut brush = Brush::new();
        brush.press(&mut grid, &camera, 5, 5);
        brush.drag(&mut grid, &camera, 75, 5);
        for col in 0..=7 {
            assert!(grid.is_alive(0, col), "col {} should be painted", col);
        }
        assert_eq!(grid.population(), 8);
        assert_eq!(brush.last_cell(), Some(GridPos::new(0, 7)));
    }

    #[test]
    fn drag_outside_grid_resumes_from_last_inside_cell() {
        let (mut grid, camera) = setup();
        let mut brush = Brush::new();
        brush.press(&mut grid, &camera, 25, 25);

        assert_eq!(brush.drag(&mut grid, &camera, -15, 25), 0);
        assert!(brush.is_drawing());
        assert_eq!(brush.last_cell(), Some(GridPos::new(2, 2)));

        assert_eq!(brush.drag(&mut grid, &camera, 25, 75), 6);
        for row in 2..=7 {
            assert!(grid.is_alive(row, 2), "row {} should be painted", row);
        }
        assert_eq!(grid.population(), 6);
        assert_eq!(brush.last_cell(), Some(GridPos::new(7, 2)));
    }

    #[test]
    fn drag_within_same_cell_is_noop() {
        let (mut grid, camera) = setup();
        let mut brush = Brush::new();
        brush.press(&mut grid, &camera, 5, 5);
        assert_eq!(brush.drag(&mut grid, &camera, 9, 9), 0);
    }

    #[test]
    fn release_clears_stroke() {
        let (mut grid, camera) = setup();
        let mut brush = Brush::new();
        brush.press(&mut grid, &camera, 5, 5);
        brush.release();
        assert!(!brush.is_drawing());
        assert_eq!(brush.last_cell(), None);
    }

    fn brush_press(grid: &mut Grid, camera: &Camera, x: i32, y: i32) -> usize {
        Brush::new().press(grid, camera, x, y)
    }
}
