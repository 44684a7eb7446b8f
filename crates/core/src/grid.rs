//! Grid module - the automaton's cell state
//!
//! A dense `rows x cols` board of [`CellState`]. Uses a flat vector in
//! row-major order (`row * cols + col`) for cache locality.
//!
//! Generations are computed into a second buffer that is swapped in once the
//! sweep is complete, so every cell of generation `n + 1` is derived from
//! generation `n` alone.

use arrayvec::ArrayVec;

use crate::patterns::Pattern;
use crate::rng::SimpleRng;
use crate::types::{Boundary, CellState, GridPos};

/// Half-open rectangular range of cells: `row_start..row_end` x `col_start..col_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWindow {
    pub row_start: i32,
    pub row_end: i32,
    pub col_start: i32,
    pub col_end: i32,
}

/// Moore neighborhood offsets as (d_row, d_col)
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Standard Conway rule (B3/S23).
#[inline]
pub fn conway_rule(current: CellState, live_neighbors: u8) -> CellState {
    match (current, live_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    boundary: Boundary,
    /// Current generation, row-major
    cells: Vec<CellState>,
    /// Back buffer for `advance`; contents are meaningless between calls
    scratch: Vec<CellState>,
    generation: u64,
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Grid {
    /// Create an all-dead grid with fixed (non-wrapping) edges.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or does not fit in an `i32`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_boundary(rows, cols, Boundary::Fixed)
    }

    pub fn with_boundary(rows: usize, cols: usize, boundary: Boundary) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        assert!(
            rows <= i32::MAX as usize && cols <= i32::MAX as usize,
            "grid dimensions must fit in i32"
        );
        let len = rows * cols;
        Self {
            rows,
            cols,
            boundary,
            cells: vec![CellState::Dead; len],
            scratch: vec![CellState::Dead; len],
            generation: 0,
        }
    }

    /// Build a grid from rows of cells.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or not rectangular. Loaders validate first.
    pub fn from_rows(rows: Vec<Vec<CellState>>, boundary: Boundary) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        assert!(
            rows.iter().all(|r| r.len() == width),
            "grid rows must all have the same length"
        );

        let mut grid = Self::with_boundary(height, width, boundary);
        for (dst, src) in grid.cells.iter_mut().zip(rows.into_iter().flatten()) {
            *dst = src;
        }
        grid
    }

    /// Row-major copy of the cells as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<CellState>> {
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Number of generations computed since the last reset/randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Cell at (row, col), `None` if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<CellState> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn is_alive(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(CellState::Alive))
    }

    /// Kill every cell.
    pub fn reset(&mut self) {
        self.cells.fill(CellState::Dead);
        self.generation = 0;
    }

    /// Independently set each cell alive with the given probability.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is not within `[0, 1]` (NaN included).
    pub fn randomize(&mut self, probability: f64, rng: &mut SimpleRng) {
        assert!(
            (0.0..=1.0).contains(&probability),
            "randomize probability must be within [0, 1], got {}",
            probability
        );
        for cell in &mut self.cells {
            *cell = if rng.next_f64() < probability {
                CellState::Alive
            } else {
                CellState::Dead
            };
        }
        self.generation = 0;
    }

    /// Flip the cell, or force it to `value` when given.
    ///
    /// Out-of-range coordinates are ignored; returns false in that case.
    pub fn toggle(&mut self, row: i32, col: i32, value: Option<CellState>) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                let current = self.cells[idx];
                self.cells[idx] = value.unwrap_or(current.flipped());
                true
            }
            None => false,
        }
    }

    /// Positions of the Moore neighbors of (row, col) under the boundary policy.
    ///
    /// With fixed edges, off-grid neighbors are simply absent. With toroidal
    /// edges every neighbor exists; on grids narrower than 3 cells a wrapped
    /// neighbor may coincide with another one (or the cell itself).
    pub fn neighbors(&self, row: i32, col: i32) -> ArrayVec<GridPos, 8> {
        let mut out = ArrayVec::new();
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        for &(dr, dc) in NEIGHBOR_OFFSETS.iter() {
            let r = row + dr;
            let c = col + dc;
            match self.boundary {
                Boundary::Fixed => {
                    if self.in_bounds(r, c) {
                        out.push(GridPos::new(r, c));
                    }
                }
                Boundary::Toroidal => {
                    out.push(GridPos::new(r.rem_euclid(rows), c.rem_euclid(cols)));
                }
            }
        }
        out
    }

    /// Live cells among the 8 Moore neighbors, in `[0, 8]`.
    pub fn count_neighbors(&self, row: i32, col: i32) -> u8 {
        self.neighbors(row, col)
            .iter()
            .filter(|p| self.is_alive(p.row, p.col))
            .count() as u8
    }

    /// Compute the next generation.
    ///
    /// Reads only from the current buffer and writes the back buffer, then
    /// swaps them in one step.
    pub fn advance(&mut self) {
        let mut next = std::mem::take(&mut self.scratch);
        next.resize(self.cells.len(), CellState::Dead);

        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let idx = row as usize * self.cols + col as usize;
                let n = self.count_neighbors(row, col);
                next[idx] = conway_rule(self.cells[idx], n);
            }
        }

        std::mem::swap(&mut self.cells, &mut next);
        self.scratch = next;
        self.generation += 1;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Set every cell of `pattern` alive, offset by `origin`.
    ///
    /// Cells that land outside the grid are dropped.
    pub fn stamp(&mut self, pattern: &Pattern, origin: GridPos) {
        for &(dr, dc) in pattern.cells {
            self.toggle(origin.row + dr, origin.col + dc, Some(CellState::Alive));
        }
    }

    /// The whole grid as a window.
    pub fn full_window(&self) -> CellWindow {
        CellWindow {
            row_start: 0,
            row_end: self.rows as i32,
            col_start: 0,
            col_end: self.cols as i32,
        }
    }

    /// Lazily yield live cells inside `window` (clipped to the grid), row-major.
    pub fn live_cells_in(&self, window: CellWindow) -> impl Iterator<Item = GridPos> + '_ {
        let row_start = window.row_start.max(0);
        let row_end = window.row_end.min(self.rows as i32);
        let col_start = window.col_start.max(0);
        let col_end = window.col_end.min(self.cols as i32);

        (row_start..row_end).flat_map(move |row| {
            (col_start..col_end)
                .filter(move |&col| self.is_alive(row, col))
                .map(move |col| GridPos::new(row, col))
        })
    }

    pub fn live_cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        self.live_cells_in(self.full_window())
    }
}
