//! Level files - bare nested-array JSON documents.
//!
//! A level is a rectangular, row-major array of arrays of small unsigned
//! integers, with no header and no version:
//!
//! ```text
//! [
//!   [0, 1, 0],
//!   [0, 0, 1]
//! ]
//! ```
//!
//! The value domain depends on the consumer (`0`/`1` for the automaton, tile
//! ids for tile maps), so validation takes the largest accepted value. A
//! document is checked in full before any [`Grid`] is built from it.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use tui_life_core::types::{Boundary, CellState};
use tui_life_core::Grid;

/// Largest cell value accepted for automaton levels.
pub const AUTOMATON_MAX_VALUE: u8 = 1;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level io error: {0}")]
    Io(#[from] io::Error),
    #[error("level is not a JSON array of integer arrays: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level has no cells")]
    Empty,
    #[error("level row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level cell ({row}, {col}) has value {value}, max is {max}")]
    ValueOutOfRange {
        row: usize,
        col: usize,
        value: u8,
        max: u8,
    },
}

/// A validated, rectangular level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    rows: Vec<Vec<u8>>,
}

impl Level {
    /// Validate raw rows: non-empty, rectangular, every value `<= max_value`.
    pub fn from_rows(rows: Vec<Vec<u8>>, max_value: u8) -> Result<Self, LevelError> {
        let expected = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(LevelError::Empty),
        };

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LevelError::Ragged {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some((col, &value)) = cells.iter().enumerate().find(|(_, v)| **v > max_value) {
                return Err(LevelError::ValueOutOfRange {
                    row,
                    col,
                    value,
                    max: max_value,
                });
            }
        }

        Ok(Self { rows })
    }

    pub fn parse(text: &str, max_value: u8) -> Result<Self, LevelError> {
        let rows: Vec<Vec<u8>> = serde_json::from_str(text)?;
        Self::from_rows(rows, max_value)
    }

    pub fn load(path: impl AsRef<Path>, max_value: u8) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let level = Self::parse(&text, max_value)?;
        info!(
            path = %path.display(),
            rows = level.height(),
            cols = level.width(),
            "level loaded"
        );
        Ok(level)
    }

    /// Render as JSON, one row per line.
    pub fn to_json(&self) -> Result<String, LevelError> {
        let mut out = String::from("[\n");
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str("  ");
            out.push_str(&serde_json::to_string(row)?);
            if i + 1 < self.rows.len() {
                out.push(',');
            }
            out.push('\n');
        }
        out.push_str("]\n");
        Ok(out)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LevelError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), rows = self.height(), cols = self.width(), "level saved");
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid
            .to_rows()
            .into_iter()
            .map(|row| row.into_iter().map(CellState::as_u8).collect())
            .collect();
        Self { rows }
    }

    /// Build an automaton grid. Any non-zero value counts as alive.
    pub fn to_grid(&self, boundary: Boundary) -> Grid {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&v| if v == 0 { CellState::Dead } else { CellState::Alive })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows, boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_arrays() {
        let level = Level::parse("[[0,1,0],[1,1,0]]", AUTOMATON_MAX_VALUE).unwrap();
        assert_eq!(level.height(), 2);
        assert_eq!(level.width(), 3);
        assert_eq!(level.rows()[1], vec![1, 1, 0]);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Level::parse("[[0,1,0],[1,1]]", 1).unwrap_err();
        assert!(matches!(
            err,
            LevelError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Level::parse("[]", 1), Err(LevelError::Empty)));
        assert!(matches!(Level::parse("[[]]", 1), Err(LevelError::Empty)));
    }

    #[test]
    fn rejects_values_above_domain() {
        let err = Level::parse("[[0,0],[0,2]]", 1).unwrap_err();
        assert!(matches!(
            err,
            LevelError::ValueOutOfRange {
                row: 1,
                col: 1,
                value: 2,
                max: 1
            }
        ));
        // Tile maps accept a wider domain.
        assert!(Level::parse("[[0,0],[0,2]]", 5).is_ok());
    }

    #[test]
    fn rejects_non_arrays() {
        assert!(matches!(Level::parse("{\"a\":1}", 1), Err(LevelError::Json(_))));
        assert!(matches!(Level::parse("[[0,-1]]", 1), Err(LevelError::Json(_))));
    }

    #[test]
    fn writes_one_row_per_line() {
        let level = Level::from_rows(vec![vec![0, 1], vec![1, 0]], 1).unwrap();
        assert_eq!(level.to_json().unwrap(), "[\n  [0,1],\n  [1,0]\n]\n");
    }
}
