//! Named seed patterns, as `(row, col)` offsets from a top-left origin.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (i32, i32) {
        let rows = self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        (rows, cols)
    }
}

/// 2x2 still life.
pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

/// Travels one cell down and one cell right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

/// Lightweight spaceship, travels left two cells every 4 generations.
pub const LWSS: Pattern = Pattern {
    name: "LWSS",
    cells: &[
        (0, 1),
        (0, 4),
        (1, 0),
        (2, 0),
        (2, 4),
        (3, 0),
        (3, 1),
        (3, 2),
        (3, 3),
    ],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, GLIDER, TOAD, BEACON, R_PENTOMINO, LWSS];

/// Look up a pattern by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        assert_eq!(BLOCK.extent(), (2, 2));
        assert_eq!(GLIDER.extent(), (3, 3));
        assert_eq!(LWSS.extent(), (4, 5));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(find("glider"), Some(&GLIDER));
        assert_eq!(find("lwss").map(|p| p.cells.len()), Some(9));
        assert!(find("gun").is_none());
    }

    #[test]
    fn no_duplicate_cells() {
        for p in PATTERNS {
            let mut cells = p.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), p.cells.len(), "{} has duplicate cells", p.name);
        }
    }
}
