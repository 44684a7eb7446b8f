//! Integer line rasterization (Bresenham), used to fill the gaps between
//! pointer samples while dragging.

/// Iterator over the 8-connected cells of the segment `from -> to`,
/// both endpoints included. Coordinates are `(x, y)`.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i32,
    dy: i32,
    step_x: i32,
    step_y: i32,
    error: i32,
    done: bool,
}

/// Rasterize the segment between two integer points.
///
/// # Examples
///
/// ```
/// use tui_life_core::line_points;
///
/// let points: Vec<_> = line_points((0, 0), (3, 3)).collect();
/// assert_eq!(points, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
/// ```
pub fn line_points(from: (i32, i32), to: (i32, i32)) -> LinePoints {
    let (x0, y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    LinePoints {
        x: x0,
        y: y0,
        x1,
        y1,
        dx,
        dy,
        step_x: if x0 < x1 { 1 } else { -1 },
        step_y: if y0 < y1 { 1 } else { -1 },
        error: dx - dy,
        done: false,
    }
}

impl Iterator for LinePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let point = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(point);
        }

        let error2 = 2 * self.error;
        if error2 > -self.dy {
            self.error -= self.dy;
            self.x += self.step_x;
        }
        if error2 < self.dx {
            self.error += self.dx;
            self.y += self.step_y;
        }
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // Every step advances the major axis by exactly one.
        let remaining = (self.x1 - self.x).abs().max((self.y1 - self.y).abs()) as usize + 1;
        (remaining, Some(remaining))
    }
}
