//! Grid cells and boundary points.

use std::fmt;

/// A grid cell addressed by column `x` and row `y`.
///
/// The origin is the top-left cell; `x` grows to the right and `y` grows
/// downwards. Cells inside an `n`-sided map satisfy `0 <= x, y < n`, but a
/// `Cell` may also carry the sentinel lines `-1` and `n` when it reports a
/// map edge rather than an obstruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Cell {
    /// Create a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the cell lies inside an `n`-sided map.
    pub fn in_bounds(self, n: u32) -> bool {
        let n = i64::from(n);
        self.x >= 0 && self.y >= 0 && i64::from(self.x) < n && i64::from(self.y) < n
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A point in continuous grid coordinates.
///
/// One unit equals one cell side. Boundary points lie on grid lines, so
/// their coordinates are integers or half-integers.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point at `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates multiplied by `factor`.
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
