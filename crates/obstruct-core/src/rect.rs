//! Axis-aligned rectangular obstacles.

use crate::cell::Cell;
use crate::error::GeometryError;
use std::fmt;

/// An immutable axis-aligned rectangle covering whole grid cells.
///
/// Both axes are half-open: the rectangle covers every cell `(x, y)` with
/// `x_min <= x < x_max` and `y_min <= y < y_max`. Coordinates are grid-line
/// indices, so `Rectangle::new(0, 0, 1, 1)` is the single top-left cell and
/// the bottom-right corner of an `n`-sided map is the line pair `(n, n)`.
///
/// # Examples
///
/// ```
/// use obstruct_core::Rectangle;
///
/// // Corner order does not matter.
/// let r = Rectangle::new(7, 5, 1, 2).unwrap();
/// assert_eq!(r.x_range(), (1, 7));
/// assert_eq!(r.y_range(), (2, 5));
/// assert_eq!(r.area(), 18);
/// assert!(r.contains_cell(4, 4));
/// assert!(!r.contains_cell(4, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rectangle {
    x: (i32, i32),
    y: (i32, i32),
}

impl Rectangle {
    /// Build a rectangle from two diagonal corners `(x0, y0)` and `(x1, y1)`.
    ///
    /// Each axis is sorted independently, so any pair of opposite corners
    /// describes the same rectangle.
    ///
    /// Returns `Err(GeometryError::NegativeCoordinate)` if any coordinate is
    /// negative, or `Err(GeometryError::ZeroArea)` if the corners share an
    /// x or a y coordinate.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self, GeometryError> {
        let corners = [x0, y0, x1, y1];
        if corners.iter().any(|&v| v < 0) {
            return Err(GeometryError::NegativeCoordinate { corners });
        }
        if x0 == x1 || y0 == y1 {
            return Err(GeometryError::ZeroArea { corners });
        }
        Ok(Self {
            x: (x0.min(x1), x0.max(x1)),
            y: (y0.min(y1), y0.max(y1)),
        })
    }

    /// Column span `(x_min, x_max)`, half-open.
    pub fn x_range(&self) -> (i32, i32) {
        self.x
    }

    /// Row span `(y_min, y_max)`, half-open.
    pub fn y_range(&self) -> (i32, i32) {
        self.y
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        (self.x.1 - self.x.0) as u32
    }

    /// Number of rows covered.
    pub fn height(&self) -> u32 {
        (self.y.1 - self.y.0) as u32
    }

    /// Returns `true` if column `x` passes through this rectangle.
    pub fn intersects_column(&self, x: i32) -> bool {
        self.x.0 <= x && x < self.x.1
    }

    /// Returns `true` if row `y` passes through this rectangle.
    pub fn intersects_row(&self, y: i32) -> bool {
        self.y.0 <= y && y < self.y.1
    }

    /// Returns `true` if cell `(x, y)` is covered.
    pub fn contains_cell(&self, x: i32, y: i32) -> bool {
        self.intersects_column(x) && self.intersects_row(y)
    }

    /// [`contains_cell`](Self::contains_cell) for a [`Cell`].
    pub fn contains(&self, cell: Cell) -> bool {
        self.contains_cell(cell.x, cell.y)
    }

    /// Returns `true` if the rectangle fits inside an `n`-sided map.
    ///
    /// Touching the outer edge is allowed: `x_max == n` is inside.
    pub fn inside_bounds(&self, n: u32) -> bool {
        let n = i64::from(n);
        i64::from(self.x.1) <= n && i64::from(self.y.1) <= n
    }

    /// Number of cells covered. Always positive.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Returns `true` if the two rectangles cover at least one common cell.
    ///
    /// Rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x.0 < other.x.1 && other.x.0 < self.x.1 && self.y.0 < other.y.1 && other.y.0 < self.y.1
    }

    /// Corners `[x_min, y_min, x_max, y_max]` multiplied by `factor`.
    ///
    /// Intended for converting grid lines to display units.
    pub fn scaled(&self, factor: f64) -> [f64; 4] {
        [
            f64::from(self.x.0) * factor,
            f64::from(self.y.0) * factor,
            f64::from(self.x.1) * factor,
            f64::from(self.y.1) * factor,
        ]
    }

    /// Iterate over every covered cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.y.0..self.y.1).flat_map(move |y| (self.x.0..self.x.1).map(move |x| Cell::new(x, y)))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.x.0, self.x.1, self.y.0, self.y.1
        )
    }
}
