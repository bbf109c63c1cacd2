//! Conversion from raw nearest lines to reported cells and boundary points.
//!
//! Both map strategies produce the same raw [`Nearest<i32>`]; everything
//! downstream of that is shared and lives here.

use obstruct_core::{Cell, Nearest, Point};

/// Raw lines reported when nothing obstructs any direction.
pub fn edge_lines(size: u32) -> Nearest<i32> {
    let n = size as i32;
    Nearest {
        up: -1,
        left: -1,
        down: n,
        right: n,
    }
}

/// Pair each raw line with `origin`'s column (vertical directions) or row
/// (horizontal directions).
pub fn obstructed_cells(origin: Cell, lines: Nearest<i32>) -> Nearest<Cell> {
    Nearest {
        up: Cell::new(origin.x, lines.up),
        left: Cell::new(lines.left, origin.y),
        down: Cell::new(origin.x, lines.down),
        right: Cell::new(lines.right, origin.y),
    }
}

/// Grid-line point between `origin` and each raw line.
///
/// `up = (x + 0.5, up + 1)`, `left = (left + 1, y + 0.5)`,
/// `down = (x + 0.5, down)`, `right = (right, y + 0.5)`.
pub fn boundary_points(origin: Cell, lines: Nearest<i32>) -> Nearest<Point> {
    let cx = f64::from(origin.x) + 0.5;
    let cy = f64::from(origin.y) + 0.5;
    Nearest {
        up: Point::new(cx, f64::from(lines.up) + 1.0),
        left: Point::new(f64::from(lines.left) + 1.0, cy),
        down: Point::new(cx, f64::from(lines.down)),
        right: Point::new(f64::from(lines.right), cy),
    }
}
