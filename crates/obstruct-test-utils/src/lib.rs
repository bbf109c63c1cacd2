//! Test utilities and reference oracles for Obstruct development.
//!
//! Provides a brute-force [`RasterMap`] oracle that answers the same
//! questions as a [`SpatialMap`] by walking a dense boolean grid, plus the
//! obstacle [`fixtures`] shared by tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use obstruct_core::{Cell, Direction, Nearest, Rectangle};
use obstruct_space::SpatialMap;

/// Dense boolean raster of an obstacle set.
///
/// Answers queries by stepping cell by cell, so it is trivially correct and
/// slow. Only use it on small maps.
pub struct RasterMap {
    size: u32,
    cells: Vec<bool>,
}

impl RasterMap {
    pub fn new(size: u32, obstacles: &[Rectangle]) -> Self {
        let n = size as usize;
        let mut cells = vec![false; n * n];
        for rect in obstacles {
            for cell in rect.cells() {
                if cell.in_bounds(size) {
                    cells[cell.y as usize * n + cell.x as usize] = true;
                }
            }
        }
        Self { size, cells }
    }

    /// Off-grid cells are never obstructed.
    pub fn obstructed(&self, x: i32, y: i32) -> bool {
        let cell = Cell::new(x, y);
        cell.in_bounds(self.size) && self.cells[y as usize * self.size as usize + x as usize]
    }

    /// Walk from `origin` in each direction until an obstructed cell or the
    /// line past the edge.
    pub fn nearest_lines(&self, origin: Cell) -> Nearest<i32> {
        Nearest::<()>::default().map(|dir, ()| self.walk(origin, dir))
    }

    fn walk(&self, origin: Cell, dir: Direction) -> i32 {
        let (dx, dy) = dir.step();
        let mut cell = origin;
        loop {
            cell = Cell::new(cell.x + dx, cell.y + dy);
            if !cell.in_bounds(self.size) || self.obstructed(cell.x, cell.y) {
                return if dir.is_vertical() { cell.y } else { cell.x };
            }
        }
    }
}

/// Unobstructed cells of any map, row-major.
pub fn free_cells(map: &dyn SpatialMap) -> Vec<Cell> {
    let n = map.size() as i32;
    (0..n)
        .flat_map(|y| (0..n).map(move |x| Cell::new(x, y)))
        .filter(|c| !map.cell_obstructed(c.x, c.y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_matches_rectangles() {
        let obstacles = fixtures::corner_obstacles();
        let raster = RasterMap::new(5, &obstacles);
        for y in 0..5 {
            for x in 0..5 {
                let expected = obstacles.iter().any(|r| r.contains_cell(x, y));
                assert_eq!(raster.obstructed(x, y), expected);
            }
        }
        assert!(!raster.obstructed(-1, 0));
    }

    #[test]
    fn raster_walk_corner_map() {
        let raster = RasterMap::new(5, &fixtures::corner_obstacles());
        let lines = raster.nearest_lines(Cell::new(4, 3));
        assert_eq!(
            lines,
            Nearest {
                up: 1,
                left: 1,
                down: 4,
                right: 5
            }
        );
    }
}
