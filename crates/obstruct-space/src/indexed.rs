//! Map strategy backed by a precomputed sorted occupancy index.

use crate::boundary;
use crate::error::MapError;
use crate::grid;
use crate::map::SpatialMap;
use crate::occupancy::OccupancyIndex;
use crate::stats::MapStats;
use crate::strategy::Strategy;
use obstruct_core::{Cell, Nearest, Rectangle};

/// A map that rasterises its obstacles into per-row and per-column sorted
/// occupancy tables at construction.
///
/// Construction and memory are O(total obstacle area). Obstruction tests
/// and directional queries are O(log n) binary searches, independent of the
/// obstacle count. Suits maps queried many times. The obstacle set is fixed
/// for the lifetime of the map.
///
/// # Examples
///
/// ```
/// use obstruct_core::{Point, Rectangle};
/// use obstruct_space::{IndexedMap, SpatialMap};
///
/// let walls = vec![Rectangle::new(0, 0, 5, 2).unwrap()];
/// let mut map = IndexedMap::new(5, walls).unwrap();
/// assert!(map.cell_obstructed(3, 1));
///
/// map.position_robot(3, 4).unwrap();
/// let points = map.nearest_obstructions().unwrap();
/// assert_eq!(points.up, Point::new(3.5, 2.0));
/// assert_eq!(points.down, Point::new(3.5, 5.0));
/// ```
#[derive(Debug, Clone)]
pub struct IndexedMap {
    size: u32,
    obstacles: Vec<Rectangle>,
    index: OccupancyIndex,
    robot: Option<Cell>,
}

impl IndexedMap {
    /// Maximum side length.
    pub const MAX_SIZE: u32 = grid::MAX_SIZE;

    /// Create an `size x size` map holding `obstacles` and build its index.
    ///
    /// Returns `Err(MapError::EmptyMap)` if `size` is 0,
    /// `Err(MapError::DimensionTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE),
    /// or `Err(MapError::ObstacleOutOfBounds)` for the first obstacle that
    /// does not fit. Validation happens before any rasterisation.
    pub fn new(size: u32, obstacles: Vec<Rectangle>) -> Result<Self, MapError> {
        grid::check_construction(size, &obstacles)?;
        let index = OccupancyIndex::build(&obstacles);
        Ok(Self {
            size,
            obstacles,
            index,
            robot: None,
        })
    }

    /// The precomputed occupancy tables.
    pub fn occupancy(&self) -> &OccupancyIndex {
        &self.index
    }
}

impl SpatialMap for IndexedMap {
    fn size(&self) -> u32 {
        self.size
    }

    fn strategy(&self) -> Strategy {
        Strategy::Indexed
    }

    fn obstacles(&self) -> &[Rectangle] {
        &self.obstacles
    }

    fn robot(&self) -> Option<Cell> {
        self.robot
    }

    fn position_robot(&mut self, x: i32, y: i32) -> Result<(), MapError> {
        self.robot = Some(grid::check_placement(&*self, x, y)?);
        Ok(())
    }

    fn cell_obstructed(&self, x: i32, y: i32) -> bool {
        self.index.contains(x, y)
    }

    fn nearest_lines(&self, origin: Cell) -> Nearest<i32> {
        let mut lines = boundary::edge_lines(self.size);
        if let Some(rows) = self.index.column(origin.x) {
            let (up, down) = rows.neighbours(origin.y);
            lines.up = up.unwrap_or(lines.up);
            lines.down = down.unwrap_or(lines.down);
        }
        if let Some(columns) = self.index.row(origin.y) {
            let (left, right) = columns.neighbours(origin.x);
            lines.left = left.unwrap_or(lines.left);
            lines.right = right.unwrap_or(lines.right);
        }
        lines
    }

    fn stats(&self) -> MapStats {
        MapStats::from_obstacles(
            Strategy::Indexed,
            self.size,
            &self.obstacles,
            self.index.entries(),
        )
    }
}
