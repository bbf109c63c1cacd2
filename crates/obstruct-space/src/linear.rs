//! Map strategy that answers every query by scanning the obstacle list.

use crate::boundary;
use crate::error::MapError;
use crate::grid;
use crate::map::SpatialMap;
use crate::strategy::Strategy;
use obstruct_core::{Cell, Nearest, Rectangle};

/// A map that keeps only the obstacle list.
///
/// Construction is O(k) validation with no preprocessing; every obstruction
/// test and directional query folds over all `k` obstacles. Suits maps with
/// few obstacles or few queries.
///
/// # Examples
///
/// ```
/// use obstruct_core::{Cell, Rectangle};
/// use obstruct_space::{LinearScanMap, SpatialMap};
///
/// let walls = vec![
///     Rectangle::new(0, 0, 5, 1).unwrap(),
///     Rectangle::new(0, 3, 5, 4).unwrap(),
/// ];
/// let mut map = LinearScanMap::new(5, walls).unwrap();
/// map.position_robot(1, 2).unwrap();
///
/// let cells = map.nearest_obstructed_cells().unwrap();
/// assert_eq!(cells.up, Cell::new(1, 0));
/// assert_eq!(cells.down, Cell::new(1, 3));
/// assert_eq!(cells.left, Cell::new(-1, 2));
/// assert_eq!(cells.right, Cell::new(5, 2));
/// ```
#[derive(Debug, Clone)]
pub struct LinearScanMap {
    size: u32,
    obstacles: Vec<Rectangle>,
    robot: Option<Cell>,
}

impl LinearScanMap {
    /// Maximum side length.
    pub const MAX_SIZE: u32 = grid::MAX_SIZE;

    /// Create an `size x size` map holding `obstacles`.
    ///
    /// Returns `Err(MapError::EmptyMap)` if `size` is 0,
    /// `Err(MapError::DimensionTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE),
    /// or `Err(MapError::ObstacleOutOfBounds)` for the first obstacle that
    /// does not fit.
    pub fn new(size: u32, obstacles: Vec<Rectangle>) -> Result<Self, MapError> {
        grid::check_construction(size, &obstacles)?;
        Ok(Self {
            size,
            obstacles,
            robot: None,
        })
    }
}

/// Tighten `before`/`after` with the cells of `lo..hi` nearest to `at` on
/// either side of it.
fn fold_span(lo: i32, hi: i32, at: i32, before: &mut i32, after: &mut i32) {
    if lo < at {
        *before = (*before).max((hi - 1).min(at - 1));
    }
    if hi - 1 > at {
        *after = (*after).min(lo.max(at + 1));
    }
}

impl SpatialMap for LinearScanMap {
    fn size(&self) -> u32 {
        self.size
    }

    fn strategy(&self) -> Strategy {
        Strategy::LinearScan
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
        self.obstacles.iter().any(|rect| rect.contains_cell(x, y))
    }

    fn nearest_lines(&self, origin: Cell) -> Nearest<i32> {
        let mut lines = boundary::edge_lines(self.size);
        for rect in &self.obstacles {
            if rect.intersects_column(origin.x) {
                let (y_min, y_max) = rect.y_range();
                fold_span(y_min, y_max, origin.y, &mut lines.up, &mut lines.down);
            }
            if rect.intersects_row(origin.y) {
                let (x_min, x_max) = rect.x_range();
                fold_span(x_min, x_max, origin.x, &mut lines.left, &mut lines.right);
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use obstruct_core::Point;

    fn r(x0: i32, y0: i32, x1: i32, y1: i32) -> Rectangle {
        Rectangle::new(x0, y0, x1, y1).unwrap()
    }

    fn corner_map() -> LinearScanMap {
        LinearScanMap::new(5, vec![r(0, 0, 5, 2), r(0, 5, 2, 0), r(5, 5, 4, 4)]).unwrap()
    }

    // ── Obstruction tests ───────────────────────────────────────

    #[test]
    fn cell_obstructed_corner_map() {
        let m = corner_map();
        assert!(m.cell_obstructed(0, 0));
        assert!(m.cell_obstructed(0, 1));
        assert!(m.cell_obstructed(3, 1));
        assert!(m.cell_obstructed(4, 4));

        assert!(!m.cell_obstructed(2, 2));
        assert!(!m.cell_obstructed(2, 3));
        assert!(!m.cell_obstructed(2, 4));
        assert!(!m.cell_obstructed(3, 2));
        assert!(!m.cell_obstructed(3, 3));
        assert!(!m.cell_obstructed(3, 4));
        assert!(!m.cell_obstructed(4, 3));
    }

    #[test]
    fn off_grid_cells_never_obstructed() {
        let m = corner_map();
        assert!(!m.cell_obstructed(-1, 0));
        assert!(!m.cell_obstructed(5, 0));
    }

    // ── Query tests ─────────────────────────────────────────────

    #[test]
    fn corner_map_query() {
        let mut m = corner_map();
        assert!(!m.is_positioned());
        m.position_robot(4, 3).unwrap();
        assert!(m.is_positioned());

        let cells = m.nearest_obstructed_cells().unwrap();
        assert_eq!(cells.up, Cell::new(4, 1));
        assert_eq!(cells.left, Cell::new(1, 3));
        assert_eq!(cells.down, Cell::new(4, 4));
        assert_eq!(cells.right, Cell::new(5, 3));

        let points = m.nearest_obstructions().unwrap();
        assert_eq!(points.up, Point::new(4.5, 2.0));
        assert_eq!(points.left, Point::new(2.0, 3.5));
        assert_eq!(points.down, Point::new(4.5, 4.0));
        assert_eq!(points.right, Point::new(5.0, 3.5));
    }

    #[test]
    fn query_is_idempotent() {
        let mut m = corner_map();
        m.position_robot(4, 3).unwrap();
        let first = m.nearest_obstructions().unwrap();
        for _ in 0..2 {
            assert_eq!(m.nearest_obstructions().unwrap(), first);
        }
    }

    #[test]
    fn query_before_placement_fails() {
        let m = corner_map();
        assert_eq!(
            m.nearest_obstructions(),
            Err(MapError::RobotNotPositioned)
        );
        assert_eq!(
            m.nearest_obstructed_cells(),
            Err(MapError::RobotNotPositioned)
        );
    }

    #[test]
    fn empty_map_reports_edges() {
        let mut m = LinearScanMap::new(7, vec![]).unwrap();
        m.position_robot(3, 5).unwrap();
        let points = m.nearest_obstructions().unwrap();
        assert_eq!(points.up, Point::new(3.5, 0.0));
        assert_eq!(points.down, Point::new(3.5, 7.0));
        assert_eq!(points.left, Point::new(0.0, 5.5));
        assert_eq!(points.right, Point::new(7.0, 5.5));
    }

    #[test]
    fn nearest_lines_from_inside_an_obstacle() {
        let m = LinearScanMap::new(6, vec![r(1, 1, 5, 5)]).unwrap();
        let lines = m.nearest_lines(Cell::new(2, 3));
        assert_eq!(lines.up, 2);
        assert_eq!(lines.down, 4);
        assert_eq!(lines.left, 1);
        assert_eq!(lines.right, 3);
    }

    // ── Placement tests ─────────────────────────────────────────

    #[test]
    fn failed_placements_keep_previous_robot() {
        let mut m = corner_map();
        m.position_robot(3, 3).unwrap();
        assert_eq!(
            m.position_robot(0, 0),
            Err(MapError::Obstructed {
                cell: Cell::new(0, 0)
            })
        );
        assert_eq!(
            m.position_robot(5, 2),
            Err(MapError::RobotOutOfBounds {
                cell: Cell::new(5, 2),
                size: 5
            })
        );
        assert_eq!(m.robot(), Some(Cell::new(3, 3)));
    }

    #[test]
    fn failed_first_placement_stays_unpositioned() {
        let mut m = corner_map();
        assert!(m.position_robot(-1, 3).is_err());
        assert!(!m.is_positioned());
    }

    #[test]
    fn repositioning_moves_robot() {
        let mut m = corner_map();
        m.position_robot(3, 3).unwrap();
        m.position_robot(2, 4).unwrap();
        m.position_robot(2, 4).unwrap();
        assert_eq!(m.robot(), Some(Cell::new(2, 4)));
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_size_returns_error() {
        assert!(matches!(
            LinearScanMap::new(0, vec![]),
            Err(MapError::EmptyMap)
        ));
    }

    #[test]
    fn new_rejects_obstacle_outside() {
        assert!(matches!(
            LinearScanMap::new(4, vec![r(0, 0, 5, 2)]),
            Err(MapError::ObstacleOutOfBounds { .. })
        ));
    }

    // ── Overlap ─────────────────────────────────────────────────

    #[test]
    fn overlapping_obstacles_are_reported_together() {
        let m = LinearScanMap::new(4, vec![r(0, 0, 2, 2), r(1, 1, 3, 3)]).unwrap();
        assert_eq!(m.obstacles_covering(1, 1).len(), 2);
        assert_eq!(m.obstacles_covering(0, 0).len(), 1);
        assert!(m.obstacles_covering(3, 3).is_empty());
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_corner_map() {
        let mut m = corner_map();
        compliance::run_full_compliance(&mut m);
    }

    #[test]
    fn compliance_overlapping() {
        let mut m = LinearScanMap::new(
            8,
            vec![r(0, 0, 3, 3), r(2, 2, 5, 4), r(6, 0, 7, 8), r(1, 6, 4, 7)],
        )
        .unwrap();
        compliance::run_full_compliance(&mut m);
    }

    #[test]
    fn compliance_empty() {
        let mut m = LinearScanMap::new(3, vec![]).unwrap();
        compliance::run_full_compliance(&mut m);
    }

    // ── Downcast test ───────────────────────────────────────────

    #[test]
    fn downcast_ref_linear() {
        let m: Box<dyn SpatialMap> = Box::new(corner_map());
        assert!(m.downcast_ref::<LinearScanMap>().is_some());
        assert!(m.downcast_ref::<crate::IndexedMap>().is_none());
    }
}
