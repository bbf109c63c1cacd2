//! The core `SpatialMap` trait and `dyn SpatialMap` downcast support.

use crate::boundary;
use crate::error::MapError;
use crate::stats::MapStats;
use crate::strategy::Strategy;
use obstruct_core::{Cell, Nearest, ObstacleId, Point, Rectangle};
use smallvec::SmallVec;
use std::any::Any;

/// A square grid of fixed rectangular obstacles with a single robot.
///
/// Concrete strategies ([`LinearScanMap`](crate::LinearScanMap),
/// [`IndexedMap`](crate::IndexedMap)) supply the obstruction test and the
/// raw directional lookup; the robot queries and the boundary-offset rule
/// are shared and live in provided methods.
///
/// # States
///
/// A map starts `Unpositioned`. A successful
/// [`position_robot`](Self::position_robot) moves it to `Positioned`, and
/// further successful calls keep it there. There is no way back.
/// [`nearest_obstructions`](Self::nearest_obstructions) is only answered in
/// the `Positioned` state.
///
/// # Overlap
///
/// Obstacles may overlap. Both strategies treat a cell as obstructed when
/// at least one rectangle covers it, so overlapping inputs produce the same
/// answers; rejecting them is a caller policy.
///
/// # Thread Safety
///
/// Maps hold no interior mutability. Queries take `&self` and placement
/// takes `&mut self`, so sharing a map across threads needs external
/// synchronisation only when the robot moves.
pub trait SpatialMap: Any + Send + Sync + 'static {
    /// Grid side length `n`.
    fn size(&self) -> u32;

    /// Which index strategy answers queries.
    fn strategy(&self) -> Strategy;

    /// Obstacles in construction order. `obstacles()[i]` has `ObstacleId(i)`.
    fn obstacles(&self) -> &[Rectangle];

    /// The robot's cell, or `None` before the first successful placement.
    fn robot(&self) -> Option<Cell>;

    /// Place or move the robot to cell `(x, y)`.
    ///
    /// Returns `Err(MapError::RobotOutOfBounds)` outside the grid and
    /// `Err(MapError::Obstructed)` on a covered cell. On error the previous
    /// placement (if any) is kept.
    fn position_robot(&mut self, x: i32, y: i32) -> Result<(), MapError>;

    /// Returns `true` if some obstacle covers cell `(x, y)`.
    ///
    /// Coordinates outside the grid are never obstructed.
    fn cell_obstructed(&self, x: i32, y: i32) -> bool;

    /// Nearest obstructed line in each direction from `origin`.
    ///
    /// `up`/`down` are row indices in `origin`'s column, `left`/`right` are
    /// column indices in `origin`'s row. A direction with no obstruction
    /// reports the line just past the map edge: `-1` for up and left, `n`
    /// for down and right. `origin` itself is never reported, so the result
    /// is well defined even when `origin` is obstructed.
    fn nearest_lines(&self, origin: Cell) -> Nearest<i32>;

    /// Size and footprint counters for this map.
    ///
    /// The default reports no index entries; strategies that precompute an
    /// index override it.
    fn stats(&self) -> MapStats {
        MapStats::from_obstacles(self.strategy(), self.size(), self.obstacles(), 0)
    }

    /// Returns `true` once a robot has been placed.
    fn is_positioned(&self) -> bool {
        self.robot().is_some()
    }

    /// Nearest obstructed cell (or edge sentinel) in each direction from
    /// the robot.
    ///
    /// Returns `Err(MapError::RobotNotPositioned)` before the first
    /// successful placement.
    fn nearest_obstructed_cells(&self) -> Result<Nearest<Cell>, MapError> {
        let robot = self.robot().ok_or(MapError::RobotNotPositioned)?;
        Ok(boundary::obstructed_cells(robot, self.nearest_lines(robot)))
    }

    /// Grid-line points where free space ends in each direction from the
    /// robot.
    ///
    /// Each point sits on the line separating the last free cell from the
    /// obstruction (or the map edge), centred on the robot's row or column.
    /// Repeated calls without moving the robot return identical results.
    ///
    /// Returns `Err(MapError::RobotNotPositioned)` before the first
    /// successful placement.
    fn nearest_obstructions(&self) -> Result<Nearest<Point>, MapError> {
        let robot = self.robot().ok_or(MapError::RobotNotPositioned)?;
        Ok(boundary::boundary_points(robot, self.nearest_lines(robot)))
    }

    /// Every obstacle covering cell `(x, y)`, in ID order.
    ///
    /// Default implementation scans [`obstacles`](Self::obstacles).
    fn obstacles_covering(&self, x: i32, y: i32) -> SmallVec<[ObstacleId; 4]> {
        self.obstacles()
            .iter()
            .enumerate()
            .filter(|(_, rect)| rect.contains_cell(x, y))
            .map(|(i, _)| ObstacleId(i as u32))
            .collect()
    }
}

impl dyn SpatialMap {
    /// Attempt to downcast a trait object to a concrete map type.
    pub fn downcast_ref<T: SpatialMap>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Mutable variant of [`downcast_ref`](Self::downcast_ref).
    pub fn downcast_mut<T: SpatialMap>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
