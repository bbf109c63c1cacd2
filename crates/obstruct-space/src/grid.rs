//! Shared validation helpers for both map strategies.

use crate::error::MapError;
use crate::map::SpatialMap;
use obstruct_core::{Cell, ObstacleId, Rectangle};

/// Largest supported side length: coordinates use `i32`, and the edge
/// sentinel `n` must fit as well.
pub const MAX_SIZE: u32 = i32::MAX as u32;

/// Check the side length and that every obstacle fits inside the grid.
///
/// Both map constructors run this before storing anything; it is public so
/// configuration layers can validate without building a map.
pub fn check_construction(size: u32, obstacles: &[Rectangle]) -> Result<(), MapError> {
    if size == 0 {
        return Err(MapError::EmptyMap);
    }
    if size > MAX_SIZE {
        return Err(MapError::DimensionTooLarge {
            value: size,
            max: MAX_SIZE,
        });
    }
    if u32::try_from(obstacles.len()).is_err() {
        return Err(MapError::TooManyObstacles {
            count: obstacles.len(),
        });
    }
    for (i, rect) in obstacles.iter().enumerate() {
        if !rect.inside_bounds(size) {
            return Err(MapError::ObstacleOutOfBounds {
                id: ObstacleId(i as u32),
                rect: *rect,
                size,
            });
        }
    }
    Ok(())
}

/// Validate a robot placement without touching the map.
///
/// Bounds are checked before obstruction so that an off-grid request is
/// always reported as out of bounds.
pub(crate) fn check_placement<M: SpatialMap + ?Sized>(
    map: &M,
    x: i32,
    y: i32,
) -> Result<Cell, MapError> {
    let cell = Cell::new(x, y);
    let size = map.size();
    if !cell.in_bounds(size) {
        return Err(MapError::RobotOutOfBounds { cell, size });
    }
    if map.cell_obstructed(x, y) {
        return Err(MapError::Obstructed { cell });
    }
    Ok(cell)
}
