//! Footprint counters for a constructed map.
//!
//! [`MapStats`] is a snapshot of a map's size and index footprint, used to
//! compare strategies and to feed [`Strategy::recommend`](crate::Strategy::recommend).

use crate::strategy::Strategy;
use obstruct_core::Rectangle;

/// Size and memory counters for one map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapStats {
    /// Strategy answering queries.
    pub strategy: Strategy,
    /// Grid side length.
    pub size: u32,
    /// Number of stored obstacles.
    pub obstacle_count: usize,
    /// Sum of obstacle areas, counting overlapping cells once per obstacle.
    /// Saturates at `u64::MAX`.
    pub obstacle_area: u64,
    /// Entries held by the precomputed occupancy index, across both the
    /// per-row and per-column tables. Zero for strategies without one.
    pub index_entries: usize,
}

impl MapStats {
    /// Build stats from an obstacle slice plus an index footprint.
    pub fn from_obstacles(
        strategy: Strategy,
        size: u32,
        obstacles: &[Rectangle],
        index_entries: usize,
    ) -> Self {
        Self {
            strategy,
            size,
            obstacle_count: obstacles.len(),
            obstacle_area: total_area(obstacles),
            index_entries,
        }
    }
}

/// Sum of obstacle areas, saturating at `u64::MAX`.
///
/// Overlapping obstacles on a maximal grid can exceed the `u64` range.
pub fn total_area(obstacles: &[Rectangle]) -> u64 {
    obstacles
        .iter()
        .fold(0u64, |acc, rect| acc.saturating_add(rect.area()))
}
