//! Index strategy selection.

use crate::error::MapError;
use crate::indexed::IndexedMap;
use crate::linear::LinearScanMap;
use crate::map::SpatialMap;
use crate::stats::total_area;
use obstruct_core::Rectangle;
use std::fmt;

/// Which index answers obstruction and nearest-obstruction queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Scan every obstacle per query ([`LinearScanMap`]).
    LinearScan,
    /// Precomputed sorted occupancy tables ([`IndexedMap`]).
    Indexed,
}

impl Strategy {
    /// Construct a map of this strategy behind `dyn SpatialMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use obstruct_space::{SpatialMap, Strategy};
    ///
    /// let map = Strategy::Indexed.build(8, vec![]).unwrap();
    /// assert_eq!(map.strategy(), Strategy::Indexed);
    /// assert_eq!(map.size(), 8);
    /// ```
    pub fn build(
        self,
        size: u32,
        obstacles: Vec<Rectangle>,
    ) -> Result<Box<dyn SpatialMap>, MapError> {
        let map: Box<dyn SpatialMap> = match self {
            Self::LinearScan => Box::new(LinearScanMap::new(size, obstacles)?),
            Self::Indexed => Box::new(IndexedMap::new(size, obstacles)?),
        };
        Ok(map)
    }

    /// Advisory choice for a workload.
    ///
    /// Estimates the indexed cost as the one-off rasterisation plus a
    /// logarithmic lookup per placement, `area + p * log2(n)`, and the
    /// linear cost as a full scan per placement, `p * k`. Picks `Indexed`
    /// only when it is strictly cheaper.
    pub fn recommend(workload: &Workload) -> Self {
        let placements = workload.expected_placements.max(1) as f64;
        let log_n = f64::from(workload.size.max(1)).log2();
        let indexed = workload.obstacle_area as f64 + placements * log_n;
        let linear = placements * workload.obstacle_count as f64;
        if indexed < linear {
            Self::Indexed
        } else {
            Self::LinearScan
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinearScan => write!(f, "linear-scan"),
            Self::Indexed => write!(f, "indexed"),
        }
    }
}

/// Inputs to [`Strategy::recommend`].
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Workload {
    /// Grid side length.
    pub size: u32,
    /// Number of obstacles.
    pub obstacle_count: usize,
    /// Sum of obstacle areas, saturating at `u64::MAX`.
    pub obstacle_area: u64,
    /// Approximate number of robot positions that will be queried.
    /// Treated as at least 1.
    pub expected_placements: u64,
}

impl Workload {
    /// Describe a workload over `obstacles`.
    pub fn new(size: u32, obstacles: &[Rectangle], expected_placements: u64) -> Self {
        Self {
            size,
            obstacle_count: obstacles.len(),
            obstacle_area: total_area(obstacles),
            expected_placements,
        }
    }
}
