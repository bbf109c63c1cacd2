//! Strongly-typed identifiers.

use std::fmt;

/// Identifies an obstacle within a map.
///
/// Obstacles are bulk-loaded at map construction and assigned sequential
/// IDs in the order they were supplied. `ObstacleId(n)` corresponds to the
/// n-th rectangle of the construction input. IDs carry no geometric meaning;
/// they only give callers a stable handle for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(pub u32);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
