//! Per-row and per-column sorted occupancy tables.
//!
//! Built once from an obstacle list by rasterising every covered cell. A row
//! table maps each occupied row to the sorted, duplicate-free list of its
//! occupied columns; the column table is the transpose. Lines with no
//! occupied cell have no entry.

use indexmap::IndexMap;
use obstruct_core::Rectangle;

/// Sorted, duplicate-free coordinates of the occupied cells on one line.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SortedLine(Vec<i32>);

impl SortedLine {
    /// Sort and deduplicate `coords`.
    pub fn from_unsorted(mut coords: Vec<i32>) -> Self {
        coords.sort_unstable();
        coords.dedup();
        Self(coords)
    }

    /// Number of occupied cells on the line.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing on the line is occupied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occupied coordinates in ascending order.
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    /// Returns `true` if `coord` is occupied. O(log n).
    pub fn contains(&self, coord: i32) -> bool {
        self.0.binary_search(&coord).is_ok()
    }

    /// Largest occupied coordinate strictly below `at` and smallest strictly
    /// above it, from a single lower-bound search.
    pub fn neighbours(&self, at: i32) -> (Option<i32>, Option<i32>) {
        let lower = self.0.partition_point(|&c| c < at);
        let before = lower.checked_sub(1).map(|i| self.0[i]);
        let skip = usize::from(self.0.get(lower) == Some(&at));
        let after = self.0.get(lower + skip).copied();
        (before, after)
    }
}

/// Occupancy tables for a fixed obstacle set.
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    by_row: IndexMap<i32, SortedLine>,
    by_column: IndexMap<i32, SortedLine>,
}

impl OccupancyIndex {
    /// Rasterise `obstacles` into row and column tables.
    ///
    /// Cost and memory are O(total obstacle area). Overlapping cells are
    /// stored once.
    pub fn build(obstacles: &[Rectangle]) -> Self {
        let mut rows: IndexMap<i32, Vec<i32>> = IndexMap::new();
        let mut columns: IndexMap<i32, Vec<i32>> = IndexMap::new();
        for rect in obstacles {
            let (x_min, x_max) = rect.x_range();
            let (y_min, y_max) = rect.y_range();
            for y in y_min..y_max {
                rows.entry(y).or_default().extend(x_min..x_max);
            }
            for x in x_min..x_max {
                columns.entry(x).or_default().extend(y_min..y_max);
            }
        }
        Self {
            by_row: finish(rows),
            by_column: finish(columns),
        }
    }

    /// Occupied columns of row `y`, if any.
    pub fn row(&self, y: i32) -> Option<&SortedLine> {
        self.by_row.get(&y)
    }

    /// Occupied rows of column `x`, if any.
    pub fn column(&self, x: i32) -> Option<&SortedLine> {
        self.by_column.get(&x)
    }

    /// Returns `true` if cell `(x, y)` is occupied.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.column(x).is_some_and(|rows| rows.contains(y))
    }

    /// Number of distinct occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.by_row.values().map(SortedLine::len).sum()
    }

    /// Total entries across both tables.
    pub fn entries(&self) -> usize {
        2 * self.occupied_cells()
    }
}

fn finish(lines: IndexMap<i32, Vec<i32>>) -> IndexMap<i32, SortedLine> {
    lines
        .into_iter()
        .map(|(key, coords)| (key, SortedLine::from_unsorted(coords)))
        .collect()
}
