//! Benchmark profiles and utilities for the Obstruct grid maps.
//!
//! Provides pre-built [`MapConfig`] profiles for benchmarking:
//!
//! - [`sparse_profile`]: 1000x1000 grid with 50 large obstacles
//! - [`dense_profile`]: 200x200 grid with up to 400 small obstacles
//! - [`banded_profile`]: 5000x5000 grid with 100 full-width bands
//! - [`robot_positions`]: deterministic free-cell placement via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use obstruct::config::MapConfig;
use obstruct_core::Cell;
use obstruct_space::SpatialMap;
use obstruct_test_utils::fixtures;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Build a sparse profile: few obstacles, large total area.
pub fn sparse_profile(seed: u64) -> MapConfig {
    MapConfig::new(1000, fixtures::random_obstacles(1000, 50, 40, seed))
}

/// Build a dense profile: many small obstacles on a small grid.
pub fn dense_profile(seed: u64) -> MapConfig {
    MapConfig::new(200, fixtures::random_obstacles(200, 400, 8, seed))
}

/// Build the banded profile: 100 bands of 15 rows on a 5000x5000 grid.
pub fn banded_profile() -> MapConfig {
    MapConfig::new(fixtures::BAND_MAP_SIZE, fixtures::banded_obstacles())
}

/// Pick up to `n` unobstructed cells of `map`, deterministic for a given seed.
///
/// Cells are drawn uniformly and rejected while obstructed; duplicates are
/// allowed. Crowded maps may yield fewer than `n` cells.
pub fn robot_positions(map: &dyn SpatialMap, n: usize, seed: u64) -> Vec<Cell> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let size = map.size() as i32;
    let mut positions = Vec::with_capacity(n);
    let attempts = n.saturating_mul(100).max(100);

    for _ in 0..attempts {
        if positions.len() == n {
            break;
        }
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        if !map.cell_obstructed(x, y) {
            positions.push(Cell::new(x, y));
        }
    }

    positions
}
