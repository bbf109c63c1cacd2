//! Reusable obstacle fixtures.
//!
//! - [`corner_obstacles`]: three rectangles hugging the corners of a 5x5 map.
//! - [`corridor_obstacles`]: two full-width walls on a 5x5 map.
//! - [`banded_obstacles`]: 100 horizontal bands on a 5000x5000 map.
//! - [`random_obstacles`]: seeded, non-overlapping random rectangles.

use obstruct_core::Rectangle;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Side length used by [`corner_obstacles`] and [`corridor_obstacles`].
pub const SMALL_MAP_SIZE: u32 = 5;

/// Side length used by [`banded_obstacles`].
pub const BAND_MAP_SIZE: u32 = 5000;
/// Row distance between the tops of consecutive bands.
pub const BAND_PITCH: i32 = 50;
/// Rows covered by each band.
pub const BAND_THICKNESS: i32 = 15;
/// Number of bands.
pub const BAND_COUNT: i32 = 100;

fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rectangle {
    Rectangle::new(x0, y0, x1, y1).expect("fixture rectangles are valid")
}

/// Top two rows, left two columns, and the bottom-right cell of a 5x5 map.
///
/// Corners are given in mixed order on purpose.
pub fn corner_obstacles() -> Vec<Rectangle> {
    vec![rect(0, 0, 5, 2), rect(0, 5, 2, 0), rect(5, 5, 4, 4)]
}

/// Rows 0 and 3 fully blocked on a 5x5 map, leaving a corridor on rows 1-2.
pub fn corridor_obstacles() -> Vec<Rectangle> {
    vec![rect(0, 0, 5, 1), rect(0, 3, 5, 4)]
}

/// Band `i` covers rows `[50i, 50i + 15)` across the full map width.
pub fn banded_obstacles() -> Vec<Rectangle> {
    (0..BAND_COUNT)
        .map(|i| {
            rect(
                0,
                BAND_PITCH * i,
                BAND_MAP_SIZE as i32,
                BAND_PITCH * i + BAND_THICKNESS,
            )
        })
        .collect()
}

/// Up to `count` random rectangles inside a `size` map, sides at most
/// `max_side`, with no two overlapping.
///
/// Deterministic for a given seed. Placement uses rejection sampling with a
/// bounded number of attempts, so crowded maps may return fewer than
/// `count` rectangles.
pub fn random_obstacles(size: u32, count: usize, max_side: u32, seed: u64) -> Vec<Rectangle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out: Vec<Rectangle> = Vec::with_capacity(count);
    let attempts = count.saturating_mul(50).max(50);
    for _ in 0..attempts {
        if out.len() == count {
            break;
        }
        let candidate = random_rect(&mut rng, size, max_side);
        if out.iter().all(|r| !r.overlaps(&candidate)) {
            out.push(candidate);
        }
    }
    out
}

/// `count` random rectangles that may overlap each other.
pub fn random_overlapping_obstacles(
    size: u32,
    count: usize,
    max_side: u32,
    seed: u64,
) -> Vec<Rectangle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| random_rect(&mut rng, size, max_side))
        .collect()
}

fn random_rect(rng: &mut ChaCha8Rng, size: u32, max_side: u32) -> Rectangle {
    let n = size.max(1) as i32;
    let max_side = max_side.clamp(1, size.max(1)) as i32;
    let w = rng.random_range(1..=max_side);
    let h = rng.random_range(1..=max_side);
    let x = rng.random_range(0..=n - w);
    let y = rng.random_range(0..=n - h);
    // Alternate corner order so constructors see both forms.
    if rng.random_bool(0.5) {
        rect(x, y, x + w, y + h)
    } else {
        rect(x + w, y, x, y + h)
    }
}
