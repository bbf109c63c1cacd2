//! Obstruct: square grid maps with rectangular obstacles, answering
//! "where is the nearest obstruction in each direction?" for a robot.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! Obstruct sub-crates and adds [`MapConfig`](config::MapConfig), the
//! validated builder input for a map.
//!
//! # Quick start
//!
//! ```rust
//! use obstruct::prelude::*;
//!
//! // A 5x5 map with the top two rows and left two columns blocked.
//! let config = MapConfig::from_corners(5, &[(0, 0, 5, 2), (0, 5, 2, 0), (5, 5, 4, 4)]).unwrap();
//! let mut map = config.build().unwrap();
//!
//! map.position_robot(3, 3).unwrap();
//! let cells = map.nearest_obstructed_cells().unwrap();
//! assert_eq!(cells.up, Cell::new(3, 1));
//! assert_eq!(cells.left, Cell::new(1, 3));
//! assert_eq!(cells.down, Cell::new(3, 5));
//! assert_eq!(cells.right, Cell::new(5, 3));
//!
//! let points = map.nearest_obstructions().unwrap();
//! assert_eq!(points.up, Point::new(3.5, 2.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `obstruct-core` | Rectangles, cells, directions, obstacle ids |
//! | [`space`] | `obstruct-space` | The map trait and both index strategies |
//! | [`config`] | this crate | Map configuration and validation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;

/// Geometry primitives and identifiers (`obstruct-core`).
///
/// [`types::Rectangle`] is the obstacle shape; [`types::Nearest`] carries one
/// value per [`types::Direction`].
pub use obstruct_core as types;

/// Map contract and index strategies (`obstruct-space`).
///
/// Provides the [`space::SpatialMap`] trait and its implementations
/// [`space::LinearScanMap`] and [`space::IndexedMap`].
pub use obstruct_space as space;

/// Common imports for typical Obstruct usage.
///
/// ```rust
/// use obstruct::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use obstruct_core::{Cell, Direction, GeometryError, Nearest, ObstacleId, Point, Rectangle};

    // Maps
    pub use obstruct_space::{IndexedMap, LinearScanMap, MapError, MapStats, SpatialMap, Strategy};

    // Configuration
    pub use crate::config::{ConfigError, MapConfig, OverlapPolicy, StrategyChoice};
}
