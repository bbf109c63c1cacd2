//! Map configuration, validation, and error types.
//!
//! [`MapConfig`] is the builder input for constructing a map.
//! [`validate()`](MapConfig::validate) checks every structural invariant up
//! front; [`build()`](MapConfig::build) validates and then constructs the
//! resolved strategy behind `Box<dyn SpatialMap>`.

use std::error::Error;
use std::fmt;

use obstruct_core::{GeometryError, ObstacleId, Rectangle};
use obstruct_space::grid::check_construction;
use obstruct_space::{MapError, SpatialMap, Strategy, Workload};

// ── StrategyChoice ─────────────────────────────────────────────────

/// How [`MapConfig`] picks an index strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyChoice {
    /// Always use the given strategy.
    Fixed(Strategy),
    /// Defer to [`Strategy::recommend`] for the configured obstacles.
    Auto {
        /// Approximate number of robot placements the map will serve.
        expected_placements: u64,
    },
}

impl Default for StrategyChoice {
    fn default() -> Self {
        Self::Fixed(Strategy::Indexed)
    }
}

// ── OverlapPolicy ──────────────────────────────────────────────────

/// Whether obstacles may share cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlapPolicy {
    /// Overlapping obstacles are stored as given. Queries treat a cell as
    /// obstructed if any obstacle covers it.
    #[default]
    Allow,
    /// Any pair of overlapping obstacles fails validation.
    Reject,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while converting or validating a [`MapConfig`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// A corner tuple did not describe a valid rectangle.
    Geometry {
        /// Position of the offending tuple in the input.
        index: usize,
        /// Why the rectangle was rejected.
        source: GeometryError,
    },
    /// Two obstacles share at least one cell under [`OverlapPolicy::Reject`].
    OverlappingObstacles {
        /// The earlier obstacle.
        first: ObstacleId,
        /// The later obstacle.
        second: ObstacleId,
    },
    /// Map construction rejected the size or an obstacle.
    Map(MapError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry { index, source } => write!(f, "obstacle {index}: {source}"),
            Self::OverlappingObstacles { first, second } => {
                write!(f, "obstacles {first} and {second} overlap")
            }
            Self::Map(e) => write!(f, "map: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Geometry { source, .. } => Some(source),
            Self::Map(e) => Some(e),
            Self::OverlappingObstacles { .. } => None,
        }
    }
}

impl From<MapError> for ConfigError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

// ── MapConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a map.
///
/// Obstacles keep their position in `obstacles` as their [`ObstacleId`].
#[derive(Clone, Debug, PartialEq)]
pub struct MapConfig {
    /// Side length of the square grid. Must be at least 1.
    pub size: u32,
    /// Obstacles in insertion order.
    pub obstacles: Vec<Rectangle>,
    /// Index strategy selection. Default: `Fixed(Indexed)`.
    pub strategy: StrategyChoice,
    /// Overlap handling. Default: `Allow`.
    pub overlap: OverlapPolicy,
}

impl MapConfig {
    /// Configuration with default strategy and overlap policy.
    pub fn new(size: u32, obstacles: Vec<Rectangle>) -> Self {
        Self {
            size,
            obstacles,
            strategy: StrategyChoice::default(),
            overlap: OverlapPolicy::default(),
        }
    }

    /// Convert raw `(x0, y0, x1, y1)` corner tuples into a configuration.
    ///
    /// Corners may be given in any order. The first invalid tuple is
    /// reported together with its position.
    pub fn from_corners(
        size: u32,
        corners: &[(i32, i32, i32, i32)],
    ) -> Result<Self, ConfigError> {
        let obstacles = corners
            .iter()
            .enumerate()
            .map(|(index, &(x0, y0, x1, y1))| {
                Rectangle::new(x0, y0, x1, y1)
                    .map_err(|source| ConfigError::Geometry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(size, obstacles))
    }

    /// Use a fixed strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = StrategyChoice::Fixed(strategy);
        self
    }

    /// Let [`Strategy::recommend`] choose for the expected placement count.
    pub fn with_auto_strategy(mut self, expected_placements: u64) -> Self {
        self.strategy = StrategyChoice::Auto {
            expected_placements,
        };
        self
    }

    /// Set the overlap policy.
    pub fn with_overlap(mut self, overlap: OverlapPolicy) -> Self {
        self.overlap = overlap;
        self
    }

    /// Check all structural invariants without building a map.
    ///
    /// 1. Size is non-zero and representable.
    /// 2. Every obstacle lies inside the grid.
    /// 3. Under [`OverlapPolicy::Reject`], no two obstacles share a cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1, 2.
        check_construction(self.size, &self.obstacles)?;

        // 3. Pairwise; the first overlapping pair in id order is reported.
        if self.overlap == OverlapPolicy::Reject {
            for (i, a) in self.obstacles.iter().enumerate() {
                for (j, b) in self.obstacles.iter().enumerate().skip(i + 1) {
                    if a.overlaps(b) {
                        return Err(ConfigError::OverlappingObstacles {
                            first: ObstacleId(i as u32),
                            second: ObstacleId(j as u32),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// The strategy [`build()`](Self::build) will construct.
    pub fn resolved_strategy(&self) -> Strategy {
        match self.strategy {
            StrategyChoice::Fixed(strategy) => strategy,
            StrategyChoice::Auto {
                expected_placements,
            } => Strategy::recommend(&Workload::new(
                self.size,
                &self.obstacles,
                expected_placements,
            )),
        }
    }

    /// Validate and construct the map. The robot starts unpositioned.
    pub fn build(self) -> Result<Box<dyn SpatialMap>, ConfigError> {
        self.validate()?;
        let strategy = self.resolved_strategy();
        Ok(strategy.build(self.size, self.obstacles)?)
    }
}
