//! Error types for map construction and robot queries.

use obstruct_core::{Cell, ObstacleId, Rectangle};
use std::error::Error;
use std::fmt;

/// Errors arising from map construction, robot placement, or queries.
///
/// Every error is detected synchronously by the offending call and leaves
/// the map unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    /// Attempted to construct a map with side length 0.
    EmptyMap,
    /// The side length does not fit the `i32` coordinate space.
    DimensionTooLarge {
        /// The requested side length.
        value: u32,
        /// The largest supported side length.
        max: u32,
    },
    /// More obstacles than [`ObstacleId`] can number.
    TooManyObstacles {
        /// Number of obstacles supplied.
        count: usize,
    },
    /// An obstacle extends past the map edge.
    ObstacleOutOfBounds {
        /// Position of the obstacle in the construction input.
        id: ObstacleId,
        /// The offending rectangle.
        rect: Rectangle,
        /// Map side length.
        size: u32,
    },
    /// A robot coordinate lies outside `[0, size) x [0, size)`.
    RobotOutOfBounds {
        /// The requested cell.
        cell: Cell,
        /// Map side length.
        size: u32,
    },
    /// A robot was placed on a cell covered by an obstacle.
    Obstructed {
        /// The requested cell.
        cell: Cell,
    },
    /// A nearest-obstruction query was issued before any successful
    /// placement.
    RobotNotPositioned,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMap => write!(f, "map must have at least one cell"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "map size {value} exceeds maximum {max}")
            }
            Self::TooManyObstacles { count } => {
                write!(f, "{count} obstacles exceed the obstacle id range")
            }
            Self::ObstacleOutOfBounds { id, rect, size } => {
                write!(
                    f,
                    "obstacle {id} {rect} is out of map bounds [0, {size}) x [0, {size})"
                )
            }
            Self::RobotOutOfBounds { cell, size } => {
                write!(
                    f,
                    "robot cell {cell} is out of map bounds [0, {size}) x [0, {size})"
                )
            }
            Self::Obstructed { cell } => {
                write!(f, "cannot place robot on obstructed cell {cell}")
            }
            Self::RobotNotPositioned => {
                write!(f, "robot is not positioned; position the robot first")
            }
        }
    }
}

impl Error for MapError {}
