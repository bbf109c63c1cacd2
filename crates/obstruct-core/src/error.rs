//! Error types for obstacle geometry.

use std::error::Error;
use std::fmt;

/// A rectangle could not be constructed from the supplied corners.
///
/// Raised only by [`Rectangle::new`](crate::Rectangle::new). The rectangle is
/// never partially built; the caller must discard the obstacle or ask for
/// new corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// At least one corner coordinate is negative.
    NegativeCoordinate {
        /// The corners as supplied: `[x0, y0, x1, y1]`.
        corners: [i32; 4],
    },
    /// Both corners share an x or a y coordinate, so the rectangle covers
    /// no cells.
    ZeroArea {
        /// The corners as supplied: `[x0, y0, x1, y1]`.
        corners: [i32; 4],
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeCoordinate { corners } => {
                write!(
                    f,
                    "rectangle corners {corners:?} must have non-negative coordinates"
                )
            }
            Self::ZeroArea { corners } => {
                write!(f, "rectangle corners {corners:?} enclose zero area")
            }
        }
    }
}

impl Error for GeometryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_corners() {
        let e = GeometryError::ZeroArea {
            corners: [4, 4, 4, 4],
        };
        assert_eq!(
            e.to_string(),
            "rectangle corners [4, 4, 4, 4] enclose zero area"
        );
        let e = GeometryError::NegativeCoordinate {
            corners: [-3, 0, 1, 2],
        };
        assert!(e.to_string().contains("non-negative"));
    }
}
