//! Core types for the Obstruct grid map.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the geometry shared by every map strategy: the [`Rectangle`] obstacle
//! primitive, [`Cell`] and [`Point`] coordinates, the four cardinal
//! [`Direction`]s with their per-direction [`Nearest`] container, obstacle
//! identifiers, and [`GeometryError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod id;
pub mod rect;

pub use cell::{Cell, Point};
pub use direction::{Direction, Nearest};
pub use error::GeometryError;
pub use id::ObstacleId;
pub use rect::Rectangle;
