//! Grid maps answering nearest-obstruction queries for a single robot.
//!
//! This crate defines the [`SpatialMap`] trait, the contract shared by every
//! index strategy: grid size, robot placement, obstruction tests and the
//! four-directional nearest-obstruction query. Two strategies implement it
//! with different cost trade-offs.
//!
//! # Strategies
//!
//! - [`LinearScanMap`]: O(1) preprocessing, O(k) per query for k obstacles
//! - [`IndexedMap`]: O(area) preprocessing into an [`OccupancyIndex`],
//!   O(log n) per query
//!
//! Both report identical results for the same obstacles and robot cell.
//! [`Strategy::recommend`] gives an advisory choice for a [`Workload`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod grid;
pub mod indexed;
pub mod linear;
pub mod map;
pub mod occupancy;
pub mod stats;
pub mod strategy;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::MapError;
pub use grid::MAX_SIZE;
pub use indexed::IndexedMap;
pub use linear::LinearScanMap;
pub use map::SpatialMap;
pub use occupancy::{OccupancyIndex, SortedLine};
pub use stats::MapStats;
pub use strategy::{Strategy, Workload};
