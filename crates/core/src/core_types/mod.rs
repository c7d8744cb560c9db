//! Core geometric and raster types shared across the crate.

pub mod geo;
pub mod raster;

pub use geo::{BoundingBox, GridIndex, IgnitionPoint};
pub use raster::Grid;
