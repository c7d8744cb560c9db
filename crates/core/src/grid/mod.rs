//! Static terrain covariate grids.

pub mod terrain;

pub use terrain::{TerrainError, TerrainModel};
