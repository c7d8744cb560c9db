//! Static per-cell terrain covariates for fire spread.
//!
//! Holds two co-registered rasters over the same `height x width` grid:
//! `slope` (normalized terrain steepness) and `fuel` (land-cover
//! flammability). Both are expected in `[0, 1]` and stay fixed for the
//! lifetime of a simulation run. Loading real raster/GIS data is out of
//! scope; the random constructors stand in for it session by session.

use crate::core_types::raster::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Co-registered slope and fuel covariate grids.
///
/// Construction validates that both rasters share dimensions and are
/// non-empty, so every downstream index into one grid is valid for the
/// other. The model is read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainModel {
    slope: Grid<f32>,
    fuel: Grid<f32>,
}

/// Errors raised while assembling terrain covariates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    /// Slope and fuel rasters cover different grids.
    DimensionMismatch {
        slope: (usize, usize),
        fuel: (usize, usize),
    },
    /// Zero rows or zero columns.
    EmptyGrid,
}

impl fmt::Display for TerrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerrainError::DimensionMismatch { slope, fuel } => write!(
                f,
                "slope grid is {}x{} but fuel grid is {}x{}",
                slope.0, slope.1, fuel.0, fuel.1
            ),
            TerrainError::EmptyGrid => write!(f, "terrain grid must have at least one cell"),
        }
    }
}

impl std::error::Error for TerrainError {}

impl TerrainModel {
    /// Build a terrain model from pre-computed covariate rasters.
    ///
    /// Fails fast on mismatched dimensions or an empty grid; no
    /// simulation step runs against an inconsistent terrain.
    pub fn from_grids(slope: Grid<f32>, fuel: Grid<f32>) -> Result<Self, TerrainError> {
        if slope.dimensions() != fuel.dimensions() {
            return Err(TerrainError::DimensionMismatch {
                slope: slope.dimensions(),
                fuel: fuel.dimensions(),
            });
        }
        if slope.height() == 0 || slope.width() == 0 {
            return Err(TerrainError::EmptyGrid);
        }
        Ok(TerrainModel { slope, fuel })
    }

    /// Random covariates in `[0, 1)` from fresh thread entropy.
    ///
    /// Placeholder for real raster data, regenerated per session.
    pub fn random(height: usize, width: usize) -> Result<Self, TerrainError> {
        let mut rng = rand::rng();
        Self::random_from(height, width, &mut rng)
    }

    /// Random covariates in `[0, 1)` from a fixed seed, for reproducible
    /// sessions.
    pub fn random_seeded(height: usize, width: usize, seed: u64) -> Result<Self, TerrainError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random_from(height, width, &mut rng)
    }

    fn random_from<R: Rng>(height: usize, width: usize, rng: &mut R) -> Result<Self, TerrainError> {
        let slope = Grid::from_fn(height, width, |_, _| rng.random::<f32>());
        let fuel = Grid::from_fn(height, width, |_, _| rng.random::<f32>());
        Self::from_grids(slope, fuel)
    }

    /// Constant covariates everywhere. Used by tests and demos to pin
    /// the spread probability.
    pub fn uniform(height: usize, width: usize, slope: f32, fuel: f32) -> Result<Self, TerrainError> {
        Self::from_grids(
            Grid::filled(height, width, slope),
            Grid::filled(height, width, fuel),
        )
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.slope.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.slope.width()
    }

    /// `(height, width)` pair.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        self.slope.dimensions()
    }

    /// `(slope, fuel)` covariates at one cell.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> (f32, f32) {
        (self.slope[(i, j)], self.fuel[(i, j)])
    }

    /// Normalized slope at one cell.
    #[inline]
    pub fn slope_at(&self, i: usize, j: usize) -> f32 {
        self.slope[(i, j)]
    }

    /// Normalized fuel load at one cell.
    #[inline]
    pub fn fuel_at(&self, i: usize, j: usize) -> f32 {
        self.fuel[(i, j)]
    }
}
