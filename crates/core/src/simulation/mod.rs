//! Simulation driver composing mapper, terrain, and spread engine.
//!
//! `FireSimulation` is the single entry point the presentation layer
//! calls: it maps a geographic ignition point onto the grid, runs the
//! spread engine over a fixed horizon, and hands back the full frame
//! sequence for replay. A run is atomic; it either returns the complete
//! sequence or fails at composition time, never partway through.

use crate::core_types::geo::{BoundingBox, GridIndex, IgnitionPoint};
use crate::core_types::raster::Grid;
use crate::grid::{TerrainError, TerrainModel};
use crate::spread::{BurnState, ProbabilitySource, SeededSource, SpreadEngine, ThreadRngSource};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Default horizon in transition steps: one rendered frame per hour for
/// a 12-hour forecast, plus the ignition frame.
pub const DEFAULT_STEPS: usize = 12;

/// Errors raised while composing a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Bounding box with a non-positive latitude or longitude span.
    InvalidBoundingBox(BoundingBox),
    /// Terrain covariates rejected at construction.
    Terrain(TerrainError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidBoundingBox(bounds) => write!(
                f,
                "invalid bounding box: lat {}..{}, lon {}..{} (northeast corner must lie north-east of the southwest corner)",
                bounds.lat_min, bounds.lat_max, bounds.lon_min, bounds.lon_max
            ),
            SimulationError::Terrain(err) => write!(f, "invalid terrain: {err}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Terrain(err) => Some(err),
            SimulationError::InvalidBoundingBox(_) => None,
        }
    }
}

impl From<TerrainError> for SimulationError {
    fn from(err: TerrainError) -> Self {
        SimulationError::Terrain(err)
    }
}

/// Ordered sequence of burn-state grids from one run.
///
/// Element 0 is the ignition state; element `t` is the state after `t`
/// transition steps. Once a cell burns in any frame it stays burning in
/// every later frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    ignition: GridIndex,
    frames: Vec<Grid<BurnState>>,
}

impl SimulationResult {
    /// Grid index the run was seeded at.
    #[inline]
    pub fn ignition(&self) -> GridIndex {
        self.ignition
    }

    /// All frames, ignition state first.
    #[inline]
    pub fn frames(&self) -> &[Grid<BurnState>] {
        &self.frames
    }

    /// Number of frames (`steps + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame after `t` steps, if within the horizon.
    pub fn frame(&self, t: usize) -> Option<&Grid<BurnState>> {
        self.frames.get(t)
    }

    /// Last frame of the horizon.
    pub fn final_frame(&self) -> &Grid<BurnState> {
        &self.frames[self.frames.len() - 1]
    }

    /// Burning-cell count after `t` steps.
    pub fn burned_cells(&self, t: usize) -> Option<usize> {
        self.frame(t).map(count_burning)
    }

    /// Burning-cell count for every frame in order.
    pub fn burned_per_frame(&self) -> Vec<usize> {
        self.frames.iter().map(count_burning).collect()
    }
}

fn count_burning(frame: &Grid<BurnState>) -> usize {
    frame.cells().iter().filter(|c| c.is_burning()).count()
}

/// Composed wildfire simulation over one terrain and geographic extent.
///
/// Owns the immutable terrain snapshot for its lifetime; every run reads
/// it and allocates its own frame sequence, so independent runs can
/// execute in parallel (see [`FireSimulation::run_batch`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireSimulation {
    terrain: TerrainModel,
    bounds: BoundingBox,
}

impl FireSimulation {
    /// Compose terrain and geographic bounds, failing fast on a
    /// degenerate bounding box. Terrain dimensions were already
    /// validated when the [`TerrainModel`] was built.
    pub fn new(terrain: TerrainModel, bounds: BoundingBox) -> Result<Self, SimulationError> {
        if !bounds.is_valid() {
            return Err(SimulationError::InvalidBoundingBox(bounds));
        }
        info!(
            "simulation composed: {}x{} grid over lat {}..{}, lon {}..{}",
            terrain.height(),
            terrain.width(),
            bounds.lat_min,
            bounds.lat_max,
            bounds.lon_min,
            bounds.lon_max
        );
        Ok(FireSimulation { terrain, bounds })
    }

    /// Terrain snapshot this simulation reads.
    pub fn terrain(&self) -> &TerrainModel {
        &self.terrain
    }

    /// Geographic extent the grid covers.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Clamped grid index for a geographic point.
    pub fn ignition_index(&self, point: IgnitionPoint) -> GridIndex {
        self.bounds
            .grid_index(point, self.terrain.height(), self.terrain.width())
    }

    /// Run with fresh entropy.
    pub fn run(&self, point: IgnitionPoint, steps: usize) -> SimulationResult {
        self.run_with_source(point, steps, &mut ThreadRngSource::new())
    }

    /// Run with a fixed seed; the same seed replays the same sequence.
    pub fn run_seeded(&self, point: IgnitionPoint, steps: usize, seed: u64) -> SimulationResult {
        self.run_with_source(point, steps, &mut SeededSource::new(seed))
    }

    /// Run drawing from the given probability source.
    pub fn run_with_source<S: ProbabilitySource>(
        &self,
        point: IgnitionPoint,
        steps: usize,
        source: &mut S,
    ) -> SimulationResult {
        let ignition = self.ignition_index(point);
        info!(
            "igniting at ({:.4}, {:.4}) -> grid ({}, {}), horizon {} steps",
            point.latitude, point.longitude, ignition.row, ignition.col, steps
        );
        let engine = SpreadEngine::new(&self.terrain);
        let frames = engine.run(ignition, steps, source);
        let result = SimulationResult { ignition, frames };
        debug!(
            "run complete: {} frames, {} cells burning at the end",
            result.len(),
            count_burning(result.final_frame())
        );
        result
    }

    /// Run several independent ignition points in parallel.
    ///
    /// Each run owns its frame sequence and only reads the shared
    /// terrain, so no synchronization is needed. Stepping inside each
    /// run stays sequential.
    pub fn run_batch(&self, points: &[IgnitionPoint], steps: usize) -> Vec<SimulationResult> {
        points
            .par_iter()
            .map(|&point| self.run(point, steps))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_bounding_box_rejected() {
        let terrain = TerrainModel::uniform(10, 10, 0.5, 0.5).unwrap();
        let bounds = BoundingBox::new(31.5, 77.5, 29.5, 80.0);
        let err = FireSimulation::new(terrain, bounds).unwrap_err();
        assert_eq!(err, SimulationError::InvalidBoundingBox(bounds));
        assert!(err.to_string().contains("invalid bounding box"));
    }

    #[test]
    fn test_terrain_error_wraps() {
        let err: SimulationError = TerrainError::EmptyGrid.into();
        assert_eq!(err, SimulationError::Terrain(TerrainError::EmptyGrid));
        assert!(err.to_string().contains("invalid terrain"));
    }
}
