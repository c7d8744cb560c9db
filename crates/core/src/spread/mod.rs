//! Stochastic fire-spread engine.
//!
//! Advances a burn-state grid one step at a time: every interior burning
//! cell exposes its eight neighbors, and each still-unburned neighbor
//! ignites with a probability linear in the terrain covariates at the
//! neighbor. Burning is monotonic; the model never distinguishes
//! "currently burning" from "already burned" and no cell ever reverts.

pub mod sampler;

pub use sampler::{ProbabilitySource, SeededSource, ThreadRngSource};

use crate::core_types::geo::GridIndex;
use crate::core_types::raster::Grid;
use crate::grid::TerrainModel;
use serde::{Deserialize, Serialize};

/// Baseline per-step chance that fire jumps to an exposed neighbor on
/// flat, bare terrain.
pub const BASE_SPREAD_PROBABILITY: f32 = 0.2;

/// Contribution of the slope covariate at full steepness.
pub const SLOPE_WEIGHT: f32 = 0.4;

/// Contribution of the fuel covariate at full load.
pub const FUEL_WEIGHT: f32 = 0.4;

/// Moore neighborhood: the eight cells surrounding a source.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Per-cell burn state. Transitions are one-directional:
/// unburned -> burning, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BurnState {
    #[default]
    Unburned,
    Burning,
}

impl BurnState {
    #[inline]
    pub fn is_burning(self) -> bool {
        matches!(self, BurnState::Burning)
    }
}

/// Per-neighbor ignition probability, linear in the covariates at the
/// receiving cell.
///
/// Clamped to `[0, 1]`: covariates are expected in `[0, 1]`, but values
/// outside that range cap the probability instead of overflowing it.
#[inline]
pub fn ignition_probability(slope: f32, fuel: f32) -> f32 {
    (BASE_SPREAD_PROBABILITY + SLOPE_WEIGHT * slope + FUEL_WEIGHT * fuel).clamp(0.0, 1.0)
}

/// Advances burn-state grids over a fixed terrain.
///
/// Borrows the terrain for the duration of a run; the covariates cannot
/// change mid-run.
pub struct SpreadEngine<'a> {
    terrain: &'a TerrainModel,
}

impl<'a> SpreadEngine<'a> {
    pub fn new(terrain: &'a TerrainModel) -> Self {
        SpreadEngine { terrain }
    }

    /// Step-0 grid: a single burning cell at the ignition index,
    /// everything else unburned.
    ///
    /// The ignition index must be in bounds; the clamped coordinate
    /// mapping guarantees this for any geographic input.
    pub fn initial_state(&self, ignition: GridIndex) -> Grid<BurnState> {
        let (height, width) = self.terrain.dimensions();
        let mut state = Grid::filled(height, width, BurnState::Unburned);
        state.set(ignition.row, ignition.col, BurnState::Burning);
        state
    }

    /// Produce the next grid from `prev`.
    ///
    /// The next grid starts as a copy of the previous one, so burning
    /// cells stay burning. Only interior cells (`1..height-1` x
    /// `1..width-1`) act as sources; the outermost ring can catch fire
    /// as a recipient but never spreads further. One independent draw is
    /// taken per (source, unburned-neighbor) pair, in row-major source
    /// order, which keeps seeded runs replayable.
    pub fn step<S: ProbabilitySource>(
        &self,
        prev: &Grid<BurnState>,
        source: &mut S,
    ) -> Grid<BurnState> {
        let (height, width) = prev.dimensions();
        let mut next = prev.clone();
        if height < 3 || width < 3 {
            // No interior cells, nothing can spread.
            return next;
        }
        for i in 1..height - 1 {
            for j in 1..width - 1 {
                if !prev[(i, j)].is_burning() {
                    continue;
                }
                for (di, dj) in NEIGHBOR_OFFSETS {
                    let ni = (i as isize + di) as usize;
                    let nj = (j as isize + dj) as usize;
                    if prev[(ni, nj)].is_burning() {
                        continue;
                    }
                    let p = ignition_probability(
                        self.terrain.slope_at(ni, nj),
                        self.terrain.fuel_at(ni, nj),
                    );
                    if source.sample() < p {
                        next.set(ni, nj, BurnState::Burning);
                    }
                }
            }
        }
        next
    }

    /// Run the full horizon: `steps + 1` grids, where element 0 is the
    /// ignition state and element `t` is the state after `t` steps.
    pub fn run<S: ProbabilitySource>(
        &self,
        ignition: GridIndex,
        steps: usize,
        source: &mut S,
    ) -> Vec<Grid<BurnState>> {
        let mut frames = Vec::with_capacity(steps + 1);
        let mut current = self.initial_state(ignition);
        for _ in 0..steps {
            let next = self.step(&current, source);
            frames.push(std::mem::replace(&mut current, next));
        }
        frames.push(current);
        frames
    }
}
