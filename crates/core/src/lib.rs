//! GeoIgniter core library
//!
//! Probabilistic wildfire spread over discretized terrain. Given a
//! geographic ignition point and static per-cell covariates (slope,
//! land-cover fuel), the engine produces a time series of burn-state
//! grids over a fixed horizon as a stochastic cellular automaton.
//!
//! The crate is the in-process contract consumed by a presentation
//! layer: it accepts a latitude/longitude click plus a configured
//! bounding box and returns one grid per time step for rendering. Map
//! display itself lives outside this crate (see `demo-headless` for a
//! minimal consumer).

// Core types and utilities
pub mod core_types;

// Terrain covariate grids
pub mod grid;

// Driver composing mapper, terrain, and engine
pub mod simulation;

// Stochastic spread engine
pub mod spread;

// Re-export core types
pub use core_types::{BoundingBox, Grid, GridIndex, IgnitionPoint};

// Re-export terrain types
pub use grid::{TerrainError, TerrainModel};

// Re-export driver types
pub use simulation::{FireSimulation, SimulationError, SimulationResult, DEFAULT_STEPS};

// Re-export engine types
pub use spread::{
    ignition_probability, BurnState, ProbabilitySource, SeededSource, SpreadEngine,
    ThreadRngSource, BASE_SPREAD_PROBABILITY, FUEL_WEIGHT, SLOPE_WEIGHT,
};
