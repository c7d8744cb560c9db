//! Injectable uniform-draw sources for the stochastic spread rule.
//!
//! The engine never talks to an ambient generator directly; it pulls
//! draws from a [`ProbabilitySource`] so runs can be seeded for replay
//! and tests can substitute a fully controlled source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Capability producing independent uniform draws in `[0, 1)`.
pub trait ProbabilitySource {
    /// Next uniform draw in `[0, 1)`.
    fn sample(&mut self) -> f32;
}

/// Fresh thread-local entropy; every run is different.
#[derive(Debug)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        ThreadRngSource { rng: rand::rng() }
    }
}

impl Default for ThreadRngSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbabilitySource for ThreadRngSource {
    #[inline]
    fn sample(&mut self) -> f32 {
        self.rng.random()
    }
}

/// Deterministic source for reproducible runs: the same seed replays the
/// same draw sequence.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ProbabilitySource for SeededSource {
    #[inline]
    fn sample(&mut self) -> f32 {
        self.rng.random()
    }
}
