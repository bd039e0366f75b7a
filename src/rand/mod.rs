//! Uniform random sources for the generator.
//!
//! The generator only needs a real number in `[0, 1)` per output position, so
//! everything it draws from sits behind [`UniformSource`]. Production code uses
//! the thread-local `rand` generator; seeded and scripted sources exist for
//! reproducible output.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Largest `f64` strictly below 1.0.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// A provider of uniformly distributed values in `[0, 1)`.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

pub type ThreadSource = RngSource<rand::rngs::ThreadRng>;
pub type SeededSource = RngSource<ChaCha8Rng>;

impl ThreadSource {
    pub fn thread() -> Self {
        RngSource(rand::thread_rng())
    }
}

impl SeededSource {
    pub fn seeded(seed: u64) -> Self {
        RngSource(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for ThreadSource {
    fn default() -> Self {
        Self::thread()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    draws: Vec<f64>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        Self {
            draws: draws.into(),
            pos: 0,
        }
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let draw = self.draws[self.pos % self.draws.len()];
        self.pos += 1;
        if draw.is_nan() {
            return 0.0;
        }
        draw.clamp(0.0, BELOW_ONE)
    }
}
