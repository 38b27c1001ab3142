//! Deterministic simulation RNG.
//!
//! Every stochastic decision in the simulation (office assignment, choice of
//! the index case, each Bernoulli trial of the disease model) draws from an
//! explicitly injected [`SimRng`].  Nothing reads process-wide random state,
//! so the same seed always replays the same run.
//!
//! Sub-systems that need their own stream, such as town placement versus the
//! population, take a [`child`](SimRng::child): drawing more from one never
//! shifts the sequence the other sees.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded `SmallRng` shared by the single-threaded simulation loop.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  Distinct `stream` values give
    /// distinct children even when drawn at the same point of the parent.
    pub fn child(&mut self, stream: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ stream.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Fisher–Yates shuffle in place.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.0);
    }
}
