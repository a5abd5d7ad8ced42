//! Seeded RNG wrapper used by the simulation jobs.
//!
//! # Seeding strategy
//!
//! The runner holds one root `SimRng` built from the configured seed and
//! derives a child per job thread:
//!
//!   child_seed = parent.next_u64() XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.  Job
//! threads never share RNG state, so no synchronisation is needed.

use std::ops::Range;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Job-level RNG: jitter delays, period draws and counter growth.
///
/// Each job thread owns its own instance.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, used to give
    /// each job thread an independent stream from the root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform duration in `range` milliseconds.  An empty range yields zero.
    pub fn millis_in(&mut self, range: &Range<u64>) -> Duration {
        if range.is_empty() {
            return Duration::ZERO;
        }
        Duration::from_millis(self.0.gen_range(range.clone()))
    }

    /// Uniform duration in `range` seconds.  An empty range yields zero.
    pub fn secs_in(&mut self, range: &Range<u64>) -> Duration {
        if range.is_empty() {
            return Duration::ZERO;
        }
        Duration::from_secs(self.0.gen_range(range.clone()))
    }
}
