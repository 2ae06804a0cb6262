//! Deterministic per-trial RNG.
//!
//! # Determinism strategy
//!
//! Each trial gets its own independent `SmallRng` seeded by:
//!
//!   seed = batch_seed XOR (attempt_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive attempt IDs uniformly across the seed space.
//! This means:
//!
//! - Trials never share RNG state, so they can run in any order — or in
//!   parallel — without changing their draws.
//! - A batch is reproducible from `(batch_seed, num_trials)` alone.
//! - Re-running a single attempt ID reproduces that trial exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-trial deterministic RNG.
///
/// Create one per trial via [`TrialRng::for_attempt`]; the trial owns it for
/// its whole lifetime (spawn sampling is currently the only consumer).
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the batch seed and a 1-based attempt ID.
    pub fn for_attempt(batch_seed: u64, attempt_id: u32) -> Self {
        let seed = batch_seed ^ (attempt_id as u64).wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
