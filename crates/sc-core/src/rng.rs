//! Deterministic per-store and run-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each store gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (store_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive store IDs uniformly across the seed space.
//! Arrival draws for one store therefore never depend on how many events
//! other stores processed first, and adding a store to the run does not
//! perturb the demand streams of the others.
//!
//! Truck breakdowns come from a single run-level [`SimRng`] child stream.
//! Its draws happen in scheduler order, which is itself deterministic.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Exp};

use crate::StoreId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Draw from an exponential distribution with the given mean.
///
/// A non-finite mean means "no realistic demand" and yields `f64::INFINITY`;
/// a non-positive mean yields zero.
fn sample_exponential(rng: &mut SmallRng, mean: f64) -> f64 {
    if !mean.is_finite() {
        return f64::INFINITY;
    }
    if mean <= 0.0 {
        return 0.0;
    }
    match Exp::new(1.0 / mean) {
        Ok(dist) => dist.sample(rng),
        Err(_) => f64::INFINITY,
    }
}

// ── StreamRng ─────────────────────────────────────────────────────────────────

/// Per-store deterministic RNG stream.
pub struct StreamRng(SmallRng);

impl StreamRng {
    /// Seed deterministically from the run's global seed and a store ID.
    pub fn new(global_seed: u64, store: StoreId) -> Self {
        let seed = global_seed ^ (store.0 as u64).wrapping_mul(MIXING_CONSTANT);
        StreamRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand_distr` types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Exponentially distributed duration with the given mean.
    #[inline]
    pub fn exponential(&mut self, mean: f64) -> f64 {
        sample_exponential(&mut self.0, mean)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Run-level RNG for global draws (breakdowns, generated distance tables).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, so independent
    /// concerns draw from independent streams.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn exponential(&mut self, mean: f64) -> f64 {
        sample_exponential(&mut self.0, mean)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
