//! Random-number generators shared by the samplers.
//!
//! Two generators live here: [`Lcg31`], a tiny linear-congruential generator
//! whose output is fixed for a given seed on every platform, and
//! [`UniformRandomGenerator`], a thin wrapper around `rand`'s `StdRng` used by
//! the non-reproducible sampler.

use rand::distributions::Uniform;
use rand::prelude::*;

/// Seed used whenever the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// LCG multiplier.
pub const LCG_MULTIPLIER: u64 = 1_103_515_245;
/// LCG increment.
pub const LCG_INCREMENT: u64 = 12_345;
/// LCG modulus exponent: the generator works modulo `2^31`.
pub const LCG_MODULUS_BITS: u32 = 31;

const LCG_MASK: u64 = (1 << LCG_MODULUS_BITS) - 1;

/// Linear-congruential generator `state = (state * A + C) mod 2^31`.
///
/// The constants satisfy the Hull–Dobell conditions (`C` odd, `A - 1`
/// divisible by 4), so the generator visits every state in `[0, 2^31)` before
/// repeating. Rejection loops over [`Lcg31::next_index`] therefore always
/// terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg31 {
    state: u32,
}

impl Default for Lcg31 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Lcg31 {
    /// Construct from a seed; seeds are reduced modulo `2^31`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: (seed & LCG_MASK) as u32,
        }
    }

    /// Current state, without advancing.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance the recurrence and return the new state.
    pub fn next_state(&mut self) -> u32 {
        let next = (self.state as u64)
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.state = next as u32;
        self.state
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / (1u64 << LCG_MODULUS_BITS) as f64
    }

    /// Next index in `[0, len)`, i.e. `floor(state / 2^31 * len)`.
    ///
    /// `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "Lcg31::next_index called with len == 0");
        let state = self.next_state() as u128;
        ((state * len as u128) >> LCG_MODULUS_BITS) as usize
    }
}

/// Uniform index generator backed by `StdRng`.
///
/// By default this is seeded from OS entropy, but test code can construct
/// it from a fixed seed for reproducible behavior.
pub struct UniformRandomGenerator {
    rng: StdRng,
}

impl Default for UniformRandomGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomGenerator {
    /// Construct with an entropy seed.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Construct with a fixed seed (useful for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw one index in `[0, len)`. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Fill `out` with distinct indices drawn from `[0, len)`.
    ///
    /// Requires `out.len() <= len`; the rejection loop is meant for sample
    /// sizes that are small relative to `len`.
    pub fn gen_unique(&mut self, out: &mut [usize], len: usize) {
        debug_assert!(out.len() <= len);
        let dist = Uniform::new(0, len);
        for i in 0..out.len() {
            loop {
                let candidate = self.rng.sample(dist);
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
    }
}
