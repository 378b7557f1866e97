//! Seeded sampler over the 31-bit LCG.
//!
//! Draws candidate indices with [`Lcg31::next_index`] and keeps the first
//! occurrence of each, so the output order is draw order. For a given seed
//! the selection is identical on every machine.

use std::collections::HashSet;

use crate::core::{can_sample, Sampler};
use crate::utils::{Lcg31, DEFAULT_SEED};

/// Reproducible sampler without replacement.
///
/// The generator persists across calls on the same instance, so successive
/// calls continue the stream rather than repeating it.
#[derive(Debug, Clone)]
pub struct DeterministicSampler {
    rng: Lcg31,
}

impl Default for DeterministicSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterministicSampler {
    /// Sampler seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Lcg31::new(seed),
        }
    }

    /// Current generator state.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Sampler for DeterministicSampler {
    fn sample(
        &mut self,
        population: usize,
        sample_size: usize,
        out_indices: &mut [usize],
    ) -> bool {
        if !can_sample(population, sample_size, out_indices.len()) {
            return false;
        }

        let mut chosen = HashSet::with_capacity(sample_size);
        let mut filled = 0;
        while filled < sample_size {
            let candidate = self.rng.next_index(population);
            if chosen.insert(candidate) {
                out_indices[filled] = candidate;
                filled += 1;
            }
        }
        true
    }
}
