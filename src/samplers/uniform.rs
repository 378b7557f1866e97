//! Uniform random sampler drawing samples without replacement.

use crate::core::{can_sample, Sampler};
use crate::utils::UniformRandomGenerator;

/// Uniform random sampler seeded from OS entropy.
///
/// Results differ between runs; use
/// [`DeterministicSampler`](super::DeterministicSampler) when the selection
/// must be reproducible.
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator,
}

impl Default for UniformRandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomSampler {
    /// Construct a new sampler with a random seed.
    pub fn new() -> Self {
        Self {
            rng: UniformRandomGenerator::new(),
        }
    }

    /// Construct a sampler from a fixed seed (primarily for tests).
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(
        &mut self,
        population: usize,
        sample_size: usize,
        out_indices: &mut [usize],
    ) -> bool {
        if !can_sample(population, sample_size, out_indices.len()) {
            return false;
        }
        self.rng
            .gen_unique(&mut out_indices[..sample_size], population);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sample_is_distinct_and_in_range() {
        let mut sampler = UniformRandomSampler::from_seed(7);
        let mut out = [0usize; 4];
        for _ in 0..50 {
            assert!(sampler.sample(6, 4, &mut out));
            assert!(out.iter().all(|&i| i < 6));
            let mut sorted = out.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 4);
        }
    }

    #[test]
    fn test_uniform_full_population() {
        let mut sampler = UniformRandomSampler::new();
        let mut out = [0usize; 3];
        assert!(sampler.sample(3, 3, &mut out));
        let mut sorted = out.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn test_uniform_rejects_invalid_requests() {
        let mut sampler = UniformRandomSampler::new();
        let mut out = [usize::MAX; 2];
        assert!(!sampler.sample(0, 1, &mut out));
        assert!(!sampler.sample(5, 0, &mut out));
        assert!(!sampler.sample(1, 2, &mut out));
        assert!(!sampler.sample(5, 3, &mut out));
        assert_eq!(out, [usize::MAX; 2]);
    }
}
