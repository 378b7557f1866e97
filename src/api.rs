//! High-level sampling functions.
//!
//! Every function here builds a fresh generator per call, so there is no
//! state shared between calls and they are safe to use from parallel tests.
//!
//! Common behavior:
//! - `n >= list.len()` returns the whole list in input order without drawing.
//! - An empty list or `n == 0` returns an empty vector.
//! - Otherwise exactly `n` elements at distinct positions, in draw order.

use tracing::{debug, trace};

use crate::core::Sampler;
use crate::error::{Result, SampleError};
use crate::samplers::{DeterministicSampler, UniformRandomSampler};
use crate::settings::{SamplerSettings, SamplerType};
use crate::utils::DEFAULT_SEED;

/// Reproducible sample of `n` elements using [`DEFAULT_SEED`].
///
/// ```rust
/// use seedsample::deterministic_sample;
///
/// assert_eq!(deterministic_sample(&[10, 20, 30, 40, 50], 3), vec![30, 40, 10]);
/// assert_eq!(deterministic_sample(&[1, 2, 3], 10), vec![1, 2, 3]);
/// ```
pub fn deterministic_sample<T: Clone>(list: &[T], n: usize) -> Vec<T> {
    deterministic_sample_with_seed(list, n, DEFAULT_SEED)
}

/// Reproducible sample of `n` elements using an explicit seed.
pub fn deterministic_sample_with_seed<T: Clone>(list: &[T], n: usize, seed: u64) -> Vec<T> {
    debug!(len = list.len(), n, seed, "deterministic sample");
    let mut sampler = DeterministicSampler::from_seed(seed);
    collect_sample(&mut sampler, list, n)
}

/// Non-reproducible sample of `n` elements from an entropy-seeded generator.
pub fn random_sample<T: Clone>(list: &[T], n: usize) -> Vec<T> {
    debug!(len = list.len(), n, "random sample");
    let mut sampler = UniformRandomSampler::new();
    collect_sample(&mut sampler, list, n)
}

/// Positions selected by [`deterministic_sample_with_seed`] for a list of
/// length `population`.
pub fn sample_indices(population: usize, n: usize, seed: u64) -> Vec<usize> {
    let mut sampler = DeterministicSampler::from_seed(seed);
    draw_indices(&mut sampler, population, n)
}

/// Sample according to `settings`.
pub fn sample_with_settings<T: Clone>(list: &[T], settings: &SamplerSettings) -> Vec<T> {
    match settings.sampler_type {
        SamplerType::Deterministic => {
            deterministic_sample_with_seed(list, settings.sample_size, settings.seed)
        }
        SamplerType::Random => random_sample(list, settings.sample_size),
    }
}

/// Convert a signed sample count, rejecting negatives.
pub fn checked_sample_size(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| SampleError::NegativeSampleSize(n))
}

/// Sample elements of `list` with any [`Sampler`].
pub fn collect_sample<S, T>(sampler: &mut S, list: &[T], n: usize) -> Vec<T>
where
    S: Sampler + ?Sized,
    T: Clone,
{
    if n >= list.len() {
        trace!(len = list.len(), n, "sample covers whole list");
        return list.to_vec();
    }
    draw_indices(sampler, list.len(), n)
        .into_iter()
        .map(|i| list[i].clone())
        .collect()
}

fn draw_indices<S: Sampler + ?Sized>(sampler: &mut S, population: usize, n: usize) -> Vec<usize> {
    if n >= population {
        return (0..population).collect();
    }
    let mut indices = vec![0; n];
    if !sampler.sample(population, n, &mut indices) {
        // Only reachable for n == 0 here.
        indices.clear();
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_default_seed() {
        assert_eq!(deterministic_sample(&[10, 20, 30, 40, 50], 3), vec![30, 40, 10]);
    }

    #[test]
    fn test_golden_twenty_elements() {
        let list: Vec<u32> = (0..20).collect();
        assert_eq!(deterministic_sample(&list, 5), vec![11, 10, 9, 15, 8]);
    }

    #[test]
    fn test_identity_when_n_covers_list() {
        assert_eq!(deterministic_sample(&[1, 2, 3], 10), vec![1, 2, 3]);
        assert_eq!(deterministic_sample(&[1, 2, 3], 3), vec![1, 2, 3]);
        assert_eq!(deterministic_sample_with_seed(&["a", "b"], 2, 999), vec!["a", "b"]);
        assert_eq!(random_sample(&[4, 5, 6], 3), vec![4, 5, 6]);
    }

    #[test]
    fn test_zero_and_empty() {
        let empty: [i32; 0] = [];
        assert!(deterministic_sample(&[1, 2, 3, 4, 5], 0).is_empty());
        assert!(deterministic_sample(&empty, 0).is_empty());
        assert!(deterministic_sample(&empty, 5).is_empty());
        assert!(random_sample(&empty, 5).is_empty());
        assert!(random_sample(&[1, 2, 3], 0).is_empty());
        assert!(sample_indices(0, 4, DEFAULT_SEED).is_empty());
    }

    #[test]
    fn test_sample_indices_match_elements() {
        let list = ["H", "He", "Li", "Be", "B", "C", "N", "O"];
        let indices = sample_indices(list.len(), 4, 17);
        let picked: Vec<&str> = indices.iter().map(|&i| list[i]).collect();
        assert_eq!(picked, deterministic_sample_with_seed(&list, 4, 17));
    }

    #[test]
    fn test_settings_dispatch() {
        let list: Vec<u8> = (0..50).collect();
        let cfg = SamplerSettings::default().with_seed(8).with_sample_size(6);
        assert_eq!(
            sample_with_settings(&list, &cfg),
            deterministic_sample_with_seed(&list, 6, 8)
        );

        let random = sample_with_settings(&list, &cfg.with_sampler_type(SamplerType::Random));
        assert_eq!(random.len(), 6);
    }

    #[test]
    fn test_checked_sample_size() {
        assert_eq!(checked_sample_size(0), Ok(0));
        assert_eq!(checked_sample_size(7), Ok(7));
        assert_eq!(checked_sample_size(-1), Err(SampleError::NegativeSampleSize(-1)));
    }

    #[test]
    fn test_collect_sample_with_boxed_sampler() {
        let mut sampler: Box<dyn Sampler> = Box::new(DeterministicSampler::new());
        assert_eq!(collect_sample(&mut sampler, &[10, 20, 30, 40, 50], 3), vec![30, 40, 10]);
    }
}
