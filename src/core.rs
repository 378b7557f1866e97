//! Core sampling trait.
//!
//! Samplers work on index positions only; mapping indices back to elements
//! is left to the [`api`](crate::api) layer so that large or non-`Clone`
//! populations can be sampled without copying.

/// Strategy for drawing distinct index positions from a population.
pub trait Sampler {
    /// Fill `out_indices[..sample_size]` with distinct indices in
    /// `0..population`, in draw order.
    ///
    /// Returns `false` and leaves `out_indices` untouched when
    /// `sample_size == 0`, `population == 0`, `sample_size > population`,
    /// or `out_indices` is shorter than `sample_size`.
    fn sample(
        &mut self,
        population: usize,
        sample_size: usize,
        out_indices: &mut [usize],
    ) -> bool;
}

/// Precondition shared by every [`Sampler`] implementation.
pub(crate) fn can_sample(population: usize, sample_size: usize, out_len: usize) -> bool {
    sample_size != 0 && population != 0 && sample_size <= population && out_len >= sample_size
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn sample(
        &mut self,
        population: usize,
        sample_size: usize,
        out_indices: &mut [usize],
    ) -> bool {
        (**self).sample(population, sample_size, out_indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Picks the first `sample_size` indices; exercises the trait surface.
    struct FirstN;

    impl Sampler for FirstN {
        fn sample(&mut self, population: usize, sample_size: usize, out: &mut [usize]) -> bool {
            if !can_sample(population, sample_size, out.len()) {
                return false;
            }
            for (i, slot) in out[..sample_size].iter_mut().enumerate() {
                *slot = i;
            }
            true
        }
    }

    #[test]
    fn test_can_sample_rejections() {
        assert!(!can_sample(0, 1, 1));
        assert!(!can_sample(5, 0, 1));
        assert!(!can_sample(3, 4, 4));
        assert!(!can_sample(5, 3, 2));
        assert!(can_sample(5, 5, 5));
    }

    #[test]
    fn test_boxed_sampler_forwards() {
        let mut sampler: Box<dyn Sampler> = Box::new(FirstN);
        let mut out = [9usize; 3];
        assert!(sampler.sample(10, 2, &mut out));
        assert_eq!(out, [0, 1, 9]);
        assert!(!sampler.sample(1, 2, &mut out));
    }
}
