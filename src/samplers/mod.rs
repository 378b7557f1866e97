//! Sampling strategies.
//!
//! Both samplers implement the shared [`Sampler`](crate::core::Sampler)
//! trait and draw without replacement.

pub mod deterministic;
pub mod uniform;

pub use deterministic::DeterministicSampler;
pub use uniform::UniformRandomSampler;
