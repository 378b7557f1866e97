//! # seedsample - reproducible sampling without replacement
//!
//! `seedsample` picks a bounded, varied subset out of a larger population,
//! typically to keep a test suite from asserting against every element while
//! still selecting the same elements on every machine.
//!
//! ## Quick Start
//!
//! ```rust
//! use seedsample::{deterministic_sample, deterministic_sample_with_seed, random_sample};
//!
//! let tiles = ["H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne"];
//!
//! // Same three tiles on every run.
//! let picked = deterministic_sample(&tiles, 3);
//! assert_eq!(picked, deterministic_sample(&tiles, 3));
//!
//! // Another reproducible selection.
//! let other = deterministic_sample_with_seed(&tiles, 3, 7);
//! assert_eq!(other.len(), 3);
//!
//! // Different on every call.
//! assert_eq!(random_sample(&tiles, 3).len(), 3);
//! ```
//!
//! ## Extending the Library
//!
//! Both strategies implement [`Sampler`](core::Sampler), which draws index
//! positions only. Custom strategies can be plugged into
//! [`collect_sample`](api::collect_sample):
//!
//! ```rust
//! use seedsample::core::Sampler;
//! use seedsample::api::collect_sample;
//!
//! /// Takes every other element from the front.
//! struct Stride;
//!
//! impl Sampler for Stride {
//!     fn sample(&mut self, population: usize, sample_size: usize, out: &mut [usize]) -> bool {
//!         if sample_size == 0 || sample_size * 2 > population || out.len() < sample_size {
//!             return false;
//!         }
//!         for (i, slot) in out[..sample_size].iter_mut().enumerate() {
//!             *slot = i * 2;
//!         }
//!         true
//!     }
//! }
//!
//! assert_eq!(collect_sample(&mut Stride, &[1, 2, 3, 4, 5], 2), vec![1, 3]);
//! ```
//!
//! ## Modules
//!
//! - **[`api`](api)**: High-level sampling functions
//! - **[`core`](core)**: The `Sampler` trait
//! - **[`samplers`](samplers)**: Deterministic (LCG) and uniform random samplers
//! - **[`settings`](settings)**: Configuration and environment overrides
//! - **[`utils`](utils)**: Random-number generators
//! - **[`error`](error)**: Error types

pub mod api;
pub mod core;
pub mod error;
pub mod samplers;
pub mod settings;
pub mod utils;

// Re-export high-level API
pub use api::{
    checked_sample_size, deterministic_sample, deterministic_sample_with_seed, random_sample,
    sample_indices, sample_with_settings,
};

pub use core::Sampler;
pub use error::SampleError;
pub use samplers::{DeterministicSampler, UniformRandomSampler};
pub use settings::{SamplerSettings, SamplerType};
pub use utils::DEFAULT_SEED;
