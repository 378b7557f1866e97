//! Sampler configuration.
//!
//! [`SamplerSettings`] bundles the strategy, seed and sample count. Values
//! start from [`Default`] and can be overridden from the environment so that
//! a CI job can pin or vary the selection without code changes:
//! - `SEEDSAMPLE_SEED`: unsigned seed
//! - `SEEDSAMPLE_COUNT`: sample count (negative values are rejected)
//! - `SEEDSAMPLE_MODE`: `deterministic` / `seeded` or `random` / `uniform`

use std::str::FromStr;

use crate::error::{Result, SampleError};
use crate::utils::DEFAULT_SEED;

pub const SEED_VAR: &str = "SEEDSAMPLE_SEED";
pub const COUNT_VAR: &str = "SEEDSAMPLE_COUNT";
pub const MODE_VAR: &str = "SEEDSAMPLE_MODE";

/// Sample count used when none is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Sampling strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplerType {
    /// Seeded LCG; identical output for identical seed and input.
    #[default]
    Deterministic,
    /// Entropy-seeded; output varies between calls.
    Random,
}

impl FromStr for SamplerType {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deterministic" | "seeded" => Ok(Self::Deterministic),
            "random" | "uniform" => Ok(Self::Random),
            _ => Err(SampleError::InvalidSetting {
                key: MODE_VAR.to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for [`sample_with_settings`](crate::api::sample_with_settings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SamplerSettings {
    pub sampler_type: SamplerType,
    /// Ignored by [`SamplerType::Random`].
    pub seed: u64,
    pub sample_size: usize,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self {
            sampler_type: SamplerType::Deterministic,
            seed: DEFAULT_SEED,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

impl SamplerSettings {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_sampler_type(mut self, sampler_type: SamplerType) -> Self {
        self.sampler_type = sampler_type;
        self
    }

    /// Defaults overlaid with the `SEEDSAMPLE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with values returned by `lookup`.
    ///
    /// Missing keys keep their defaults; present but unparsable values are
    /// errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(SEED_VAR) {
            settings.seed = raw.trim().parse().map_err(|_| SampleError::InvalidSetting {
                key: SEED_VAR.to_string(),
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(COUNT_VAR) {
            let count: i64 = raw.trim().parse().map_err(|_| SampleError::InvalidSetting {
                key: COUNT_VAR.to_string(),
                value: raw.clone(),
            })?;
            settings.sample_size = crate::api::checked_sample_size(count)?;
        }

        if let Some(raw) = lookup(MODE_VAR) {
            settings.sampler_type = raw.parse()?;
        }

        Ok(settings)
    }
}
