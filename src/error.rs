//! Error types for sampling.

use thiserror::Error;

/// Errors raised at the boundaries where untyped input enters the crate.
///
/// Sampling itself cannot fail; these cover signed sample counts and
/// settings read from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// A sample count below zero was supplied. Negative counts are rejected,
    /// never clamped.
    #[error("sample size must be non-negative, got {0}")]
    NegativeSampleSize(i64),

    /// A configuration value could not be parsed.
    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SampleError>;
