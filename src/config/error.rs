//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Capacity value is zero (the local store must hold at least one entry).
    #[error("invalid local capacity '{value}': must be at least 1")]
    InvalidCapacity { value: String },

    /// Capacity string could not be parsed as a number.
    #[error("failed to parse local capacity '{value}': {source}")]
    CapacityParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
