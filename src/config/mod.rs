//! Environment-backed configuration.
//!
//! All settings have defaults. Override with `STRATA_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

/// Cache configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `STRATA_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Max entries in the in-memory local store. Default: `10_000`.
    pub local_capacity: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_capacity: 10_000,
        }
    }
}

impl Config {
    const ENV_LOCAL_CAPACITY: &'static str = "STRATA_LOCAL_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let local_capacity = Self::parse_local_capacity_from_env(defaults.local_capacity)?;

        Ok(Self { local_capacity })
    }

    fn parse_local_capacity_from_env(default: u64) -> Result<u64, ConfigError> {
        match env::var(Self::ENV_LOCAL_CAPACITY) {
            Ok(value) => {
                let capacity: u64 =
                    value
                        .parse()
                        .map_err(|e| ConfigError::CapacityParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if capacity == 0 {
                    return Err(ConfigError::InvalidCapacity { value });
                }

                Ok(capacity)
            }
            Err(_) => Ok(default),
        }
    }
}
