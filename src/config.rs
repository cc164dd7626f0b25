//! Runtime configuration
//!
//! Read from the environment by the menu binary.
//!
//! - `PWD_FORGE_RNG`: `thread` (default) or `small`
//! - `PWD_FORGE_SEED`: optional `u64`; when set, generation uses a seeded
//!   `SmallRng` and is reproducible

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use thiserror::Error;

pub const RNG_ENV: &str = "PWD_FORGE_RNG";
pub const SEED_ENV: &str = "PWD_FORGE_SEED";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PWD_FORGE_RNG value '{0}' (expected 'thread' or 'small')")]
    InvalidRng(String),
    #[error("Invalid PWD_FORGE_SEED value '{0}' (expected an unsigned integer)")]
    InvalidSeed(String),
}

/// Random source used for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngKind {
    /// Thread-local CSPRNG (`rand::rng()`).
    #[default]
    Thread,
    /// Fast general-purpose PRNG. Not suitable for real secrets.
    Small,
}

impl std::str::FromStr for RngKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thread" => Ok(RngKind::Thread),
            "small" => Ok(RngKind::Small),
            _ => Err(ConfigError::InvalidRng(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub rng: RngKind,
    pub seed: Option<u64>,
}

impl Config {
    /// Loads the configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rng = match std::env::var(RNG_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => RngKind::default(),
        };

        let seed = match std::env::var(SEED_ENV) {
            Ok(value) => Some(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(value.clone()))?,
            ),
            Err(_) => None,
        };

        Ok(Config { rng, seed })
    }

    /// Builds the random source. A seed always selects a seeded `SmallRng`.
    pub fn rng(&self) -> Box<dyn RngCore> {
        match (self.seed, self.rng) {
            (Some(seed), _) => Box::new(SmallRng::seed_from_u64(seed)),
            (None, RngKind::Small) => Box::new(SmallRng::from_os_rng()),
            (None, RngKind::Thread) => Box::new(rand::rng()),
        }
    }
}
