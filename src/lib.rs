//! Password generation and strength evaluation library
//!
//! This library builds random passwords from fixed ASCII character classes
//! and scores password strength on a 0-5 scale.
//!
//! # Features
//!
//! - `cli` (default): Builds the interactive `pwd-forge` menu binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FORGE_RNG`: Random source for the binary, `thread` or `small`
//!   (default: `thread`)
//! - `PWD_FORGE_SEED`: Seed for reproducible generation
//!
//! # Example
//!
//! ```rust
//! use pwd_forge::{evaluate, generate_strong, PasswordStrength};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let password = generate_strong(16).expect("16 is a valid length");
//! assert_eq!(password.expose_secret().chars().count(), 16);
//!
//! let report = evaluate(&SecretString::new("Abcdefg1!".to_string().into()));
//! assert_eq!(report.strength(), PasswordStrength::VeryStrong);
//! assert!(report.suggestions.is_empty());
//! ```

// Internal modules
mod evaluator;
mod sections;

pub mod charset;
pub mod config;
pub mod generator;
pub mod menu;
pub mod types;

// Public API
pub use charset::{CharacterClass, CharacterSet};
pub use config::{Config, ConfigError, RngKind};
pub use evaluator::evaluate;
pub use generator::{
    GenerateError, GenerationRequest, generate_custom, generate_custom_with, generate_simple,
    generate_simple_with, generate_strong, generate_strong_with,
};
pub use menu::{Menu, MenuError};
pub use types::{MAX_SCORE, PasswordStrength, StrengthReport};
