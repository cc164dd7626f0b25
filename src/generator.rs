//! Password generation.
//!
//! Every character is drawn independently and uniformly from the request's
//! alphabet, with replacement. The plain functions draw from [`rand::rng`]
//! (the thread-local CSPRNG); the `_with` variants accept any [`Rng`].

use rand::Rng;
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterSet;

/// Minimum length for simple and custom passwords.
pub const MIN_LENGTH: usize = 1;
/// Minimum length for strong passwords.
pub const MIN_STRONG_LENGTH: usize = 4;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("{}", invalid_length_message(.min))]
    InvalidLength { length: usize, min: usize },
    #[error("Select at least one character type!")]
    NoCharacterClassSelected,
}

fn invalid_length_message(min: &usize) -> String {
    if *min == MIN_STRONG_LENGTH {
        format!("Strong password must be at least {min} characters!")
    } else {
        format!("Password length must be at least {min}!")
    }
}

/// A validated-on-use generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub charset: CharacterSet,
    pub min_length: usize,
}

impl GenerationRequest {
    pub fn new(length: usize, charset: CharacterSet) -> Self {
        GenerationRequest {
            length,
            charset,
            min_length: MIN_LENGTH,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Checks the length first, then the alphabet.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.length < self.min_length {
            return Err(GenerateError::InvalidLength {
                length: self.length,
                min: self.min_length,
            });
        }
        if self.charset.is_empty() {
            return Err(GenerateError::NoCharacterClassSelected);
        }
        Ok(())
    }

    pub fn generate(&self) -> Result<SecretString, GenerateError> {
        self.generate_with(&mut rand::rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SecretString, GenerateError> {
        self.validate()?;

        let chars = self.charset.alphabet();
        let password: String = (0..self.length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            length = self.length,
            alphabet = chars.len(),
            "password generated"
        );

        Ok(SecretString::new(password.into()))
    }
}

/// Letters and digits, `length >= 1`.
pub fn generate_simple(length: usize) -> Result<SecretString, GenerateError> {
    generate_simple_with(&mut rand::rng(), length)
}

pub fn generate_simple_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GenerateError> {
    GenerationRequest::new(length, CharacterSet::SIMPLE).generate_with(rng)
}

/// Letters, digits and punctuation, `length >= 4`.
pub fn generate_strong(length: usize) -> Result<SecretString, GenerateError> {
    generate_strong_with(&mut rand::rng(), length)
}

pub fn generate_strong_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> Result<SecretString, GenerateError> {
    GenerationRequest::new(length, CharacterSet::STRONG)
        .with_min_length(MIN_STRONG_LENGTH)
        .generate_with(rng)
}

/// Only the selected classes, `length >= 1`.
pub fn generate_custom(
    length: usize,
    include_lowercase: bool,
    include_uppercase: bool,
    include_digits: bool,
    include_special: bool,
) -> Result<SecretString, GenerateError> {
    generate_custom_with(
        &mut rand::rng(),
        length,
        include_lowercase,
        include_uppercase,
        include_digits,
        include_special,
    )
}

pub fn generate_custom_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    include_lowercase: bool,
    include_uppercase: bool,
    include_digits: bool,
    include_special: bool,
) -> Result<SecretString, GenerateError> {
    let charset = CharacterSet::new(
        include_lowercase,
        include_uppercase,
        include_digits,
        include_special,
    );
    GenerationRequest::new(length, charset).generate_with(rng)
}
