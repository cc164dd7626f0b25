//! Character variety sections - one per character class.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::CharacterClass;

fn class_section(password: &SecretString, class: CharacterClass, hint: &str) -> SectionResult {
    if password.expose_secret().chars().any(|c| class.contains(c)) {
        None
    } else {
        Some(hint.to_string())
    }
}

pub fn lowercase_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Lowercase, "Add lowercase letters")
}

pub fn uppercase_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Uppercase, "Add uppercase letters")
}

pub fn digit_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Digits, "Add numbers")
}

/// Only ASCII punctuation counts; whitespace and non-ASCII symbols do not.
pub fn special_section(password: &SecretString) -> SectionResult {
    class_section(password, CharacterClass::Special, "Add special characters")
}
