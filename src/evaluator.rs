//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    SectionResult, digit_section, length_section, lowercase_section, special_section,
    uppercase_section,
};
use crate::types::StrengthReport;

type Section = fn(&SecretString) -> SectionResult;

/// Sections in the order their suggestions are reported.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("lowercase", lowercase_section),
    ("uppercase", uppercase_section),
    ("digits", digit_section),
    ("special", special_section),
];

/// Evaluates password strength.
///
/// Every passing section adds one point to the score; every failing
/// section appends its suggestion. The result depends only on the input.
pub fn evaluate(password: &SecretString) -> StrengthReport {
    let mut score = 0u8;
    let mut suggestions = Vec::new();

    for (_section_name, section_fn) in SECTIONS {
        match section_fn(password) {
            Some(suggestion) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = _section_name, "section failed");
                suggestions.push(suggestion);
            }
            None => score += 1,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(score, failed = suggestions.len(), "password evaluated");

    StrengthReport { score, suggestions }
}
