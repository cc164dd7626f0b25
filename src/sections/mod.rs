//! Password evaluation sections
//!
//! Each section checks one composition rule and is worth one point.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Section failed, with an improvement hint
/// - `None` - Section passed
pub type SectionResult = Option<String>;
