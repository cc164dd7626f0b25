//! Strength report types.

use std::fmt;

/// Highest score a password can reach (one point per section).
pub const MAX_SCORE: u8 = 5;

/// Strength level derived from a [`StrengthReport`] score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a 0-5 score to a level. Scores above the maximum count as `VeryStrong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= MAX_SCORE => PasswordStrength::VeryStrong,
            4 => PasswordStrength::Strong,
            3 => PasswordStrength::Medium,
            2 => PasswordStrength::Weak,
            _ => PasswordStrength::VeryWeak,
        }
    }

    /// Emoji shown next to the label in the menu.
    pub fn icon(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "❌",
            PasswordStrength::Weak => "⚠️",
            PasswordStrength::Medium => "👍",
            PasswordStrength::Strong => "💪",
            PasswordStrength::VeryStrong => "🔒",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::VeryWeak => "Very Weak",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
            PasswordStrength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Result of evaluating a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Number of satisfied sections, `0..=MAX_SCORE`.
    pub score: u8,
    /// Suggestions for the failed sections, in section order.
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_mapping() {
        assert_eq!(PasswordStrength::from_score(0), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::from_score(1), PasswordStrength::VeryWeak);
        assert_eq!(PasswordStrength::from_score(2), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_score(3), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_score(4), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_score(5), PasswordStrength::VeryStrong);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PasswordStrength::VeryWeak.to_string(), "Very Weak");
        assert_eq!(PasswordStrength::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn test_report_strength() {
        let report = StrengthReport {
            score: 4,
            suggestions: vec!["Add special characters".to_string()],
        };
        assert_eq!(report.strength(), PasswordStrength::Strong);
    }
}
