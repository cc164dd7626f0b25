//! Character classes and alphabet composition.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// The 32 ASCII punctuation characters.
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four fixed character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Special,
}

impl CharacterClass {
    /// All classes in the order alphabets are composed.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// ASCII-only membership test.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::Special => c.is_ascii_punctuation(),
        }
    }
}

/// A selection of character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterSet {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl CharacterSet {
    /// Letters and digits.
    pub const SIMPLE: CharacterSet = CharacterSet::new(true, true, true, false);
    /// Letters, digits and punctuation.
    pub const STRONG: CharacterSet = CharacterSet::new(true, true, true, true);

    pub const fn new(lowercase: bool, uppercase: bool, digits: bool, special: bool) -> Self {
        CharacterSet {
            lowercase,
            uppercase,
            digits,
            special,
        }
    }

    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Special => self.special,
        }
    }

    /// Selected classes in composition order.
    pub fn classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.includes(*class))
    }

    pub fn is_empty(&self) -> bool {
        self.classes().next().is_none()
    }

    /// Build the character pool from the selected classes.
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars = Vec::with_capacity(self.size());
        for class in self.classes() {
            chars.extend(class.chars().chars());
        }
        chars
    }

    /// Number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.classes().map(|class| class.chars().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SPECIAL.len(), 32);
    }

    #[test]
    fn test_special_matches_ascii_punctuation() {
        let expected: String = (0u8..128)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(SPECIAL, expected);
    }

    #[test]
    fn test_preset_sizes() {
        assert_eq!(CharacterSet::SIMPLE.size(), 62);
        assert_eq!(CharacterSet::STRONG.size(), 94);
        assert_eq!(CharacterSet::STRONG.alphabet().len(), 94);
    }

    #[test]
    fn test_alphabet_order() {
        let set = CharacterSet::new(false, true, true, false);
        let alphabet: String = set.alphabet().into_iter().collect();
        assert_eq!(alphabet, format!("{UPPERCASE}{DIGITS}"));
    }

    #[test]
    fn test_empty_set() {
        let set = CharacterSet::default();
        assert!(set.is_empty());
        assert!(set.alphabet().is_empty());
        assert_eq!(set.size(), 0);
    }

    #[test]
    fn test_contains_is_ascii_only() {
        assert!(CharacterClass::Lowercase.contains('a'));
        assert!(!CharacterClass::Lowercase.contains('é'));
        assert!(!CharacterClass::Uppercase.contains('É'));
        assert!(!CharacterClass::Digits.contains('٣'));
        assert!(CharacterClass::Special.contains('~'));
        assert!(!CharacterClass::Special.contains(' '));
    }
}
