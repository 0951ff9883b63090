#![allow(dead_code)]

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?/";

/// One of the four fixed sets a generated password must draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order the guaranteed characters are picked.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The ASCII characters belonging to this class.
    pub fn chars(self) -> &'static [u8] {
        match self {
            CharacterClass::Lower => LOWERCASE,
            CharacterClass::Upper => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// Returns the class `c` belongs to, or `None` if it is outside the alphabet.
    pub fn of(c: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(c))
    }
}

/// The union of all four classes, in class order.
pub fn alphabet() -> Vec<u8> {
    CharacterClass::ALL
        .iter()
        .flat_map(|class| class.chars().iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharacterClass::Lower.chars().len(), 26);
        assert_eq!(CharacterClass::Upper.chars().len(), 26);
        assert_eq!(CharacterClass::Digit.chars().len(), 10);
        assert_eq!(CharacterClass::Symbol.chars().len(), 27);
        assert_eq!(alphabet().len(), 89);
    }

    #[test]
    fn test_classes_are_disjoint() {
        let unique: HashSet<u8> = alphabet().into_iter().collect();
        assert_eq!(unique.len(), alphabet().len());
    }

    #[test]
    fn test_classify() {
        assert_eq!(CharacterClass::of('q'), Some(CharacterClass::Lower));
        assert_eq!(CharacterClass::of('Q'), Some(CharacterClass::Upper));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::of('/'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of('|'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of(' '), None);
        assert_eq!(CharacterClass::of('\''), None);
        assert_eq!(CharacterClass::of('~'), None);
        assert_eq!(CharacterClass::of('é'), None);
    }

    #[test]
    fn test_alphabet_order() {
        let alphabet = alphabet();
        assert_eq!(alphabet.first(), Some(&b'a'));
        assert_eq!(alphabet[26], b'A');
        assert_eq!(alphabet[52], b'0');
        assert_eq!(alphabet.last(), Some(&b'/'));
    }
}
