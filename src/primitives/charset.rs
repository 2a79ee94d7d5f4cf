//! Character classes and their alphabets.

use std::fmt;

/// Uppercase ASCII letters.
pub const UPPERCASE_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Lowercase ASCII letters.
pub const LOWERCASE_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
/// ASCII decimal digits.
pub const DIGITS: &str = "0123456789";
/// Special characters used when no override is supplied.
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$";

/// Minimum password length used when the rules leave it at zero.
pub const DEFAULT_MIN_LENGTH: usize = 8;
/// Maximum password length used when the rules leave it at zero.
pub const DEFAULT_MAX_LENGTH: usize = 15;

/// A class of characters a password must contain a minimum count of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl CharClass {
    /// Classes in the order their minimums are appended.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// Returns the alphabet for this class, drawing special characters from `special`.
    pub fn alphabet<'a>(&self, special: &'a str) -> &'a str {
        match self {
            CharClass::Uppercase => UPPERCASE_LETTERS,
            CharClass::Lowercase => LOWERCASE_LETTERS,
            CharClass::Digit => DIGITS,
            CharClass::Special => special,
        }
    }

    /// Returns the class `c` belongs to, checking `special` last.
    ///
    /// Letters and digits win over an override that repeats them.
    pub fn classify(c: char, special: &str) -> Option<CharClass> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Uppercase)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lowercase)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if special.contains(c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase",
            CharClass::Lowercase => "lowercase",
            CharClass::Digit => "digit",
            CharClass::Special => "special",
        };
        f.write_str(name)
    }
}

/// Concatenation of every class alphabet, used for padding.
pub fn eligible_chars(special: &str) -> Vec<char> {
    CharClass::ALL
        .iter()
        .flat_map(|class| class.alphabet(special).chars())
        .collect()
}
