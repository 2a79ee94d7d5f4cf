//! Building blocks for password generation.
//!
//! - **charset**: character classes, alphabets and length defaults
//! - **rng**: cryptographically secure, unbiased integer sampling

/// Character classes and alphabets.
pub mod charset;
/// Cryptographically secure random number generation.
pub mod rng;

pub use charset::{
    eligible_chars, CharClass, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_SPECIAL_CHARS,
    DIGITS, LOWERCASE_LETTERS, UPPERCASE_LETTERS,
};
pub use rng::{uniform_in_range, uniform_index, SecureRng};
