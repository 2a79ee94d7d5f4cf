//! Random password generation with configurable composition rules.
//!
//! Passwords are built from a [`CompositionRules`] value: minimum counts of
//! uppercase letters, lowercase letters, digits and special characters, plus
//! a minimum and maximum total length. Every random draw comes from the
//! operating system's cryptographic source through [`SecureRng`]; a failing
//! source is reported as an [`Error`], never replaced by a weaker generator.
//!
//! # Examples
//!
//! ```rust
//! use password_generator::{CompositionRules, PasswordGenerator};
//!
//! let rules = CompositionRules {
//!     min_uppercase: 1,
//!     min_lowercase: 1,
//!     min_number: 1,
//!     min_special_char: 1,
//!     ..Default::default()
//! };
//!
//! let generator = PasswordGenerator::new(rules, Some("%&*".to_string()));
//! let password = generator.generate().unwrap();
//!
//! assert!(password.char_count() >= 8);
//! assert_eq!(password.class_counts("%&*").iter().filter(|&&n| n == 0).count(), 0);
//! ```
//!
//! # Features
//!
//! - `config` (default): [`GeneratorConfig`] loads rules from `.env`, a TOML
//!   file and `PASSGEN_` environment variables.

#![deny(clippy::all)]

pub mod error;
/// Password generator, rules and output type.
pub mod generator;
/// Character sets and secure random sampling.
pub mod primitives;

pub use error::{Error, Phase, RandomError};
#[cfg(feature = "config")]
pub use generator::GeneratorConfig;
pub use generator::{CompositionRules, Password, PasswordGenerator};
pub use primitives::{CharClass, SecureRng};

/// Result type for password generation.
pub type Result<T> = std::result::Result<T, Error>;
