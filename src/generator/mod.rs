//! Password generation from composition rules.
//!
//! A [`PasswordGenerator`] builds each password in three steps:
//!
//! 1. append the required minimum of each [`CharClass`] in the fixed order
//!    uppercase, lowercase, digit, special
//! 2. draw a target length from `[min_length, max_length)`
//! 3. pad with characters drawn from the eligible set until the target is reached
//!
//! The characters guaranteed by step 1 stay at the front of the password
//! unless shuffling is enabled with [`PasswordGenerator::with_shuffle`].

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::error::{Error, Phase, RandomError};
use crate::primitives::{
    eligible_chars, uniform_in_range, uniform_index, CharClass, SecureRng, DEFAULT_SPECIAL_CHARS,
};
use crate::Result;

#[cfg(feature = "config")]
/// Layered configuration loading.
pub mod config;
/// Generated password value.
pub mod password;
/// Composition rules and length defaults.
pub mod rules;

#[cfg(feature = "config")]
pub use config::GeneratorConfig;
pub use password::Password;
pub use rules::CompositionRules;

/// Generates random passwords satisfying a set of [`CompositionRules`].
///
/// The generator keeps no per-call state, so one instance can be shared
/// across threads and called concurrently.
///
/// # Examples
///
/// ```rust
/// use password_generator::{CompositionRules, PasswordGenerator};
///
/// let rules = CompositionRules {
///     min_uppercase: 1,
///     min_lowercase: 1,
///     min_number: 1,
///     min_special_char: 1,
///     min_length: 8,
///     max_length: 15,
/// };
/// let generator = PasswordGenerator::new(rules, None);
/// let password = generator.generate().unwrap();
///
/// assert!((8..15).contains(&password.char_count()));
/// ```
#[derive(Clone, Debug)]
pub struct PasswordGenerator {
    rules: CompositionRules,
    allowed_special_chars: Option<String>,
    shuffle: bool,
}

impl PasswordGenerator {
    /// Creates a generator with the given rules and optional special-character override.
    ///
    /// Length defaults and coercion are applied to `rules` (see
    /// [`CompositionRules::normalized`]). The override is stored as given; an
    /// empty override is accepted and only fails once a special character has
    /// to be drawn from it.
    pub fn new(rules: CompositionRules, allowed_special_chars: Option<String>) -> Self {
        Self {
            rules: rules.normalized(),
            allowed_special_chars,
            shuffle: false,
        }
    }

    /// Enables or disables a final uniform shuffle of character positions.
    ///
    /// Off by default, which keeps the guaranteed characters at the front in
    /// class order.
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Returns the effective (normalized) rules.
    pub fn rules(&self) -> &CompositionRules {
        &self.rules
    }

    /// Returns the special-character override, if any.
    pub fn allowed_special_chars(&self) -> Option<&str> {
        self.allowed_special_chars.as_deref()
    }

    /// Returns the special characters in use: the override, or `!@#$`.
    pub fn special_chars(&self) -> &str {
        self.allowed_special_chars
            .as_deref()
            .unwrap_or(DEFAULT_SPECIAL_CHARS)
    }

    /// Returns the characters padding is drawn from.
    pub fn eligible_chars(&self) -> Vec<char> {
        eligible_chars(self.special_chars())
    }

    /// Whether the final shuffle is enabled.
    pub fn shuffles(&self) -> bool {
        self.shuffle
    }

    /// Generates a password using the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] tagged with the failing [`Phase`] if the
    /// random source fails or a required character set is empty.
    pub fn generate(&self) -> Result<Password> {
        let mut rng = SecureRng::new();
        self.generate_with_rng(&mut rng)
    }

    /// Generates a password drawing from the supplied random source.
    ///
    /// No partial password is returned on failure.
    pub fn generate_with_rng<R>(&self, rng: &mut R) -> Result<Password>
    where
        R: CryptoRngCore + ?Sized,
    {
        let special = self.special_chars();
        let capacity = self.rules.max_length.max(self.rules.required_len());
        let mut buf: Zeroizing<Vec<char>> = Zeroizing::new(Vec::new());
        // Sized in chars so the buffer never reallocates; oversized rules fail
        // at the length draw instead.
        let _ = buf.try_reserve_exact(capacity);

        for class in CharClass::ALL {
            let alphabet: Vec<char> = class.alphabet(special).chars().collect();
            for _ in 0..self.rules.minimum_for(class) {
                push_random(rng, &alphabet, &mut buf)
                    .map_err(|e| failed(Phase::MinimumCondition(class), e))?;
            }
        }

        let target = uniform_in_range(rng, self.rules.min_length, self.rules.max_length)
            .map_err(|e| failed(Phase::Length, e))?;

        let eligible = eligible_chars(special);
        while buf.len() < target {
            push_random(rng, &eligible, &mut buf).map_err(|e| failed(Phase::Padding, e))?;
        }

        if self.shuffle {
            shuffle(rng, &mut buf).map_err(|e| failed(Phase::Shuffle, e))?;
        }

        let mut password = String::with_capacity(buf.iter().map(|c| c.len_utf8()).sum());
        password.extend(buf.iter());
        Ok(Password::new(password))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(CompositionRules::default(), None)
    }
}

fn push_random<R>(
    rng: &mut R,
    alphabet: &[char],
    buf: &mut Vec<char>,
) -> std::result::Result<(), RandomError>
where
    R: CryptoRngCore + ?Sized,
{
    let index = uniform_index(rng, alphabet.len())?;
    buf.push(alphabet[index]);
    Ok(())
}

/// Fisher-Yates over `chars`.
fn shuffle<R>(rng: &mut R, chars: &mut [char]) -> std::result::Result<(), RandomError>
where
    R: CryptoRngCore + ?Sized,
{
    for i in (1..chars.len()).rev() {
        let j = uniform_index(rng, i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}

fn failed(phase: Phase, source: RandomError) -> Error {
    tracing::debug!(%phase, error = %source, "password generation failed");
    Error::generation(phase, source)
}
