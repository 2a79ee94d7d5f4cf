use crate::primitives::{CharClass, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

/// Composition rules a generated password must satisfy.
///
/// All counts are lower bounds. `min_length` and `max_length` of zero mean
/// "use the default" ([`DEFAULT_MIN_LENGTH`] and [`DEFAULT_MAX_LENGTH`]).
/// The target length is drawn from `[min_length, max_length)`; the minimums
/// take precedence, so a password may exceed `max_length` when their sum
/// demands it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CompositionRules {
    /// Minimum count of `A-Z`.
    pub min_uppercase: usize,
    /// Minimum count of `a-z`.
    pub min_lowercase: usize,
    /// Minimum count of `0-9`.
    pub min_number: usize,
    /// Minimum count of characters from the active special set.
    pub min_special_char: usize,
    /// Minimum total length.
    pub min_length: usize,
    /// Exclusive upper bound of the drawn target length.
    pub max_length: usize,
}

impl CompositionRules {
    /// Returns the rules with length defaults and coercion applied.
    ///
    /// A zero `min_length` becomes 8 and a zero `max_length` becomes 15. If the
    /// maximum does not exceed the minimum it is raised to `min_length + 1`, so
    /// the length draw always has at least one candidate. The bump saturates at
    /// `usize::MAX`, leaving an empty range that fails at the length draw.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use password_generator::CompositionRules;
    ///
    /// let rules = CompositionRules { min_length: 20, max_length: 10, ..Default::default() };
    /// let rules = rules.normalized();
    /// assert_eq!((rules.min_length, rules.max_length), (20, 21));
    /// ```
    pub fn normalized(mut self) -> Self {
        if self.min_length == 0 {
            self.min_length = DEFAULT_MIN_LENGTH;
        }
        if self.max_length == 0 {
            self.max_length = DEFAULT_MAX_LENGTH;
        }
        if self.max_length <= self.min_length {
            tracing::warn!(
                min_length = self.min_length,
                max_length = self.max_length,
                "max_length does not exceed min_length, coercing to min_length + 1"
            );
            self.max_length = self.min_length.saturating_add(1);
        }
        self
    }

    /// Total characters appended by the minimum-condition phase.
    pub fn required_len(&self) -> usize {
        self.min_uppercase
            .saturating_add(self.min_lowercase)
            .saturating_add(self.min_number)
            .saturating_add(self.min_special_char)
    }

    pub(crate) fn minimum_for(&self, class: CharClass) -> usize {
        match class {
            CharClass::Uppercase => self.min_uppercase,
            CharClass::Lowercase => self.min_lowercase,
            CharClass::Digit => self.min_number,
            CharClass::Special => self.min_special_char,
        }
    }
}
