use std::fmt;
use std::ops::Deref;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::primitives::CharClass;

/// A generated password.
///
/// Owned by the caller and immutable. The backing memory is zeroized on drop
/// and `Debug` output is redacted; use [`Password::as_str`] or `Display` to
/// read the value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns the password text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Counts characters per class, classifying specials against `special`.
    ///
    /// Returns counts in [`CharClass::ALL`] order; characters outside every
    /// class are not counted.
    pub fn class_counts(&self, special: &str) -> [usize; 4] {
        let mut counts = [0; 4];
        for c in self.0.chars() {
            if let Some(class) = CharClass::classify(c, special) {
                counts[class as usize] += 1;
            }
        }
        counts
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.0.capacity()
    }

    /// Moves the text out, leaving nothing behind to zeroize.
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

impl Deref for Password {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let password = Password::new("Ab1!secret".to_string());
        assert_eq!(format!("{password:?}"), "Password(\"<redacted>\")");
        assert_eq!(password.to_string(), "Ab1!secret");
    }

    #[test]
    fn counts_each_class() {
        let password = Password::new("ABc12!!?".to_string());
        assert_eq!(password.class_counts("!@#$"), [2, 1, 2, 2]);
        assert_eq!(password.char_count(), 8);
    }

    #[test]
    fn into_string_returns_text() {
        let password = Password::new("xyz".to_string());
        assert_eq!(password.into_string(), "xyz");
    }
}
