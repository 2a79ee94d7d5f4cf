//! Error types for password generation

use std::fmt;

use crate::primitives::CharClass;

/// Failure of the random source to produce a value.
#[derive(Debug, thiserror::Error)]
pub enum RandomError {
    /// The operating system entropy source returned an error.
    #[error("entropy source failure: {0}")]
    Entropy(#[from] rand_core::Error),

    /// The requested range contains no values.
    #[error("cannot sample from empty range [{min}, {max})")]
    EmptyRange { min: usize, max: usize },
}

/// Generation step during which a random draw failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Appending the required characters of one class.
    MinimumCondition(CharClass),
    /// Drawing the target password length.
    Length,
    /// Filling the password up to the target length.
    Padding,
    /// Permuting the final character positions.
    Shuffle,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::MinimumCondition(class) => write!(f, "satisfying minimum {class} count"),
            Phase::Length => f.write_str("determining password length"),
            Phase::Padding => f.write_str("adding random character"),
            Phase::Shuffle => f.write_str("shuffling password"),
        }
    }
}

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A random draw failed while building a password.
    #[error("error {phase}")]
    Generation {
        phase: Phase,
        #[source]
        source: RandomError,
    },

    /// Configuration values can never produce a password.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn generation(phase: Phase, source: RandomError) -> Self {
        Error::Generation { phase, source }
    }

    /// Returns the phase that failed, if this is a generation error.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Error::Generation { phase, .. } => Some(*phase),
            Error::InvalidConfig(_) => None,
        }
    }

    /// True when the underlying entropy source itself failed.
    pub fn is_entropy_failure(&self) -> bool {
        matches!(
            self,
            Error::Generation {
                source: RandomError::Entropy(_),
                ..
            }
        )
    }

    /// True when the failure stems from a character set or range with no values.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Error::Generation {
                source: RandomError::EmptyRange { .. },
                ..
            } | Error::InvalidConfig(_)
        )
    }
}
