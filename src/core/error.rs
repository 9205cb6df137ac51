//! Error type for family construction and queries

use thiserror::Error;

/// Errors reported by the family partitioner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyError {
    /// The growth increment must add at least one slot
    #[error("growth increment must be greater than zero")]
    ZeroIncrement,

    /// Member storage could not be grown (only in `AllocFailure::Propagate` mode)
    #[error("failed to allocate storage for {requested} entries")]
    Allocation { requested: usize },

    /// Sampling requires at least one member
    #[error("cannot pick a random word from empty family '{signature}'")]
    EmptyFamily { signature: String },

    /// Guessed letters are matched byte-wise, so they must be ASCII
    #[error("letter '{0}' is not ASCII")]
    LetterNotAscii(char),

    /// The blank character cannot be guessed, it would make signatures collide
    #[error("letter '-' is reserved for blank signature positions")]
    LetterIsBlank,

    /// A word list contains words of different lengths
    #[error("word '{word}' has length {found}, expected {expected}")]
    LengthMismatch {
        expected: usize,
        found: usize,
        word: String,
    },

    /// An operation needed at least one word
    #[error("word list is empty")]
    EmptyWordList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = FamilyError::LengthMismatch {
            expected: 5,
            found: 3,
            word: "cat".to_string(),
        };
        assert_eq!(err.to_string(), "word 'cat' has length 3, expected 5");

        let err = FamilyError::EmptyFamily {
            signature: "--a".to_string(),
        };
        assert!(err.to_string().contains("--a"));
    }
}
