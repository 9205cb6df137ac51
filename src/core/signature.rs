//! Family signatures
//!
//! A signature is a template of the same length as the words it describes.
//! Every position is `-` except, at most, the one holding the first
//! occurrence of the guessed letter.
//!
//! Signatures are indexed by position: index 0 is the all-dash "letter does
//! not occur" signature, index `i > 0` marks position `i - 1`. A word of
//! length L therefore has L + 1 possible signatures.

use std::fmt;

/// Character used for positions that do not hold the guessed letter
pub const BLANK: char = '-';

/// Template string shared by all members of a family
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// Build the signature for `position` over words of `length` characters
    ///
    /// Position 0 yields all dashes. Position `i` in `1..=length` places
    /// `letter` at index `i - 1`. Positions past `length` yield all dashes.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::Signature;
    ///
    /// assert_eq!(Signature::build(4, 0, b'e').as_str(), "----");
    /// assert_eq!(Signature::build(4, 1, b'e').as_str(), "e---");
    /// assert_eq!(Signature::build(4, 4, b'e').as_str(), "---e");
    /// ```
    #[must_use]
    pub fn build(length: usize, position: usize, letter: u8) -> Self {
        let marked = position.checked_sub(1);

        let text = (0..length)
            .map(|i| {
                if Some(i) == marked {
                    char::from(letter)
                } else {
                    BLANK
                }
            })
            .collect();

        Self(text)
    }

    /// Get the signature as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the words this signature describes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Signature {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Signature {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Index of the first occurrence of `letter` in `word`
#[inline]
#[must_use]
pub fn first_occurrence(word: &str, letter: u8) -> Option<usize> {
    word.bytes().position(|b| b == letter)
}

/// Signature index a word belongs to for `letter`
///
/// 0 when the letter is absent, otherwise one past its first occurrence.
#[inline]
#[must_use]
pub fn position_index(word: &str, letter: u8) -> usize {
    first_occurrence(word, letter).map_or(0, |i| i + 1)
}

/// Check whether `word` belongs to the family at signature index `position`
#[inline]
#[must_use]
pub fn matches(position: usize, word: &str, letter: u8) -> bool {
    position_index(word, letter) == position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_no_occurrence() {
        let sig = Signature::build(5, 0, b'a');
        assert_eq!(sig, "-----");
        assert_eq!(sig.len(), 5);
    }

    #[test]
    fn build_marks_single_position() {
        assert_eq!(Signature::build(3, 1, b'a'), "a--");
        assert_eq!(Signature::build(3, 2, b'a'), "-a-");
        assert_eq!(Signature::build(3, 3, b'a'), "--a");
    }

    #[test]
    fn build_past_length_is_blank() {
        assert_eq!(Signature::build(3, 4, b'a'), "---");
        assert_eq!(Signature::build(3, usize::MAX, b'a'), "---");
    }

    #[test]
    fn build_is_deterministic() {
        assert_eq!(Signature::build(6, 4, b'z'), Signature::build(6, 4, b'z'));
    }

    #[test]
    fn build_zero_length() {
        let sig = Signature::build(0, 0, b'a');
        assert!(sig.is_empty());
    }

    #[test]
    fn first_occurrence_ignores_later_repeats() {
        assert_eq!(first_occurrence("banana", b'a'), Some(1));
        assert_eq!(first_occurrence("banana", b'n'), Some(2));
        assert_eq!(first_occurrence("banana", b'z'), None);
    }

    #[test]
    fn position_index_offsets_by_one() {
        assert_eq!(position_index("bbb", b'a'), 0);
        assert_eq!(position_index("abb", b'a'), 1);
        assert_eq!(position_index("baa", b'a'), 2);
    }

    #[test]
    fn matches_uses_first_occurrence() {
        // "aba" has an 'a' at index 2 but its first 'a' is at index 0
        assert!(matches(1, "aba", b'a'));
        assert!(!matches(3, "aba", b'a'));
        assert!(matches(0, "bbb", b'a'));
        assert!(!matches(0, "bab", b'a'));
    }

    #[test]
    fn display_matches_text() {
        assert_eq!(Signature::build(4, 2, b'q').to_string(), "-q--");
    }
}
