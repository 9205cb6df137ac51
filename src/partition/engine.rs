//! Partitioning context
//!
//! A `Partitioner` carries the family configuration and the random source
//! used for sampling. Build one at startup and pass it to whoever needs to
//! generate or sample families.

use super::Families;
use crate::core::{BLANK, Family, FamilyConfig, FamilyError, Signature, matches};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds word families and samples from them
pub struct Partitioner<R: Rng = StdRng> {
    config: FamilyConfig,
    rng: R,
}

impl Partitioner<StdRng> {
    /// Create a partitioner with an OS-seeded random source
    #[must_use]
    pub fn new(config: FamilyConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a partitioner with a deterministic random source
    #[must_use]
    pub fn with_seed(config: FamilyConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Partitioner<R> {
    /// Create a partitioner sampling from `rng`
    pub const fn with_rng(config: FamilyConfig, rng: R) -> Self {
        Self { config, rng }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &FamilyConfig {
        &self.config
    }

    /// Partition `words` into families by the first occurrence of `letter`
    ///
    /// All words are assumed to share the length of the first word. A
    /// non-empty list of length-L words always yields L + 1 families, some
    /// of which may be empty. An empty list yields an empty collection.
    ///
    /// # Errors
    /// Returns `FamilyError::LetterNotAscii` for non-ASCII letters,
    /// `FamilyError::LetterIsBlank` for the signature blank `-`, and
    /// `FamilyError::Allocation` if family storage cannot be allocated.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    /// use word_families::partition::Partitioner;
    ///
    /// let partitioner = Partitioner::new(FamilyConfig::default());
    /// let families = partitioner
    ///     .generate_families(&["aaa", "aab", "aba", "baa", "bbb"], 'a')
    ///     .unwrap();
    ///
    /// assert_eq!(families.len(), 4);
    /// assert_eq!(families.find("---").unwrap().words(), ["bbb"]);
    /// assert_eq!(families.find("a--").unwrap().words(), ["aaa", "aab", "aba"]);
    /// assert_eq!(families.find("-a-").unwrap().words(), ["baa"]);
    /// assert!(families.find("--a").unwrap().is_empty());
    /// ```
    pub fn generate_families<S: AsRef<str>>(
        &self,
        words: &[S],
        letter: char,
    ) -> Result<Families, FamilyError> {
        let letter = ascii_letter(letter)?;

        let Some(first) = words.first() else {
            return Ok(Families::empty(letter));
        };
        let word_length = first.as_ref().len();

        let family_count = word_length + 1;
        let mut families: Vec<Family> = Vec::new();
        if families.try_reserve_exact(family_count).is_err() {
            self.config.alloc_failed(family_count)?;
        }
        for position in 0..=word_length {
            let signature = Signature::build(word_length, position, letter);
            let mut family = Family::new(signature, self.config)?;
            group(position, words, &mut family, letter)?;
            families.push(family);
        }

        log::debug!(
            "partitioned {} words of length {word_length} by '{}' into {} families",
            words.len(),
            letter as char,
            families.len()
        );

        Ok(Families::new(letter, word_length, families))
    }

    /// Pick a random member of `family`
    ///
    /// # Errors
    /// Returns `FamilyError::EmptyFamily` if the family has no members.
    pub fn random_word<'f>(&mut self, family: &'f Family) -> Result<&'f str, FamilyError> {
        family.random_word(&mut self.rng)
    }
}

/// Append every word whose signature index is `position` to `family`
///
/// Index 0 collects words without `letter`; index `i` collects words whose
/// first `letter` sits at `i - 1`. List order is preserved.
///
/// # Errors
/// Returns `FamilyError::Allocation` if the family cannot grow.
pub fn group<S: AsRef<str>>(
    position: usize,
    words: &[S],
    family: &mut Family,
    letter: u8,
) -> Result<(), FamilyError> {
    for word in words {
        let word = word.as_ref();
        if matches(position, word, letter) {
            family.add_word(word)?;
        }
    }
    Ok(())
}

fn ascii_letter(letter: char) -> Result<u8, FamilyError> {
    if letter == BLANK {
        Err(FamilyError::LetterIsBlank)
    } else if letter.is_ascii() {
        Ok(letter as u8)
    } else {
        Err(FamilyError::LetterNotAscii(letter))
    }
}
