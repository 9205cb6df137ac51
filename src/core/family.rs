//! Word families
//!
//! A family owns its signature and an ordered list of member words. Member
//! storage grows linearly: each time the list is full, exactly one growth
//! increment of slots is added.

use super::{FamilyConfig, FamilyError, Signature};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A signature and the words that share it
#[derive(Debug)]
pub struct Family {
    signature: Signature,
    words: Vec<String>,
    capacity: usize,
    config: FamilyConfig,
}

impl Family {
    /// Create an empty family with room for one growth increment of words
    ///
    /// # Errors
    /// Returns `FamilyError::Allocation` if the initial storage cannot be
    /// allocated and the configuration propagates allocation failures.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::{Family, FamilyConfig, Signature};
    ///
    /// let config = FamilyConfig::new(4).unwrap();
    /// let family = Family::new(Signature::build(3, 0, b'a'), config).unwrap();
    ///
    /// assert_eq!(family.signature(), "---");
    /// assert!(family.is_empty());
    /// assert_eq!(family.capacity(), 4);
    /// ```
    pub fn new(signature: Signature, config: FamilyConfig) -> Result<Self, FamilyError> {
        let capacity = config.growth_increment();
        let mut words = Vec::new();
        reserve(&mut words, capacity, config)?;

        Ok(Self {
            signature,
            words,
            capacity,
            config,
        })
    }

    /// Append a copy of `word`, growing storage by one increment when full
    ///
    /// Duplicates are kept as separate entries.
    ///
    /// # Errors
    /// Returns `FamilyError::Allocation` if storage cannot be grown and the
    /// configuration propagates allocation failures.
    pub fn add_word(&mut self, word: &str) -> Result<(), FamilyError> {
        if self.words.len() == self.capacity {
            let increment = self.config.growth_increment();
            reserve(&mut self.words, increment, self.config)?;
            self.capacity += increment;
            log::trace!("family {} grew to {} slots", self.signature, self.capacity);
        }

        let mut owned = String::new();
        reserve_text(&mut owned, word.len(), self.config)?;
        owned.push_str(word);
        self.words.push(owned);

        Ok(())
    }

    /// Get the family signature
    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Member words in insertion order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of member slots currently reserved
    ///
    /// Always a multiple of the growth increment.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy the member list into independent storage
    ///
    /// The copy reserves at least the family's current capacity and shares
    /// nothing with the family, so growing the family later leaves it intact.
    #[must_use]
    pub fn snapshot_words(&self) -> Vec<String> {
        let mut snapshot = Vec::with_capacity(self.capacity);
        snapshot.extend(self.words.iter().cloned());
        snapshot
    }

    /// Pick a member uniformly at random
    ///
    /// # Errors
    /// Returns `FamilyError::EmptyFamily` if the family has no members.
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, FamilyError> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| FamilyError::EmptyFamily {
                signature: self.signature.to_string(),
            })
    }
}

impl Clone for Family {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            words: self.snapshot_words(),
            capacity: self.capacity,
            config: self.config,
        }
    }
}

fn reserve(
    words: &mut Vec<String>,
    additional: usize,
    config: FamilyConfig,
) -> Result<(), FamilyError> {
    match words.try_reserve_exact(additional) {
        Ok(()) => Ok(()),
        Err(_) => config.alloc_failed(words.len().saturating_add(additional)),
    }
}

fn reserve_text(
    text: &mut String,
    additional: usize,
    config: FamilyConfig,
) -> Result<(), FamilyError> {
    match text.try_reserve_exact(additional) {
        Ok(()) => Ok(()),
        Err(_) => config.alloc_failed(additional),
    }
}
