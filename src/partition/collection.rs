//! Ordered collection of families for one (word list, letter) pair

use crate::core::Family;

/// Families produced by one partitioning round
///
/// Ordered by signature index: the no-occurrence family first, then one
/// family per marked position. Dropping the collection releases every
/// family and every word it owns.
#[derive(Debug, Clone)]
pub struct Families {
    letter: u8,
    word_length: usize,
    families: Vec<Family>,
}

impl Families {
    pub(crate) const fn new(letter: u8, word_length: usize, families: Vec<Family>) -> Self {
        Self {
            letter,
            word_length,
            families,
        }
    }

    /// Collection produced from an empty word list
    pub(crate) const fn empty(letter: u8) -> Self {
        Self::new(letter, 0, Vec::new())
    }

    /// Find the first family whose signature equals `signature`
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    /// use word_families::partition::Partitioner;
    ///
    /// let partitioner = Partitioner::with_seed(FamilyConfig::default(), 1);
    /// let families = partitioner.generate_families(&["ab", "ba"], 'a').unwrap();
    ///
    /// assert_eq!(families.find("a-").unwrap().words(), ["ab"]);
    /// assert!(families.find("aa").is_none());
    /// ```
    #[must_use]
    pub fn find(&self, signature: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.signature() == signature)
    }

    /// Family with the most members
    ///
    /// Ties go to the earliest family, so an all-empty collection yields the
    /// no-occurrence family. Returns `None` only for an empty collection.
    #[must_use]
    pub fn biggest(&self) -> Option<&Family> {
        let mut iter = self.families.iter();
        let mut best = iter.next()?;

        for family in iter {
            if family.len() > best.len() {
                best = family;
            }
        }

        Some(best)
    }

    /// Family at signature index `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Family> {
        self.families.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Family> {
        self.families.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.families.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Length of every word and signature in the collection (0 when empty)
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Letter the words were partitioned by
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter as char
    }

    /// Total number of words across all families
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.families.iter().map(Family::len).sum()
    }
}

impl<'a> IntoIterator for &'a Families {
    type Item = &'a Family;
    type IntoIter = std::slice::Iter<'a, Family>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FamilyConfig, Signature};

    fn family_with(position: usize, words: &[&str]) -> Family {
        let config = FamilyConfig::new(2).unwrap();
        let mut family = Family::new(Signature::build(3, position, b'a'), config).unwrap();
        for word in words {
            family.add_word(word).unwrap();
        }
        family
    }

    #[test]
    fn biggest_on_empty_collection() {
        assert!(Families::empty(b'a').biggest().is_none());
    }

    #[test]
    fn biggest_prefers_earliest_on_tie() {
        let families = Families::new(
            b'a',
            3,
            vec![
                family_with(0, &["bbb"]),
                family_with(1, &["abb", "acc"]),
                family_with(2, &["baa", "bab"]),
            ],
        );

        assert_eq!(families.biggest().unwrap().signature(), "a--");
    }

    #[test]
    fn biggest_of_all_empty_is_first() {
        let families = Families::new(
            b'a',
            3,
            vec![family_with(0, &[]), family_with(1, &[]), family_with(2, &[])],
        );

        assert_eq!(families.biggest().unwrap().signature(), "---");
    }

    #[test]
    fn find_by_signature() {
        let families = Families::new(
            b'a',
            3,
            vec![family_with(0, &["bbb"]), family_with(2, &["bab"])],
        );

        assert_eq!(families.find("-a-").unwrap().words(), ["bab"]);
        assert!(families.find("--a").is_none());
        assert!(families.find("").is_none());
    }

    #[test]
    fn accessors() {
        let families = Families::new(
            b'a',
            3,
            vec![family_with(0, &["bbb", "ccc"]), family_with(1, &["abc"])],
        );

        assert_eq!(families.len(), 2);
        assert_eq!(families.word_count(), 3);
        assert_eq!(families.letter(), 'a');
        assert_eq!(families.word_length(), 3);
        assert_eq!(families.get(1).unwrap().signature(), "a--");
        assert_eq!((&families).into_iter().count(), 2);
    }
}
