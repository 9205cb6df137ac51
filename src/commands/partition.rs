//! Partition command
//!
//! Splits a word list by one letter and reports every family.

use crate::core::FamilyError;
use crate::partition::{Families, Partitioner};
use crate::wordlists::check_uniform_length;
use rand::Rng;

/// Result of partitioning a word list
pub struct PartitionResult {
    pub letter: char,
    pub total_words: usize,
    pub families: Families,
}

impl PartitionResult {
    /// Signature of the family with the most members
    #[must_use]
    pub fn biggest_signature(&self) -> Option<&str> {
        self.families.biggest().map(|f| f.signature().as_str())
    }
}

/// Partition `words` by `letter`
///
/// # Errors
///
/// Returns an error if:
/// - The words do not all have the same length
/// - The letter is not ASCII
/// - Family storage cannot be allocated
pub fn partition_words<R: Rng, S: AsRef<str>>(
    partitioner: &Partitioner<R>,
    words: &[S],
    letter: char,
) -> Result<PartitionResult, FamilyError> {
    check_uniform_length(words)?;
    let families = partitioner.generate_families(words, letter)?;

    Ok(PartitionResult {
        letter,
        total_words: words.len(),
        families,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FamilyConfig;

    fn partitioner() -> Partitioner {
        Partitioner::with_seed(FamilyConfig::default(), 3)
    }

    #[test]
    fn partition_reports_all_families() {
        let words = ["echo", "ends", "tree", "bolt"];
        let result = partition_words(&partitioner(), &words, 'e').unwrap();

        assert_eq!(result.total_words, 4);
        assert_eq!(result.families.len(), 5);
        assert_eq!(result.families.word_count(), 4);
        assert_eq!(result.biggest_signature(), Some("e---"));
    }

    #[test]
    fn partition_rejects_mixed_lengths() {
        let words = ["echo", "end"];
        let result = partition_words(&partitioner(), &words, 'e');

        assert!(matches!(result, Err(FamilyError::LengthMismatch { .. })));
    }

    #[test]
    fn partition_empty_list() {
        let words: [&str; 0] = [];
        let result = partition_words(&partitioner(), &words, 'e').unwrap();

        assert!(result.families.is_empty());
        assert_eq!(result.biggest_signature(), None);
    }
}
