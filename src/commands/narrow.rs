//! Narrowing command
//!
//! Applies guessed letters one after another, each time keeping only the
//! biggest family as the next word list.

use crate::core::FamilyError;
use crate::partition::Partitioner;
use crate::wordlists::check_uniform_length;
use rand::Rng;
use rustc_hash::FxHashSet;

/// One partitioning round
pub struct NarrowRound {
    pub letter: char,
    pub signature: String,
    pub family_count: usize,
    pub words_before: usize,
    pub words_after: usize,
}

/// Result of narrowing a word list
pub struct NarrowResult {
    pub rounds: Vec<NarrowRound>,
    /// Letters ignored because they were already applied
    pub repeated: Vec<char>,
    pub words: Vec<String>,
}

/// Narrow `words` by each letter in `letters`, in order
///
/// Each round keeps a snapshot of the biggest family. Repeated letters are
/// skipped, and narrowing stops once the word list is empty.
///
/// # Errors
///
/// Returns an error if:
/// - The words do not all have the same length
/// - A letter is not ASCII
/// - Family storage cannot be allocated
pub fn narrow_words<R: Rng>(
    partitioner: &Partitioner<R>,
    words: Vec<String>,
    letters: &str,
) -> Result<NarrowResult, FamilyError> {
    check_uniform_length(&words)?;

    let mut seen = FxHashSet::default();
    let mut rounds = Vec::new();
    let mut repeated = Vec::new();
    let mut words = words;

    for letter in letters.chars() {
        if words.is_empty() {
            break;
        }
        if !seen.insert(letter) {
            repeated.push(letter);
            continue;
        }

        let families = partitioner.generate_families(&words, letter)?;
        let Some(biggest) = families.biggest() else {
            break;
        };

        let next = biggest.snapshot_words();
        log::info!(
            "'{letter}': kept family {} ({} of {} words)",
            biggest.signature(),
            next.len(),
            words.len()
        );

        rounds.push(NarrowRound {
            letter,
            signature: biggest.signature().to_string(),
            family_count: families.len(),
            words_before: words.len(),
            words_after: next.len(),
        });
        words = next;
    }

    Ok(NarrowResult {
        rounds,
        repeated,
        words,
    })
}
