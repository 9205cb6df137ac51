//! Sampling command
//!
//! Draws random words from the biggest family for a letter.

use crate::core::FamilyError;
use crate::partition::Partitioner;
use crate::wordlists::check_uniform_length;
use rand::Rng;

/// Random draws from one family
pub struct SampleResult {
    pub signature: String,
    pub family_size: usize,
    pub draws: Vec<String>,
}

/// Partition `words` by `letter` and draw `count` words from the biggest family
///
/// # Errors
///
/// Returns an error if:
/// - The word list is empty or has mixed lengths
/// - The letter is not ASCII
/// - Family storage cannot be allocated
pub fn sample_biggest<R: Rng, S: AsRef<str>>(
    partitioner: &mut Partitioner<R>,
    words: &[S],
    letter: char,
    count: usize,
) -> Result<SampleResult, FamilyError> {
    check_uniform_length(words)?;

    let families = partitioner.generate_families(words, letter)?;
    let biggest = families.biggest().ok_or(FamilyError::EmptyWordList)?;

    let draws = (0..count)
        .map(|_| partitioner.random_word(biggest).map(ToString::to_string))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SampleResult {
        signature: biggest.signature().to_string(),
        family_size: biggest.len(),
        draws,
    })
}
