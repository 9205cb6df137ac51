//! Word list loading utilities
//!
//! Provides functions to load word lists from files and filter them to a
//! single word length.

use crate::core::FamilyError;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Lines are trimmed and lower-cased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_families::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Ok(words)
}

/// Fold a guessed letter to the case `load_from_file` stores words in
///
/// # Examples
/// ```
/// use word_families::wordlists::normalize_letter;
///
/// assert_eq!(normalize_letter('E'), 'e');
/// assert_eq!(normalize_letter('e'), 'e');
/// ```
#[must_use]
pub fn normalize_letter(letter: char) -> char {
    letter.to_ascii_lowercase()
}

/// Keep only the words with exactly `length` bytes
///
/// # Examples
/// ```
/// use word_families::wordlists::words_of_length;
///
/// let words = vec!["cat".to_string(), "goat".to_string(), "dog".to_string()];
/// assert_eq!(words_of_length(words, 3), ["cat", "dog"]);
/// ```
#[must_use]
pub fn words_of_length(words: Vec<String>, length: usize) -> Vec<String> {
    words.into_iter().filter(|w| w.len() == length).collect()
}

/// Check that every word has the length of the first one
///
/// # Errors
///
/// Returns `FamilyError::LengthMismatch` for the first word whose length
/// differs from the first word's.
pub fn check_uniform_length<S: AsRef<str>>(words: &[S]) -> Result<(), FamilyError> {
    let Some(first) = words.first() else {
        return Ok(());
    };
    let expected = first.as_ref().len();

    match words.iter().find(|w| w.as_ref().len() != expected) {
        Some(word) => Err(FamilyError::LengthMismatch {
            expected,
            found: word.as_ref().len(),
            word: word.as_ref().to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_trims_and_skips_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Apple\n\n  grape  \nPEACH\n").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, ["apple", "grape", "peach"]);
    }

    #[test]
    fn load_from_missing_file() {
        assert!(load_from_file("/nonexistent/word/list.txt").is_err());
    }

    #[test]
    fn uppercase_letter_matches_loaded_words() {
        use crate::core::FamilyConfig;
        use crate::partition::Partitioner;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ECHO
ends
bolt").unwrap();
        let words = load_from_file(file.path()).unwrap();

        let partitioner = Partitioner::with_seed(FamilyConfig::default(), 5);
        let families = partitioner
            .generate_families(&words, normalize_letter('E'))
            .unwrap();

        assert_eq!(families.find("e---").unwrap().words(), ["echo", "ends"]);
        assert_eq!(families.find("----").unwrap().words(), ["bolt"]);
    }

    #[test]
    fn normalize_letter_leaves_non_letters() {
        assert_eq!(normalize_letter('Q'), 'q');
        assert_eq!(normalize_letter('-'), '-');
        assert_eq!(normalize_letter('é'), 'é');
    }

    #[test]
    fn words_of_length_filters() {
        let words = vec!["a".to_string(), "bb".to_string(), "cc".to_string()];
        assert_eq!(words_of_length(words, 2), ["bb", "cc"]);
    }

    #[test]
    fn words_of_length_empty() {
        assert!(words_of_length(Vec::new(), 4).is_empty());
    }

    #[test]
    fn uniform_length_accepts_consistent_lists() {
        assert!(check_uniform_length(&["abc", "def"]).is_ok());
        let empty: [&str; 0] = [];
        assert!(check_uniform_length(&empty).is_ok());
    }

    #[test]
    fn uniform_length_reports_first_mismatch() {
        let err = check_uniform_length(&["abc", "de", "fghi"]).unwrap_err();
        assert_eq!(
            err,
            FamilyError::LengthMismatch {
                expected: 3,
                found: 2,
                word: "de".to_string(),
            }
        );
    }
}
