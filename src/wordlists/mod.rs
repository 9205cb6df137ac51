//! Word lists
//!
//! Loading candidate words and enforcing the equal-length precondition the
//! partitioner relies on.

pub mod loader;

pub use loader::{check_uniform_length, load_from_file, normalize_letter, words_of_length};
