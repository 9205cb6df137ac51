//! Word Families
//!
//! Partitions candidate words into families by where a guessed letter first
//! occurs, the core of an adversarial letter-guessing game.
//!
//! # Quick Start
//!
//! ```rust
//! use word_families::core::FamilyConfig;
//! use word_families::partition::Partitioner;
//!
//! let config = FamilyConfig::new(8).unwrap();
//! let mut partitioner = Partitioner::new(config);
//!
//! let families = partitioner
//!     .generate_families(&["lamp", "lump", "list", "bold"], 'l')
//!     .unwrap();
//!
//! let biggest = families.biggest().unwrap();
//! assert_eq!(biggest.signature(), "l---");
//!
//! let word = partitioner.random_word(biggest).unwrap();
//! assert!(biggest.words().iter().any(|w| w == word));
//! ```

// Core domain types
pub mod core;

// Partitioning and collection queries
pub mod partition;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
