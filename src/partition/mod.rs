//! Family partitioning
//!
//! Splits a word list into families keyed by where a guessed letter first
//! occurs, and answers queries over the resulting collection.

mod collection;
mod engine;

pub use collection::Families;
pub use engine::{Partitioner, group};
