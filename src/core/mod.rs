//! Core domain types for word families
//!
//! Signatures, families, and the configuration they are built with.
//! Nothing here depends on how families are grouped into collections.

mod config;
mod error;
mod family;
mod signature;

pub use config::{AllocFailure, DEFAULT_GROWTH_INCREMENT, FamilyConfig};
pub use error::FamilyError;
pub use family::Family;
pub use signature::{BLANK, Signature, first_occurrence, matches, position_index};
