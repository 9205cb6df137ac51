//! Terminal output formatting
//!
//! Display utilities for families and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_families, print_narrow_result, print_partition_result, print_sample_result};
