//! Command implementations

pub mod narrow;
pub mod partition;
pub mod sample;

pub use narrow::{NarrowResult, NarrowRound, narrow_words};
pub use partition::{PartitionResult, partition_words};
pub use sample::{SampleResult, sample_biggest};
