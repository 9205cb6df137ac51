//! Partitioner configuration
//!
//! Holds the linear growth step for family storage and the policy applied
//! when that storage cannot be allocated.

use super::FamilyError;
use std::num::NonZeroUsize;

/// Growth increment used when none is configured
pub const DEFAULT_GROWTH_INCREMENT: usize = 10;

/// What to do when member storage cannot be allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocFailure {
    /// Log the failure and terminate the process
    Abort,
    /// Return `FamilyError::Allocation` to the caller
    #[default]
    Propagate,
}

/// Configuration shared by every family built from one partitioner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyConfig {
    growth_increment: NonZeroUsize,
    on_alloc_failure: AllocFailure,
}

impl FamilyConfig {
    /// Create a configuration with the given growth increment
    ///
    /// # Errors
    /// Returns `FamilyError::ZeroIncrement` if `growth_increment` is 0.
    ///
    /// # Examples
    /// ```
    /// use word_families::core::FamilyConfig;
    ///
    /// let config = FamilyConfig::new(4).unwrap();
    /// assert_eq!(config.growth_increment(), 4);
    ///
    /// assert!(FamilyConfig::new(0).is_err());
    /// ```
    pub fn new(growth_increment: usize) -> Result<Self, FamilyError> {
        let growth_increment =
            NonZeroUsize::new(growth_increment).ok_or(FamilyError::ZeroIncrement)?;

        Ok(Self {
            growth_increment,
            on_alloc_failure: AllocFailure::default(),
        })
    }

    /// Set the allocation failure policy
    #[must_use]
    pub const fn with_alloc_failure(mut self, policy: AllocFailure) -> Self {
        self.on_alloc_failure = policy;
        self
    }

    /// Number of slots added each time a family fills up
    #[inline]
    #[must_use]
    pub const fn growth_increment(&self) -> usize {
        self.growth_increment.get()
    }

    #[inline]
    #[must_use]
    pub const fn alloc_failure(&self) -> AllocFailure {
        self.on_alloc_failure
    }
}

impl FamilyConfig {
    /// Apply the allocation failure policy for a request of `requested` slots
    pub(crate) fn alloc_failed(&self, requested: usize) -> Result<(), FamilyError> {
        match self.on_alloc_failure {
            AllocFailure::Abort => {
                log::error!("failed to allocate storage for {requested} entries, aborting");
                std::process::abort()
            }
            AllocFailure::Propagate => Err(FamilyError::Allocation { requested }),
        }
    }
}

impl Default for FamilyConfig {
    fn default() -> Self {
        Self {
            growth_increment: NonZeroUsize::new(DEFAULT_GROWTH_INCREMENT)
                .unwrap_or(NonZeroUsize::MIN),
            on_alloc_failure: AllocFailure::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_increment_rejected() {
        assert_eq!(FamilyConfig::new(0), Err(FamilyError::ZeroIncrement));
    }

    #[test]
    fn default_config() {
        let config = FamilyConfig::default();
        assert_eq!(config.growth_increment(), DEFAULT_GROWTH_INCREMENT);
        assert_eq!(config.alloc_failure(), AllocFailure::Propagate);
    }

    #[test]
    fn propagate_policy_reports_request() {
        let config = FamilyConfig::new(2).unwrap();
        assert_eq!(
            config.alloc_failed(7),
            Err(FamilyError::Allocation { requested: 7 })
        );
    }

    #[test]
    fn alloc_policy_is_settable() {
        let config = FamilyConfig::new(3)
            .unwrap()
            .with_alloc_failure(AllocFailure::Abort);
        assert_eq!(config.growth_increment(), 3);
        assert_eq!(config.alloc_failure(), AllocFailure::Abort);
    }
}
