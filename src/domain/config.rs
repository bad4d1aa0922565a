//! Configuration validation for splits.

use crate::error::{Error, Result};

use super::{ShareCount, Threshold};

/// Validated pair of threshold and share count.
///
/// Enforces `threshold <= share_count` at the type level, so a split can
/// never demand more shares than it deals.
#[derive(Debug, Clone, Copy)]
pub struct SplitConfig {
    threshold: Threshold,
    share_count: ShareCount,
}

impl SplitConfig {
    /// Creates a new split configuration.
    ///
    /// # Errors
    /// Fails when the threshold exceeds the share count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshard::domain::{ShareCount, SplitConfig, Threshold};
    ///
    /// let config = SplitConfig::new(
    ///     Threshold::new(3).unwrap(),
    ///     ShareCount::new(5).unwrap(),
    /// ).unwrap();
    /// assert_eq!(*config.threshold(), 3);
    /// assert_eq!(*config.share_count(), 5);
    ///
    /// let invalid = SplitConfig::new(
    ///     Threshold::new(5).unwrap(),
    ///     ShareCount::new(3).unwrap(),
    /// );
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(threshold: Threshold, share_count: ShareCount) -> Result<Self> {
        if *threshold > *share_count {
            return Err(Error::NotEnoughShares {
                needed: *threshold,
                shares: *share_count,
            });
        }
        Ok(Self {
            threshold,
            share_count,
        })
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn share_count(&self) -> ShareCount {
        self.share_count
    }
}
