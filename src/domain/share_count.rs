//! `ShareCount` newtype.

use crate::error::{Error, Result};

/// Total number of shares to deal (n).
///
/// The field is huge compared to any practical n, so the only hard
/// requirement is that at least one share exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShareCount(u32);

impl ShareCount {
    /// Creates a new share count.
    ///
    /// # Errors
    /// Fails for zero shares.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshard::domain::ShareCount;
    ///
    /// let count = ShareCount::new(5).unwrap();
    /// assert_eq!(*count, 5);
    ///
    /// assert!(ShareCount::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::NotEnoughShares {
                needed: 1,
                shares: 0,
            });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareCount {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
