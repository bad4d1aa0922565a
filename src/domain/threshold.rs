//! Threshold newtype.

use crate::error::{Error, Result};

/// Number of shares required to reconstruct (k).
///
/// Invariant: k >= 1, enforced at construction. Whether k also covers the
/// number of secrets carried is checked at split time, where the secret
/// count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u32);

impl Threshold {
    /// Creates a new threshold.
    ///
    /// # Errors
    /// Fails for a zero threshold, which could not carry even one secret.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshard::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(Error::TooFewShares {
                needed: 0,
                secrets: 1,
            });
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
