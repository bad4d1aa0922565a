//! `ShareIndex` newtype.

/// A share's x-coordinate in `1..=n`.
///
/// Zero is not a coordinate: the constant term of the split polynomial is
/// the secret itself, so shares are only ever dealt at nonzero points.
/// Verification returns a `ShareIndex` when a share is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u32);

impl ShareIndex {
    /// Creates a new share index; `None` for the reserved zero coordinate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedshard::domain::ShareIndex;
    ///
    /// assert_eq!(ShareIndex::new(1).unwrap().get(), 1);
    /// assert!(ShareIndex::new(0).is_none());
    /// ```
    pub fn new(value: u32) -> Option<Self> {
        (value != 0).then_some(Self(value))
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}
