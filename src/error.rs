//! Error kinds shared across the codec, field arithmetic and sharing layers.
//!
//! Every failure is recoverable at the caller boundary; nothing in the core
//! logs or retries. The CLI converts these into `anyhow` errors with context.

use thiserror::Error;

use crate::gf::FieldElement;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Entropy, mnemonic or byte input of a size outside the supported set.
    #[error("invalid length: {0}")]
    InvalidLength(usize),

    /// A mnemonic token that matches no wordlist entry, not even as a prefix.
    #[error("word not in the wordlist: {0:?}")]
    InvalidWord(String),

    /// A mnemonic token that is a prefix of two or more wordlist entries.
    #[error("word is an ambiguous prefix: {0:?}")]
    AmbiguousWord(String),

    #[error("mnemonic checksum mismatch")]
    BadChecksum,

    /// The separator does not NFKD-normalize to a single ASCII space.
    #[error("separator does not normalize to a single space")]
    BadSeparator,

    #[error("division by zero")]
    DivideByZero,

    /// Inverting zero, or a modulus that is not irreducible.
    #[error("zero element or modulus is reducible")]
    NotInvertible,

    #[error("unsupported field width: {0} bits")]
    UnsupportedWidth(usize),

    /// Fixed-width byte input whose length does not match the field width.
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The threshold cannot be smaller than the number of secrets carried.
    #[error("threshold {needed} is below the number of secrets {secrets}")]
    TooFewShares { needed: u32, secrets: u32 },

    #[error("cannot require {needed} of {shares} shares")]
    NotEnoughShares { needed: u32, shares: u32 },

    /// Recovery saw fewer verified shares than the threshold requires.
    /// Carries the shares that failed verification.
    #[error("only {accepted} of the {needed} required shares verified")]
    TooFewValidShares {
        accepted: usize,
        needed: usize,
        rejected: Vec<FieldElement>,
    },

    /// Two distinct shares verified to the same x-coordinate.
    #[error("conflicting shares for x = {x}")]
    ConflictingShares { x: u32 },
}
