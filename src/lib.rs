//! Split BIP-0039 mnemonics into verifiable Shamir shares.
//!
//! A secret mnemonic's entropy becomes a field element in GF(2^b), is split
//! into `n` share elements of which any `k` recover it, and each share is
//! itself rendered as a BIP-0039 mnemonic. The split also publishes compact
//! non-secret metadata that lets anyone check a single share's membership
//! without the secret and lets recovery reject forged shares.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod gf;
pub mod shamir;
pub mod wordlist;

pub use error::{Error, Result};
