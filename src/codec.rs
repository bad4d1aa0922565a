//! BIP-0039 mnemonic codec.
//!
//! Encodes entropy of 16, 20, 24, 28 or 32 bytes as a phrase of 12, 15, 18,
//! 21 or 24 words and back. The final `len/4` bits of the phrase are the top
//! bits of the entropy's SHA-256 digest, so transcription errors are caught
//! at decode time. Tokens may be truncated to their first four letters;
//! BIP-0039 guarantees that prefix is unique.

use sha2::{Digest, Sha256};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::wordlist;

/// Entropy sizes (in bytes) a mnemonic can carry.
pub const ENTROPY_LENGTHS: [usize; 5] = [16, 20, 24, 28, 32];

const WORD_BITS: usize = 11;

/// Checksum length in bits for the given entropy length in bytes.
fn checksum_bits(entropy_len: usize) -> usize {
    entropy_len / 4
}

/// The top `len/4` bits of SHA-256 over the entropy.
fn checksum(entropy: &[u8]) -> u8 {
    let digest = Sha256::digest(entropy);
    digest[0] >> (8 - checksum_bits(entropy.len()))
}

/// Encodes entropy as a mnemonic phrase with single-space separators.
///
/// # Errors
/// [`Error::InvalidLength`] when the entropy size is unsupported.
pub fn encode(entropy: &[u8]) -> Result<String> {
    encode_with_separator(entropy, " ")
}

/// Encodes entropy as a mnemonic phrase joined by `separator`.
///
/// The separator must NFKD-normalize to a single ASCII space. This admits
/// the ideographic space used by the Japanese wordlist convention while
/// rejecting anything that would not round-trip through [`decode`].
///
/// # Errors
/// [`Error::InvalidLength`] for unsupported entropy sizes,
/// [`Error::BadSeparator`] when the separator fails the normalization check.
pub fn encode_with_separator(entropy: &[u8], separator: &str) -> Result<String> {
    if !ENTROPY_LENGTHS.contains(&entropy.len()) {
        return Err(Error::InvalidLength(entropy.len()));
    }
    if separator.nfkd().collect::<String>() != " " {
        return Err(Error::BadSeparator);
    }

    let check_bits = checksum_bits(entropy.len());
    let word_count = (entropy.len() * 8 + check_bits) / WORD_BITS;
    let mut words: Vec<&str> = Vec::with_capacity(word_count);

    // Stream entropy bits, then checksum bits, into 11-bit word indices.
    let mut acc: u32 = 0;
    let mut pending = 0;
    for &byte in entropy {
        acc = (acc << 8) | u32::from(byte);
        pending += 8;
        if pending >= WORD_BITS {
            pending -= WORD_BITS;
            words.push(wordlist::word(((acc >> pending) & 0x7ff) as usize));
        }
    }
    acc = (acc << check_bits) | u32::from(checksum(entropy));
    pending += check_bits;
    while pending >= WORD_BITS {
        pending -= WORD_BITS;
        words.push(wordlist::word(((acc >> pending) & 0x7ff) as usize));
    }
    debug_assert_eq!(pending, 0);
    debug_assert_eq!(words.len(), word_count);

    Ok(words.join(separator))
}

/// Decodes a mnemonic phrase back to its entropy.
///
/// Input is NFKD-normalized and split on whitespace. Each token must be a
/// wordlist entry or a unique prefix of one.
///
/// # Errors
/// [`Error::InvalidLength`] for an unsupported word count,
/// [`Error::InvalidWord`] / [`Error::AmbiguousWord`] for unresolvable
/// tokens, and [`Error::BadChecksum`] when the embedded checksum does not
/// match the recovered entropy.
pub fn decode(phrase: &str) -> Result<Vec<u8>> {
    let normalized: String = phrase.nfkd().collect();
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if !matches!(tokens.len(), 12 | 15 | 18 | 21 | 24) {
        return Err(Error::InvalidLength(tokens.len()));
    }

    let check_bits = tokens.len() / 3;
    let entropy_len = (tokens.len() * WORD_BITS - check_bits) / 8;
    let mut entropy = Vec::with_capacity(entropy_len);

    let mut acc: u32 = 0;
    let mut pending = 0;
    for token in &tokens {
        acc = (acc << WORD_BITS) | wordlist::lookup(token)? as u32;
        pending += WORD_BITS;
        while pending >= 8 && entropy.len() < entropy_len {
            pending -= 8;
            entropy.push((acc >> pending) as u8);
        }
    }
    debug_assert_eq!(pending, check_bits);

    let claimed = (acc & ((1u32 << check_bits) - 1)) as u8;
    if claimed != checksum(&entropy) {
        return Err(Error::BadChecksum);
    }
    Ok(entropy)
}
