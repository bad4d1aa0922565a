//! The BIP-0039 English wordlist.
//!
//! The list is compiled in, NFKD-normalized at first use, and kept in its
//! lexicographic order so that decode can binary-search by prefix. The
//! standard guarantees the first four letters of every word are unique, so
//! truncated input still resolves to exactly one entry.

use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};

/// Number of entries in a BIP-0039 wordlist; each word encodes 11 bits.
pub const WORD_COUNT: usize = 2048;

static WORDS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let words: Vec<String> = include_str!("wordlist/english.txt")
        .lines()
        .map(|line| line.trim().nfkd().collect::<String>())
        .filter(|word| !word.is_empty())
        .collect();
    debug_assert_eq!(words.len(), WORD_COUNT);
    debug_assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    words
});

/// Gets the word at `index` (0..2048).
///
/// # Panics
/// Panics if `index` is out of range; callers mask word indices to 11 bits.
pub fn word(index: usize) -> &'static str {
    &WORDS[index]
}

/// Resolves a (possibly truncated) token to its wordlist index.
///
/// An exact match wins outright, even when the token is also a proper prefix
/// of later entries (`"act"` is a word as well as a prefix of `"action"`).
/// Otherwise the token must be a prefix of exactly one entry.
///
/// # Errors
/// [`Error::InvalidWord`] when nothing matches, [`Error::AmbiguousWord`]
/// when the token is a prefix of two or more entries.
pub fn lookup(token: &str) -> Result<usize> {
    let start = WORDS.partition_point(|word| word.as_str() < token);
    if WORDS.get(start).is_some_and(|word| word == token) {
        return Ok(start);
    }
    let matches = WORDS[start..]
        .iter()
        .take_while(|word| word.starts_with(token))
        .count();
    match matches {
        0 => Err(Error::InvalidWord(token.to_string())),
        1 => Ok(start),
        _ => Err(Error::AmbiguousWord(token.to_string())),
    }
}
