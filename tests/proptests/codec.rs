//! Property tests for the BIP-0039 codec.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use seedshard::codec;

/// Entropy of one of the five supported lengths.
#[derive(Clone, Debug)]
struct SupportedEntropy(Vec<u8>);

impl Arbitrary for SupportedEntropy {
    fn arbitrary(g: &mut Gen) -> Self {
        let length = *g.choose(&codec::ENTROPY_LENGTHS).unwrap();
        SupportedEntropy((0..length).map(|_| u8::arbitrary(g)).collect())
    }
}

#[quickcheck]
fn prop_round_trip(entropy: SupportedEntropy) -> bool {
    let SupportedEntropy(bytes) = entropy;
    let mnemonic = codec::encode(&bytes).unwrap();
    codec::decode(&mnemonic).unwrap() == bytes
}

#[quickcheck]
fn prop_word_count_matches_width(entropy: SupportedEntropy) -> bool {
    let SupportedEntropy(bytes) = entropy;
    let mnemonic = codec::encode(&bytes).unwrap();
    mnemonic.split(' ').count() == bytes.len() * 3 / 4
}

#[quickcheck]
fn prop_four_letter_prefixes_decode(entropy: SupportedEntropy) -> bool {
    let SupportedEntropy(bytes) = entropy;
    let mnemonic = codec::encode(&bytes).unwrap();
    let truncated: Vec<String> = mnemonic
        .split(' ')
        .map(|word| word.chars().take(4).collect())
        .collect();
    codec::decode(&truncated.join(" ")).unwrap() == bytes
}

#[quickcheck]
fn prop_unsupported_word_counts_fail(count: u8) -> bool {
    let count = usize::from(count % 30);
    if matches!(count, 12 | 15 | 18 | 21 | 24) {
        return true;
    }
    let phrase = vec!["abandon"; count].join(" ");
    matches!(
        codec::decode(&phrase),
        Err(seedshard::Error::InvalidLength(found)) if found == count
    )
}
