//! Property tests for the verifiable sharing scheme.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use seedshard::domain::{ShareCount, SplitConfig, Threshold};
use seedshard::gf::{FieldElement, get_modulus};
use seedshard::shamir;

const WIDTHS: [usize; 5] = [128, 160, 192, 224, 256];

/// A secret element plus valid split parameters over a supported field.
#[derive(Clone, Debug)]
struct SplitCase {
    secret: FieldElement,
    threshold: u32,
    shares: u32,
    salt: u64,
}

impl Arbitrary for SplitCase {
    fn arbitrary(g: &mut Gen) -> Self {
        let width = *g.choose(&WIDTHS).unwrap();
        let bytes: Vec<u8> = (0..width / 8).map(|_| u8::arbitrary(g)).collect();
        let secret = FieldElement::from_bytes(&bytes, get_modulus(width).unwrap()).unwrap();
        let threshold = u32::from(u8::arbitrary(g) % 5) + 1; // 1..=5
        let shares = threshold + u32::from(u8::arbitrary(g) % 5); // k..=k+4
        SplitCase {
            secret,
            threshold,
            shares,
            salt: u64::arbitrary(g),
        }
    }
}

impl SplitCase {
    fn config(&self) -> SplitConfig {
        SplitConfig::new(
            Threshold::new(self.threshold).unwrap(),
            ShareCount::new(self.shares).unwrap(),
        )
        .unwrap()
    }
}

#[quickcheck]
fn prop_any_threshold_subset_recovers(case: SplitCase, offset: usize) -> bool {
    let (shares, metadata) = shamir::split(&case.secret, None, case.config(), case.salt).unwrap();

    // Rotate and take k consecutive shares, so different subsets get
    // exercised across runs; k <= n keeps them distinct.
    let k = case.threshold as usize;
    let picked: Vec<FieldElement> = (0..k)
        .map(|i| shares[(offset + i) % shares.len()].clone())
        .collect();

    shamir::recover(&picked, &metadata).unwrap() == vec![case.secret.clone()]
}

#[quickcheck]
fn prop_every_share_verifies(case: SplitCase) -> bool {
    let (shares, metadata) = shamir::split(&case.secret, None, case.config(), case.salt).unwrap();
    shares.iter().enumerate().all(|(i, share)| {
        shamir::verify(share, &metadata)
            .is_some_and(|index| index.get() as usize == i + 1)
    })
}

#[quickcheck]
fn prop_split_is_deterministic(case: SplitCase) -> bool {
    let first = shamir::split(&case.secret, None, case.config(), case.salt).unwrap();
    let second = shamir::split(&case.secret, None, case.config(), case.salt).unwrap();
    first == second
}

#[quickcheck]
fn prop_tampered_share_is_rejected(case: SplitCase, position: usize, flip: u8) -> bool {
    let (shares, metadata) = shamir::split(&case.secret, None, case.config(), case.salt).unwrap();

    let victim = &shares[position % shares.len()];
    let mut bytes = victim.to_bytes();
    let target = position % bytes.len();
    bytes[target] ^= flip | 1; // always flips at least one bit
    let tampered = FieldElement::from_bytes(&bytes, victim.modulus().clone()).unwrap();

    shamir::verify(&tampered, &metadata).is_none()
}

#[quickcheck]
fn prop_below_threshold_fails(case: SplitCase) -> bool {
    if case.threshold < 2 {
        return true; // a single share is the whole secret at k = 1
    }
    let (shares, metadata) = shamir::split(&case.secret, None, case.config(), case.salt).unwrap();
    let short = &shares[..case.threshold as usize - 1];
    matches!(
        shamir::recover(short, &metadata),
        Err(seedshard::Error::TooFewValidShares { .. })
    )
}

#[quickcheck]
fn prop_two_secrets_round_trip(case: SplitCase, second_bytes: Vec<u8>) -> bool {
    if case.threshold < 2 {
        return true;
    }
    // Derive a second secret in the same field from arbitrary bytes.
    let width_bytes = case.secret.byte_len();
    let mut padded = second_bytes;
    padded.resize(width_bytes, 0x5a);
    let second =
        FieldElement::from_bytes(&padded, case.secret.modulus().clone()).unwrap();

    let (shares, metadata) =
        shamir::split(&case.secret, Some(&second), case.config(), case.salt).unwrap();
    let k = case.threshold as usize;
    shamir::recover(&shares[..k], &metadata).unwrap()
        == vec![case.secret.clone(), second]
}
