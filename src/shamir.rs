//! Verifiable Shamir secret sharing over GF(2^b).
//!
//! A secret field element (optionally two) is spread across `n` shares such
//! that any `k` reconstruct it. Alongside the shares, [`split`] emits
//! non-secret metadata in the style of Harn-Hsu hash-based verifiable
//! sharing: per-share SHAKE-256 commitments `v`, a masked polynomial
//! `c = r*f + g` and the coefficient indices `s` that carry the secrets.
//! A holder of the metadata can recompute `g(x) = c(x) - r*y` from any
//! alleged share `y` and check its commitment, learning nothing about the
//! secret; forged or corrupted shares are rejected before interpolation.
//!
//! All coefficient randomness is stretched deterministically out of the
//! secret, the salt and the split parameters, so splitting is a pure
//! function of its inputs. The scheme's security reduces to SHAKE-256
//! collision and preimage resistance.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha3::Shake256;
use sha3::digest::{ExtendableOutput, Update, XofReader};

use crate::domain::{ShareIndex, SplitConfig};
use crate::error::{Error, Result};
use crate::gf::modulus::middle_exponents;
use crate::gf::{BinaryPolynomial, FieldElement, FiniteFieldPolynomial, get_modulus};

/// Domain tag for stretching the secret into polynomial coefficients.
const DOMAIN_DERIVE: u8 = 0x00;
/// Domain tag for per-share commitments.
const DOMAIN_COMMIT: u8 = 0xFF;
/// Domain tag for the challenge chained over all commitments.
const DOMAIN_CHALLENGE: u8 = 0xAA;

/// The public output of [`split`], consumed by [`verify`] and [`recover`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMetadata {
    /// Per-share commitment hashes, 2l bytes each, for x = 1..=n.
    commitments: Vec<Vec<u8>>,
    /// The masked polynomial `c = r*f + g`, coefficients high to low.
    mask: FiniteFieldPolynomial,
    /// Coefficient indices of the interpolated polynomial that hold the
    /// secrets, in extraction order.
    secret_indices: Vec<usize>,
}

impl SplitMetadata {
    pub fn commitments(&self) -> &[Vec<u8>] {
        &self.commitments
    }

    pub fn mask(&self) -> &FiniteFieldPolynomial {
        &self.mask
    }

    pub fn secret_indices(&self) -> &[usize] {
        &self.secret_indices
    }

    /// Number of shares the split dealt.
    pub fn share_count(&self) -> usize {
        self.commitments.len()
    }

    /// Number of shares recovery needs.
    pub fn threshold(&self) -> usize {
        self.mask.len()
    }

    fn modulus(&self) -> Result<&BinaryPolynomial> {
        self.mask
            .coefficients()
            .first()
            .map(FieldElement::modulus)
            .ok_or(Error::InvalidLength(0))
    }
}

/// The JSON form of [`SplitMetadata`].
///
/// `v` is persisted in reverse share order; both directions of the
/// conversion reverse it so that in-memory order is always x = 1..=n.
/// `c` holds the masked polynomial's big-endian coefficient bytes from
/// high to low order, and `s` the secret coefficient indices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetadataFile {
    v: Vec<Vec<u8>>,
    c: Vec<Vec<u8>>,
    s: Vec<usize>,
}

impl From<&SplitMetadata> for MetadataFile {
    fn from(metadata: &SplitMetadata) -> Self {
        Self {
            v: metadata.commitments.iter().rev().cloned().collect(),
            c: metadata
                .mask
                .coefficients()
                .iter()
                .map(FieldElement::to_bytes)
                .collect(),
            s: metadata.secret_indices.clone(),
        }
    }
}

impl TryFrom<MetadataFile> for SplitMetadata {
    type Error = Error;

    fn try_from(file: MetadataFile) -> Result<Self> {
        // The field is not on the wire; infer it from the coefficient width.
        let width_bytes = file.c.first().map(Vec::len).ok_or(Error::InvalidLength(0))?;
        let modulus = get_modulus(width_bytes * 8)?;
        let coefficients = file
            .c
            .iter()
            .map(|bytes| FieldElement::from_bytes(bytes, modulus.clone()))
            .collect::<Result<Vec<_>>>()?;
        for commitment in &file.v {
            if commitment.len() != 2 * width_bytes {
                return Err(Error::LengthMismatch {
                    expected: 2 * width_bytes,
                    actual: commitment.len(),
                });
            }
        }
        for &index in &file.s {
            if index >= coefficients.len() {
                return Err(Error::InvalidLength(index));
            }
        }
        Ok(Self {
            commitments: file.v.into_iter().rev().collect(),
            mask: FiniteFieldPolynomial::new(coefficients),
            secret_indices: file.s,
        })
    }
}

/// SHAKE-256 over the concatenated parts, squeezed to `output_len` bytes.
fn shake(parts: &[&[u8]], output_len: usize) -> Vec<u8> {
    let mut hasher = Shake256::default();
    for part in parts {
        hasher.update(part);
    }
    let mut output = vec![0u8; output_len];
    hasher.finalize_xof().read(&mut output);
    output
}

/// The commitment binding a share point `(f_i, g_i)` to the field.
fn commitment(field_tag: &[u8; 3], f_i: &FieldElement, g_i: &FieldElement) -> Vec<u8> {
    shake(
        &[&[DOMAIN_COMMIT], field_tag, &f_i.to_bytes(), &g_i.to_bytes()],
        2 * f_i.byte_len(),
    )
}

/// The challenge element chained over every commitment.
fn challenge(commitments: &[Vec<u8>], modulus: &BinaryPolynomial) -> Result<FieldElement> {
    let mut hasher = Shake256::default();
    hasher.update(&[DOMAIN_CHALLENGE]);
    for commitment in commitments {
        hasher.update(commitment);
    }
    let width_bytes = (modulus.bit_len() - 1).div_ceil(8);
    let mut output = vec![0u8; width_bytes];
    hasher.finalize_xof().read(&mut output);
    FieldElement::from_bytes(&output, modulus.clone())
}

/// Splits one secret (and optionally a second) into `n` share elements of
/// which any `k` recover it, plus the public verification metadata.
///
/// The second secret rides as the leading coefficient of the share
/// polynomial at no cost to the hiding of the first; both are extracted by
/// [`recover`] in `(first, second)` order.
///
/// Shares are returned for x-coordinates 1..=n in order. The coordinates
/// are not part of a share's wire form; verification recovers them from
/// the metadata.
///
/// # Errors
/// [`Error::TooFewShares`] when the threshold cannot carry the secrets and
/// [`Error::UnsupportedWidth`] for a field outside the canonical table.
pub fn split(
    secret: &FieldElement,
    second_secret: Option<&FieldElement>,
    config: SplitConfig,
    salt: u64,
) -> Result<(Vec<FieldElement>, SplitMetadata)> {
    let k = *config.threshold() as usize;
    let n = *config.share_count() as usize;
    let secret_count = 1 + usize::from(second_secret.is_some());
    if k < secret_count {
        return Err(Error::TooFewShares {
            needed: k as u32,
            secrets: secret_count as u32,
        });
    }
    if let Some(m2) = second_secret {
        debug_assert_eq!(secret.modulus(), m2.modulus(), "secrets of different fields");
    }

    let modulus = secret.modulus().clone();
    let field_tag = middle_exponents(secret.bit_width())?;
    let width_bytes = secret.byte_len();
    let salt_element = FieldElement::from_int(u128::from(salt), modulus.clone())?;

    // Stretch secret, salt and parameters into 2k - |secret| pseudo-random
    // coefficients.
    let mut hasher = Shake256::default();
    hasher.update(&[DOMAIN_DERIVE]);
    hasher.update(&field_tag);
    hasher.update(&secret.to_bytes());
    hasher.update(&salt_element.to_bytes());
    hasher.update(&(k as u32).to_be_bytes());
    hasher.update(&(n as u32).to_be_bytes());
    if let Some(m2) = second_secret {
        hasher.update(&m2.to_bytes());
    }
    let mut stream = vec![0u8; width_bytes * (2 * k - secret_count)];
    hasher.finalize_xof().read(&mut stream);
    let noise = stream
        .chunks_exact(width_bytes)
        .map(|chunk| FieldElement::from_bytes(chunk, modulus.clone()))
        .collect::<Result<Vec<_>>>()?;

    // f carries the secrets: m2 (if any) leads, m1 is the constant term,
    // noise fills the middle. g is all noise.
    let mut share_coefficients = Vec::with_capacity(k);
    if let Some(m2) = second_secret {
        share_coefficients.push(m2.clone());
    }
    share_coefficients.extend_from_slice(&noise[..k - secret_count]);
    share_coefficients.push(secret.clone());
    let share_polynomial = FiniteFieldPolynomial::new(share_coefficients);
    let blind_polynomial = FiniteFieldPolynomial::new(noise[k - secret_count..].to_vec());

    let mut shares = Vec::with_capacity(n);
    let mut blinds = Vec::with_capacity(n);
    for x in 1..=n {
        let point = FieldElement::from_int(x as u128, modulus.clone())?;
        shares.push(share_polynomial.eval(&point));
        blinds.push(blind_polynomial.eval(&point));
    }

    let commitments: Vec<Vec<u8>> = shares
        .iter()
        .zip(&blinds)
        .map(|(f_i, g_i)| commitment(&field_tag, f_i, g_i))
        .collect();
    let r = challenge(&commitments, &modulus)?;
    let mask = share_polynomial.scalar_mul(&r).add(&blind_polynomial);

    let secret_indices = if second_secret.is_some() {
        vec![k - 1, 0]
    } else {
        vec![k - 1]
    };

    Ok((
        shares,
        SplitMetadata {
            commitments,
            mask,
            secret_indices,
        },
    ))
}

/// Checks a share against the split metadata.
///
/// Returns the share's x-coordinate when exactly one commitment matches.
/// No match means the share is forged, corrupted or from another split;
/// more than one match would take a SHAKE-256 collision and is treated as
/// failure too.
pub fn verify(share: &FieldElement, metadata: &SplitMetadata) -> Option<ShareIndex> {
    let modulus = metadata.modulus().ok()?;
    if share.modulus() != modulus {
        return None;
    }
    let field_tag = middle_exponents(share.bit_width()).ok()?;
    let r = challenge(&metadata.commitments, modulus).ok()?;
    let masked_share = &r * share;

    let mut matched = None;
    let mut matches = 0;
    for (i, expected) in metadata.commitments.iter().enumerate() {
        let x = FieldElement::from_int((i + 1) as u128, modulus.clone()).ok()?;
        // g(x) = c(x) - r*y; subtraction is XOR here.
        let blind = &metadata.mask.eval(&x) - &masked_share;
        if commitment(&field_tag, share, &blind) == *expected {
            matched = ShareIndex::new(i as u32 + 1);
            matches += 1;
        }
    }
    if matches == 1 { matched } else { None }
}

/// Recovers the secret(s) from any `k` valid shares.
///
/// Every share is verified first; shares that fail are collected rather
/// than silently dropped. Verified shares are deduplicated by their
/// x-coordinate, and collection stops as soon as `k` distinct points are
/// in hand.
///
/// # Errors
/// [`Error::TooFewValidShares`] (carrying the rejected shares) when fewer
/// than `k` shares verify, [`Error::ConflictingShares`] when two distinct
/// shares claim the same x-coordinate.
pub fn recover(shares: &[FieldElement], metadata: &SplitMetadata) -> Result<Vec<FieldElement>> {
    let needed = metadata.threshold();
    let modulus = metadata.modulus()?.clone();

    let mut accepted: BTreeMap<u32, FieldElement> = BTreeMap::new();
    let mut rejected: Vec<FieldElement> = Vec::new();
    for share in shares {
        match verify(share, metadata) {
            Some(index) => {
                let x = index.get();
                match accepted.get(&x) {
                    Some(existing) if existing != share => {
                        return Err(Error::ConflictingShares { x });
                    }
                    Some(_) => {}
                    None => {
                        accepted.insert(x, share.clone());
                    }
                }
            }
            None => rejected.push(share.clone()),
        }
        if accepted.len() == needed {
            break;
        }
    }
    if accepted.len() < needed {
        return Err(Error::TooFewValidShares {
            accepted: accepted.len(),
            needed,
            rejected,
        });
    }

    let mut points = Vec::with_capacity(needed);
    for (&x, y) in &accepted {
        points.push((
            FieldElement::from_int(u128::from(x), modulus.clone())?,
            y.clone(),
        ));
    }
    let polynomial = FiniteFieldPolynomial::interpolate(&points)?;

    metadata
        .secret_indices
        .iter()
        .map(|&index| {
            polynomial
                .coefficient(index)
                .cloned()
                .ok_or(Error::InvalidLength(index))
        })
        .collect()
}
