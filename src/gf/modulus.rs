//! Canonical primitive moduli for the supported field widths.

use log::warn;

use crate::error::{Error, Result};
use crate::gf::poly::BinaryPolynomial;

/// Middle exponents of the canonical pentanomial for each supported width:
/// the modulus is `x^b + x^e1 + x^e2 + x^e3 + 1`. Each polynomial is
/// primitive over GF(2), which the inverse algorithm relies on.
static PRIMITIVE_EXPONENTS: [(usize, [u8; 3]); 14] = [
    (8, [4, 3, 1]), // Rijndael modulus
    (16, [5, 3, 2]),
    (32, [7, 6, 2]),
    (64, [4, 3, 1]),
    (128, [7, 2, 1]),
    (160, [5, 3, 2]),
    (192, [15, 11, 5]),
    (224, [12, 7, 2]),
    (256, [10, 5, 2]),
    (320, [4, 3, 1]),
    (384, [16, 15, 6]),
    (448, [11, 6, 4]),
    (512, [8, 5, 2]),
    (640, [14, 3, 2]),
];

/// Widths below this carry too little entropy for real secrets.
pub const MIN_SECURE_WIDTH: usize = 128;

/// All bit widths with a canonical modulus, ascending.
pub fn supported_widths() -> impl Iterator<Item = usize> {
    PRIMITIVE_EXPONENTS.iter().map(|&(width, _)| width)
}

/// The middle exponents for `bit_width`, high to low, one byte each. This
/// is also the wire form absorbed into the sharing hashes to bind them to
/// the field.
pub(crate) fn middle_exponents(bit_width: usize) -> Result<[u8; 3]> {
    PRIMITIVE_EXPONENTS
        .iter()
        .find(|&&(width, _)| width == bit_width)
        .map(|&(_, exponents)| exponents)
        .ok_or(Error::UnsupportedWidth(bit_width))
}

/// The canonical degree-`bit_width` primitive modulus.
///
/// # Errors
/// [`Error::UnsupportedWidth`] when no canonical modulus exists for the
/// requested width.
pub fn get_modulus(bit_width: usize) -> Result<BinaryPolynomial> {
    let exponents = middle_exponents(bit_width)?;
    if bit_width < MIN_SECURE_WIDTH {
        warn!("{bit_width}-bit field is below the secure minimum; testing only");
    }
    let mut modulus = BinaryPolynomial::one();
    modulus.flip_bit(bit_width);
    for exponent in exponents {
        modulus.flip_bit(usize::from(exponent));
    }
    Ok(modulus)
}
