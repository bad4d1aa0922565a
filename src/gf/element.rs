//! Elements of GF(2^b): binary polynomials reduced modulo a primitive one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};

use crate::error::{Error, Result};
use crate::gf::poly::BinaryPolynomial;

/// A residue modulo a fixed primitive polynomial.
///
/// Every constructor reduces, so `value` always has a strictly smaller
/// degree than `modulus`. Two elements are equal only when both value and
/// modulus agree; arithmetic between different fields is a programming
/// error.
#[derive(Clone, PartialEq, Eq)]
pub struct FieldElement {
    value: BinaryPolynomial,
    modulus: BinaryPolynomial,
}

impl FieldElement {
    /// Builds an element, reducing `value` modulo `modulus`.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] when the modulus is zero.
    pub fn new(value: BinaryPolynomial, modulus: BinaryPolynomial) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::DivideByZero);
        }
        let value = value.divmod_nonzero(&modulus).1;
        Ok(Self { value, modulus })
    }

    /// Coerces an integer into the field.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] when the modulus is zero.
    pub fn from_int(value: u128, modulus: BinaryPolynomial) -> Result<Self> {
        Self::new(BinaryPolynomial::from_int(value), modulus)
    }

    /// Reads a fixed-width big-endian encoding. The input must be exactly
    /// as long as [`byte_len`](Self::byte_len) for this field.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] on any other length,
    /// [`Error::DivideByZero`] when the modulus is zero.
    pub fn from_bytes(bytes: &[u8], modulus: BinaryPolynomial) -> Result<Self> {
        let expected = (modulus.bit_len().saturating_sub(1)).div_ceil(8);
        if bytes.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        Self::new(BinaryPolynomial::from_bytes_be(bytes), modulus)
    }

    /// Rebuilds with a new value in the same field; reduction cannot fail
    /// because the modulus is nonzero by construction.
    fn with_value(&self, value: BinaryPolynomial) -> Self {
        Self {
            value: value.divmod_nonzero(&self.modulus).1,
            modulus: self.modulus.clone(),
        }
    }

    /// The additive identity of this element's field.
    pub fn zero_like(&self) -> Self {
        Self {
            value: BinaryPolynomial::zero(),
            modulus: self.modulus.clone(),
        }
    }

    /// The multiplicative identity of this element's field.
    pub fn one_like(&self) -> Self {
        self.with_value(BinaryPolynomial::one())
    }

    pub fn value(&self) -> &BinaryPolynomial {
        &self.value
    }

    pub fn modulus(&self) -> &BinaryPolynomial {
        &self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The field width in bits (the degree of the modulus).
    pub fn bit_width(&self) -> usize {
        self.modulus.bit_len() - 1
    }

    /// The fixed byte width of this field's wire encoding.
    pub fn byte_len(&self) -> usize {
        self.bit_width().div_ceil(8)
    }

    /// Big-endian encoding, zero-padded to the field width.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.value.to_bytes_be_width(self.byte_len())
    }

    /// Multiplicative inverse by the extended Euclidean algorithm over
    /// binary polynomials.
    ///
    /// # Errors
    /// [`Error::NotInvertible`] when the element is zero or the modulus is
    /// reducible (the gcd then differs from one).
    pub fn inverse(&self) -> Result<Self> {
        let mut r = self.modulus.clone();
        let mut r_next = self.value.clone();
        let mut t = BinaryPolynomial::zero();
        let mut t_next = BinaryPolynomial::one();
        while !r_next.is_zero() {
            let quotient = r.divmod_nonzero(&r_next).0;
            let r_step = &r - &quotient.multiply(&r_next);
            r = std::mem::replace(&mut r_next, r_step);
            let t_step = &t - &quotient.multiply(&t_next);
            t = std::mem::replace(&mut t_next, t_step);
        }
        if r != BinaryPolynomial::one() {
            return Err(Error::NotInvertible);
        }
        Ok(self.with_value(t))
    }

    /// Field division.
    ///
    /// # Errors
    /// [`Error::NotInvertible`] when `other` has no inverse.
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(self * &other.inverse()?)
    }

    /// Square-and-multiply exponentiation, reduced at every step.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut acc = self.one_like();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent != 0 {
            if exponent & 1 == 1 {
                acc = &acc * &base;
            }
            base = &base * &base;
            exponent >>= 1;
        }
        acc
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, other: &FieldElement) -> FieldElement {
        debug_assert_eq!(self.modulus, other.modulus, "elements of different fields");
        FieldElement {
            value: &self.value + &other.value,
            modulus: self.modulus.clone(),
        }
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, other: &FieldElement) -> FieldElement {
        self + other
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, other: &FieldElement) -> FieldElement {
        debug_assert_eq!(self.modulus, other.modulus, "elements of different fields");
        self.with_value(self.value.multiply(&other.value))
    }
}

// Hashes the value only, so that sets keyed by elements stay cheap; the
// caller must not mix fields in one set.
impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x")?;
        for byte in self.to_bytes() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, " mod GF(2^{}))", self.bit_width())
    }
}
