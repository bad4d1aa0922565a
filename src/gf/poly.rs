//! Polynomials over GF(2), stored as unbounded coefficient bit-fields.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::error::{Error, Result};

const LIMB_BITS: usize = 64;

/// A polynomial over GF(2). Bit `i` of the backing integer is the
/// coefficient of `x^i`; the degree is `bit_len() - 1`.
///
/// Values are immutable once built. Addition and subtraction are both XOR
/// (the characteristic is 2, so negation is the identity), multiplication is
/// carryless, and division is long division by bit shifts.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BinaryPolynomial {
    /// Little-endian limbs with no trailing zero limb.
    limbs: Vec<u64>,
}

impl BinaryPolynomial {
    pub fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    pub fn one() -> Self {
        Self { limbs: vec![1] }
    }

    pub fn from_int(value: u128) -> Self {
        let mut poly = Self {
            limbs: vec![value as u64, (value >> LIMB_BITS) as u64],
        };
        poly.normalize();
        poly
    }

    /// Reads a big-endian byte-field. Leading zero bytes are fine.
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len() / 8 + 1);
        for chunk in bytes.rchunks(8) {
            let mut limb = 0u64;
            for &byte in chunk {
                limb = (limb << 8) | u64::from(byte);
            }
            limbs.push(limb);
        }
        let mut poly = Self { limbs };
        poly.normalize();
        poly
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Number of significant bits; zero for the zero polynomial.
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                (self.limbs.len() - 1) * LIMB_BITS + LIMB_BITS - top.leading_zeros() as usize
            }
        }
    }

    pub fn bit(&self, index: usize) -> bool {
        self.limbs
            .get(index / LIMB_BITS)
            .is_some_and(|&limb| (limb >> (index % LIMB_BITS)) & 1 == 1)
    }

    /// Toggles the coefficient of `x^index`.
    pub(crate) fn flip_bit(&mut self, index: usize) {
        let limb = index / LIMB_BITS;
        if limb >= self.limbs.len() {
            self.limbs.resize(limb + 1, 0);
        }
        self.limbs[limb] ^= 1 << (index % LIMB_BITS);
        self.normalize();
    }

    /// `self ^= other << shift`, the inner step of multiply and divmod.
    fn xor_shifted(&mut self, other: &Self, shift: usize) {
        let limb_shift = shift / LIMB_BITS;
        let bit_shift = shift % LIMB_BITS;
        let needed = other.limbs.len() + limb_shift + 1;
        if self.limbs.len() < needed {
            self.limbs.resize(needed, 0);
        }
        for (i, &limb) in other.limbs.iter().enumerate() {
            self.limbs[i + limb_shift] ^= limb << bit_shift;
            if bit_shift != 0 {
                self.limbs[i + limb_shift + 1] ^= limb >> (LIMB_BITS - bit_shift);
            }
        }
        self.normalize();
    }

    /// Schoolbook carryless multiplication.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut product = Self::zero();
        for index in 0..other.bit_len() {
            if other.bit(index) {
                product.xor_shifted(self, index);
            }
        }
        product
    }

    /// Long division, returning `(quotient, remainder)`.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] when the denominator is zero.
    pub fn divmod(&self, denominator: &Self) -> Result<(Self, Self)> {
        if denominator.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(self.divmod_nonzero(denominator))
    }

    /// Division loop for callers that already hold a nonzero denominator.
    pub(crate) fn divmod_nonzero(&self, denominator: &Self) -> (Self, Self) {
        debug_assert!(!denominator.is_zero());
        let mut quotient = Self::zero();
        let mut remainder = self.clone();
        let denominator_len = denominator.bit_len();
        while remainder.bit_len() >= denominator_len {
            let shift = remainder.bit_len() - denominator_len;
            quotient.flip_bit(shift);
            remainder.xor_shifted(denominator, shift);
        }
        (quotient, remainder)
    }

    /// Quotient after division.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] when the denominator is zero.
    pub fn div_floor(&self, denominator: &Self) -> Result<Self> {
        Ok(self.divmod(denominator)?.0)
    }

    /// Remainder after division.
    ///
    /// # Errors
    /// [`Error::DivideByZero`] when the denominator is zero.
    pub fn rem(&self, denominator: &Self) -> Result<Self> {
        Ok(self.divmod(denominator)?.1)
    }

    /// Square-and-multiply exponentiation. `pow(0)` is one.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut acc = Self::one();
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent != 0 {
            if exponent & 1 == 1 {
                acc = acc.multiply(&base);
            }
            base = base.multiply(&base);
            exponent >>= 1;
        }
        acc
    }

    /// Minimal big-endian encoding; empty for the zero polynomial.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.to_bytes_be_width(self.bit_len().div_ceil(8))
    }

    /// Fixed-width big-endian encoding, zero-padded on the left. The value
    /// must fit in `width` bytes.
    pub(crate) fn to_bytes_be_width(&self, width: usize) -> Vec<u8> {
        debug_assert!(self.bit_len() <= width * 8);
        let mut bytes = vec![0u8; width];
        for (i, slot) in bytes.iter_mut().rev().enumerate() {
            if let Some(&limb) = self.limbs.get(i / 8) {
                *slot = (limb >> ((i % 8) * 8)) as u8;
            }
        }
        bytes
    }
}

impl Add<&BinaryPolynomial> for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn add(self, other: &BinaryPolynomial) -> BinaryPolynomial {
        let (long, short) = if self.limbs.len() >= other.limbs.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut limbs = long.limbs.clone();
        for (i, &limb) in short.limbs.iter().enumerate() {
            limbs[i] ^= limb;
        }
        let mut sum = BinaryPolynomial { limbs };
        sum.normalize();
        sum
    }
}

impl Sub<&BinaryPolynomial> for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    // Negation is the identity in characteristic 2.
    fn sub(self, other: &BinaryPolynomial) -> BinaryPolynomial {
        self + other
    }
}

impl Mul<&BinaryPolynomial> for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn mul(self, other: &BinaryPolynomial) -> BinaryPolynomial {
        self.multiply(other)
    }
}

impl fmt::Debug for BinaryPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryPolynomial(0x")?;
        if self.is_zero() {
            write!(f, "0")?;
        }
        for byte in self.to_bytes_be() {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
