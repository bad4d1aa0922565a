//! Arithmetic over GF(2^b):
//! - [`BinaryPolynomial`] - unbounded polynomials over GF(2)
//! - [`FieldElement`] - residues modulo a primitive polynomial
//! - [`FiniteFieldPolynomial`] - polynomials with field coefficients
//! - [`get_modulus`] - the canonical modulus table

mod element;
pub(crate) mod modulus;
mod poly;
mod polynomial;

pub use element::FieldElement;
pub use modulus::{MIN_SECURE_WIDTH, get_modulus, supported_widths};
pub use poly::BinaryPolynomial;
pub use polynomial::FiniteFieldPolynomial;
