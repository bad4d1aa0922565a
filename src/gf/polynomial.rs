//! Polynomials with coefficients in GF(2^b).

use crate::error::{Error, Result};
use crate::gf::element::FieldElement;

/// A polynomial over a binary field, coefficients stored from the highest
/// order down to the constant term. The length is `degree + 1`; leading
/// zero coefficients are kept so coefficient indices stay meaningful to
/// callers that extract them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteFieldPolynomial {
    coefficients: Vec<FieldElement>,
}

impl FiniteFieldPolynomial {
    /// Wraps a non-empty, high-to-low coefficient list.
    pub fn new(coefficients: Vec<FieldElement>) -> Self {
        debug_assert!(!coefficients.is_empty());
        Self { coefficients }
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn coefficients(&self) -> &[FieldElement] {
        &self.coefficients
    }

    pub fn coefficient(&self, index: usize) -> Option<&FieldElement> {
        self.coefficients.get(index)
    }

    /// Evaluation by Horner's rule, left to right across the stored
    /// high-to-low coefficients.
    pub fn eval(&self, x: &FieldElement) -> FieldElement {
        let mut acc = x.zero_like();
        for coefficient in &self.coefficients {
            acc = &(&acc * x) + coefficient;
        }
        acc
    }

    /// Coefficient-wise sum. The shorter polynomial is padded with zero
    /// leading coefficients, i.e. the constant terms stay aligned.
    pub fn add(&self, other: &Self) -> Self {
        let (long, short) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let offset = long.len() - short.len();
        let mut coefficients = long.coefficients.clone();
        for (i, coefficient) in short.coefficients.iter().enumerate() {
            coefficients[offset + i] = &coefficients[offset + i] + coefficient;
        }
        Self::new(coefficients)
    }

    /// Multiplies every coefficient by `k`.
    pub fn scalar_mul(&self, k: &FieldElement) -> Self {
        Self::new(self.coefficients.iter().map(|c| c * k).collect())
    }

    /// Lagrange interpolation: the unique polynomial of length
    /// `points.len()` passing through every `(x, y)` pair.
    ///
    /// Each scaled basis polynomial is built with a single field inversion
    /// (division is the expensive operation here) followed by incremental
    /// multiplication by the linear factors `(x - x_j)`.
    ///
    /// The x-coordinates must be pairwise distinct; with duplicates the
    /// shared denominator degenerates to zero and interpolation fails.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] for an empty point list,
    /// [`Error::NotInvertible`] when two points share an x-coordinate.
    pub fn interpolate(points: &[(FieldElement, FieldElement)]) -> Result<Self> {
        let count = points.len();
        let Some((first_x, _)) = points.first() else {
            return Err(Error::InvalidLength(0));
        };
        let mut total = vec![first_x.zero_like(); count];
        for (i, (x_i, y_i)) in points.iter().enumerate() {
            let mut denominator = x_i.one_like();
            for (j, (x_j, _)) in points.iter().enumerate() {
                if j != i {
                    denominator = &denominator * &(x_i - x_j);
                }
            }
            // One inversion per point; everything after is multiplication.
            let lead = y_i * &denominator.inverse()?;

            let mut basis = Vec::with_capacity(count);
            basis.push(lead);
            for (j, (x_j, _)) in points.iter().enumerate() {
                if j == i {
                    continue;
                }
                // Multiply by (x - x_j): shift up, fold x_j times each
                // coefficient into the next lower slot.
                basis.push(x_j.zero_like());
                for index in (0..basis.len() - 1).rev() {
                    let folded = &basis[index] * x_j;
                    basis[index + 1] = &basis[index + 1] + &folded;
                }
            }
            for (index, coefficient) in basis.iter().enumerate() {
                total[index] = &total[index] + coefficient;
            }
        }
        Ok(Self::new(total))
    }
}
