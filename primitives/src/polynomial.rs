use ark_bn254::Fr;
use ark_ff::Field;
use ark_std::Zero;

use crate::errors::PolynomialError;

/// Evaluates the polynomial with the given coefficients at `x` using
/// Horner's rule. The coefficient at index 0 is the constant term. An empty
/// coefficient slice is the zero polynomial and evaluates to zero.
pub fn evaluate(coeffs: &[Fr], x: &Fr) -> Fr {
    coeffs
        .iter()
        .rev()
        .fold(Fr::zero(), |acc, coeff| acc * x + coeff)
}

/// Returns true if all the coefficients of the polynomial are zero, which
/// includes the empty polynomial.
pub fn is_zero_polynomial(coeffs: &[Fr]) -> bool {
    coeffs.iter().all(|c| c.is_zero())
}

/// Divides `dividend` by `divisor` with schoolbook long division and returns
/// the quotient, which has `dividend.len() - divisor.len() + 1`
/// coefficients.
///
/// The divisor must divide the dividend exactly. The remainder is not
/// computed or checked: whatever is left over is silently discarded.
///
/// # Errors
///
/// * [PolynomialError::EmptyDivisor] if `divisor` has no coefficients.
/// * [PolynomialError::DivisorDegreeExceedsDividend] if `divisor` is longer
///   than `dividend`.
/// * [PolynomialError::ZeroDivisorPolynomial] if `divisor` is all zeros, or
///   its highest coefficient is zero.
pub fn divide(dividend: &[Fr], divisor: &[Fr]) -> Result<Vec<Fr>, PolynomialError> {
    if divisor.is_empty() {
        return Err(PolynomialError::EmptyDivisor);
    }
    if dividend.len() < divisor.len() {
        return Err(PolynomialError::DivisorDegreeExceedsDividend {
            dividend_len: dividend.len(),
            divisor_len: divisor.len(),
        });
    }
    if is_zero_polynomial(divisor) {
        return Err(PolynomialError::ZeroDivisorPolynomial);
    }

    let divisor_pos = divisor.len() - 1;
    let lead_inv = divisor[divisor_pos]
        .inverse()
        .ok_or(PolynomialError::ZeroDivisorPolynomial)?;

    let mut remainder = dividend.to_vec();
    let mut quotient = vec![Fr::zero(); dividend.len() - divisor.len() + 1];

    // Walk the leading term of the remainder down one degree per step.
    for diff in (0..quotient.len()).rev() {
        let q = remainder[diff + divisor_pos] * lead_inv;
        quotient[diff] = q;
        for (i, d) in divisor.iter().enumerate() {
            remainder[diff + i] -= q * d;
        }
    }

    Ok(quotient)
}

/// A polynomial in coefficient form over the bn254 scalar field.
///
/// Index 0 holds the constant term and `len() - 1` is the formal degree.
/// Coefficients are kept exactly as supplied: no padding, no trimming of
/// high zero coefficients.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolynomialCoeffForm {
    coeffs: Vec<Fr>,
}

impl PolynomialCoeffForm {
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<Fr> {
        self.coeffs
    }

    /// Returns the number of coefficients, which is what the SRS bound is
    /// checked against.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Checks if the polynomial has no coefficients.
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Formal degree `len() - 1`, or `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        is_zero_polynomial(&self.coeffs)
    }

    pub fn get_at_index(&self, i: usize) -> Option<&Fr> {
        self.coeffs.get(i)
    }

    /// See [evaluate].
    pub fn evaluate(&self, x: &Fr) -> Fr {
        evaluate(&self.coeffs, x)
    }

    /// See [divide].
    pub fn divide(&self, divisor: &PolynomialCoeffForm) -> Result<Self, PolynomialError> {
        divide(&self.coeffs, &divisor.coeffs).map(Self::new)
    }
}

impl From<Vec<Fr>> for PolynomialCoeffForm {
    fn from(coeffs: Vec<Fr>) -> Self {
        Self::new(coeffs)
    }
}
