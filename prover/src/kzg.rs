use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_std::{One, Zero};
use kzg_bn254_primitives::{
    errors::KzgError,
    polynomial::{divide, PolynomialCoeffForm},
    srs::SRS,
};
use tracing::trace;

/// Main interesting struct of the kzg-bn254 prover crate.
/// [KZG] provides methods for committing to a polynomial in coefficient
/// form and generating opening proofs against an [SRS].
///
/// It holds no state of its own, the SRS is passed to every call so that a
/// single SRS can be shared read-only between any number of provers.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct KZG;

impl KZG {
    pub fn new() -> Self {
        Self
    }

    /// Commit the polynomial with the srs values.
    ///
    /// The commitment is `Σ coeffs[i] · srs.g1[i]`, computed as one
    /// multi-scalar multiplication. The empty polynomial commits to the
    /// point at infinity.
    ///
    /// # Errors
    ///
    /// * [KzgError::DegreeBoundExceeded] if the polynomial has more
    ///   coefficients than the SRS has G1 powers.
    pub fn commit_coeff_form(
        &self,
        polynomial: &PolynomialCoeffForm,
        srs: &SRS,
    ) -> Result<G1Affine, KzgError> {
        self.commit_coeffs(polynomial.coeffs(), srs)
    }

    fn commit_coeffs(&self, coeffs: &[Fr], srs: &SRS) -> Result<G1Affine, KzgError> {
        check_degree_bound(coeffs.len(), srs)?;
        trace!(polynomial_len = coeffs.len(), srs_len = srs.len(), "committing");
        if coeffs.is_empty() {
            return Ok(G1Affine::identity());
        }

        // When the polynomial is in coefficient form, use the srs points in
        // monomial form directly.
        let bases = &srs.g1()[..coeffs.len()];

        match G1Projective::msm(bases, coeffs) {
            Ok(res) => Ok(res.into_affine()),
            Err(err) => Err(KzgError::MsmError(err.to_string())),
        }
    }

    /// Compute a kzg proof that `polynomial` evaluates to `polynomial(z_fr)`
    /// at `z_fr`.
    ///
    /// The evaluation is always recomputed here; the claimed value only
    /// enters the protocol at verification time.
    pub fn compute_proof(
        &self,
        polynomial: &PolynomialCoeffForm,
        z_fr: &Fr,
        srs: &SRS,
    ) -> Result<G1Affine, KzgError> {
        self.compute_proof_impl(polynomial, z_fr, srs)
            .map(|(proof, _)| proof)
    }

    /// Like [KZG::compute_proof], but also returns the evaluation
    /// `polynomial(z_fr)` that the proof attests to.
    pub fn compute_proof_with_value(
        &self,
        polynomial: &PolynomialCoeffForm,
        z_fr: &Fr,
        srs: &SRS,
    ) -> Result<(G1Affine, Fr), KzgError> {
        self.compute_proof_impl(polynomial, z_fr, srs)
    }

    /// Helper function for `compute_proof()` and `compute_proof_with_value()`
    fn compute_proof_impl(
        &self,
        polynomial: &PolynomialCoeffForm,
        z_fr: &Fr,
        srs: &SRS,
    ) -> Result<(G1Affine, Fr), KzgError> {
        check_degree_bound(polynomial.len(), srs)?;

        // Evaluate polynomial at the point z
        // This gives us y = p(z)
        let y_fr = polynomial.evaluate(z_fr);

        // p(x) - y, padded so that even a constant polynomial is at least as
        // long as the divisor. The padding only adds zero high coefficients.
        let mut poly_shift = polynomial.coeffs().to_vec();
        if poly_shift.len() < 2 {
            poly_shift.resize(2, Fr::zero());
        }
        poly_shift[0] -= y_fr;

        // x - z
        let denom_poly = [-*z_fr, Fr::one()];

        // p(z) - y = 0, so (x - z) divides p(x) - y exactly.
        let quotient_poly = divide(&poly_shift, &denom_poly)?;

        trace!(
            polynomial_len = polynomial.len(),
            quotient_len = quotient_poly.len(),
            "computed quotient"
        );

        let proof = self.commit_coeffs(&quotient_poly, srs)?;
        Ok((proof, y_fr))
    }
}

fn check_degree_bound(polynomial_len: usize, srs: &SRS) -> Result<(), KzgError> {
    if polynomial_len > srs.len() {
        return Err(KzgError::DegreeBoundExceeded {
            polynomial_len,
            srs_len: srs.len(),
        });
    }
    Ok(())
}
