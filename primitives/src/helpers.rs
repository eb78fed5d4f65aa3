use ark_bn254::{Bn254, Fr, G1Affine, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr};
use ark_std::{One, Zero};
use zeroize::Zeroize;

use crate::errors::KzgError;

/// Computes powers of a field element up to a given exponent.
///
/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
/// by repeatedly multiplying a running accumulator. The accumulator is
/// wiped before returning since `base` may be secret.
///
/// # Arguments
/// * `base` - The field element to compute powers of
/// * `count` - The number of powers to compute (0 to count-1)
///
/// # Returns
/// * Vector of field elements containing powers: [x⁰, x¹, x², ..., x^(count-1)]
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();

    for _ in 0..count {
        powers.push(current);
        current *= base;
    }

    current.zeroize();
    powers
}

/// Checks that a G1 point is on the curve and in the prime order subgroup.
///
/// The point at infinity (commitment to the zero polynomial) and the
/// generator (commitment to the constant 1) are both accepted.
///
/// # Example
/// ```
/// use ark_bn254::G1Affine;
/// use ark_ec::AffineRepr;
/// use kzg_bn254_primitives::helpers::validate_g1_point;
///
/// assert!(validate_g1_point(&G1Affine::identity()).is_ok());
/// assert!(validate_g1_point(&G1Affine::generator()).is_ok());
/// ```
pub fn validate_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }

    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a G2 point is on the curve and in the prime order subgroup.
/// The point at infinity is accepted.
pub fn validate_g2_point(point: &G2Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }

    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}

/// Checks `e(a1, a2) == e(b1, b2)`.
///
/// Evaluated as one multi-pairing `e(a1, a2) · e(-b1, b2)` followed by a
/// single final exponentiation, and compared against the identity of the
/// target group. The comparison goes through [ark_ec::pairing::PairingOutput]
/// and so is on normalized values.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}
