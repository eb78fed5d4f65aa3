use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use kzg_bn254_primitives::{errors::KzgError, helpers, srs::SRS};
use tracing::debug;

/// This function performs verification of a KZG proof where the commitment,
/// proof, evaluation value, and evaluation point are provided as
/// deserialized curve points and field elements. It implements the core KZG
/// proof verification algorithm using bilinear pairings.
///
/// The check is `e(C - [y]·g, h) == e(π, [α]·h - [z]·h)`, where `[α]·h` is
/// the second G2 power of the SRS. It holds iff
/// `p(α) - y == q(α)·(α - z)`, which for an honestly derived quotient
/// certifies `p(z) == y`.
///
/// # Arguments
///
/// * `srs` - The SRS the commitment and proof were computed against
/// * `commitment` - A `G1Affine` point representing the KZG commitment to a polynomial
/// * `proof` - A `G1Affine` point representing the KZG proof for the evaluation
/// * `z_fr` - A field element representing the evaluation point
/// * `value_fr` - A field element representing the claimed polynomial value at the evaluation point
///
/// # Returns
///
/// * `Ok(true)` - If the proof is valid and verification succeeds
/// * `Ok(false)` - If the proof is invalid but no errors occurred during verification
/// * `Err(KzgError)` - If the pairing cannot be evaluated on the inputs
///
/// # Errors
///
/// * [KzgError::NotOnCurveError] if the commitment or proof is not a point
///   of the prime order subgroup of G1.
/// * [KzgError::InvalidSrs] if the SRS holds fewer than two G2 powers or its
///   `[α]·h` point is malformed.
///
/// # Examples
///
/// ```rust
/// use ark_bn254::Fr;
/// use kzg_bn254_primitives::polynomial::PolynomialCoeffForm;
/// use kzg_bn254_prover::{kzg::KZG, setup::setup};
/// use kzg_bn254_verifier::verify::verify_proof;
///
/// let srs = setup(4).unwrap();
/// let kzg = KZG::new();
/// let poly = PolynomialCoeffForm::new(vec![Fr::from(5u64), Fr::from(1u64)]);
/// let z = Fr::from(2u64);
///
/// let commitment = kzg.commit_coeff_form(&poly, &srs).unwrap();
/// let (proof, value) = kzg.compute_proof_with_value(&poly, &z, &srs).unwrap();
///
/// match verify_proof(&srs, commitment, proof, z, value) {
///     Ok(true) => println!("Proof is valid!"),
///     Ok(false) => println!("Proof is invalid"),
///     Err(e) => println!("Verification error: {}", e),
/// }
/// ```
pub fn verify_proof(
    srs: &SRS,
    commitment: G1Affine,
    proof: G1Affine,
    z_fr: Fr,
    value_fr: Fr,
) -> Result<bool, KzgError> {
    helpers::validate_g1_point(&commitment).map_err(|_| {
        KzgError::NotOnCurveError("commitment not on curve".to_string())
    })?;
    helpers::validate_g1_point(&proof)
        .map_err(|_| KzgError::NotOnCurveError("proof not on curve".to_string()))?;

    // Get α·G2 from the trusted setup
    let g2_alpha = srs_g2_alpha(srs)?;

    // Compute [value]*G1
    let value_g1 = G1Affine::generator() * value_fr;

    // Compute [C - value*G1]
    // If the claim is valid, this equals q(α)(α - z) in the exponent
    let commit_minus_value = (commitment.into_group() - value_g1).into_affine();

    // Compute [z]*G2
    let z_g2 = G2Affine::generator() * z_fr;

    // Compute [α - z]*G2
    // This represents (X - z) evaluated at the secret point
    let x_minus_z = (g2_alpha.into_group() - z_g2).into_affine();

    // Verify the pairing equation:
    // e([C - value*G1], G2) = e(proof, [α - z]*G2)
    let verified = helpers::pairings_verify(
        commit_minus_value,    // Left side first argument
        G2Affine::generator(), // Left side second argument (G2 generator)
        proof,                 // Right side first argument
        x_minus_z,             // Right side second argument
    );

    debug!(verified, "verified kzg proof");
    Ok(verified)
}

fn srs_g2_alpha(srs: &SRS) -> Result<G2Affine, KzgError> {
    let g2_alpha = srs.g2().get(1).copied().ok_or_else(|| {
        KzgError::InvalidSrs("SRS of degree 0 holds no [α]·h point".to_string())
    })?;
    helpers::validate_g2_point(&g2_alpha)
        .map_err(|err| KzgError::InvalidSrs(err.to_string()))?;
    Ok(g2_alpha)
}
