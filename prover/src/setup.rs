use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{PrimeField, UniformRand};
use kzg_bn254_primitives::{
    consts::SETUP_SECRET_SEED_BYTES, errors::KzgError, helpers, srs::SRS,
};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::time::Instant;
use tracing::debug;
use zeroize::Zeroize;

/// Runs a single-party trusted setup for polynomials of degree at most
/// `max_degree`, drawing the secret from the operating system.
///
/// The secret α is sampled from 64 bytes of OS randomness reduced modulo
/// the scalar field order, and used to compute `[g^{α^i}]` and
/// `[h^{α^i}]` for `i` in `0..=max_degree`. α, the seed bytes and the
/// scalar powers are zeroized before this function returns.
///
/// Whoever runs this function could learn α and forge openings against the
/// resulting SRS. It is meant for tests and self-contained deployments;
/// anything adversarial should load powers from a multi-party ceremony
/// instead.
///
/// # Arguments
///
/// * `max_degree` - The largest polynomial degree the SRS will support.
///
/// # Returns
///
/// * `Result<SRS, KzgError>` - An SRS holding `max_degree + 1` points in
///   each group.
///
/// # Errors
///
/// * [KzgError::InvalidDegreeBound] if `max_degree + 1` overflows.
/// * [KzgError::RandomnessUnavailable] if the OS cannot provide randomness.
pub fn setup(max_degree: usize) -> Result<SRS, KzgError> {
    let num_powers = num_powers(max_degree)?;

    let mut seed = [0u8; SETUP_SECRET_SEED_BYTES];
    if let Err(err) = OsRng.try_fill_bytes(&mut seed) {
        seed.zeroize();
        return Err(KzgError::RandomnessUnavailable(err.to_string()));
    }
    let mut alpha = Fr::from_le_bytes_mod_order(&seed);
    seed.zeroize();

    let srs = build_srs(num_powers, &alpha);
    alpha.zeroize();
    srs
}

/// Same as [setup] but samples α from the given cryptographically secure
/// generator.
///
/// Two calls with generators in the same state produce the same SRS, which
/// is only useful for reproducible tests.
pub fn setup_with_rng<R: RngCore + CryptoRng>(
    max_degree: usize,
    rng: &mut R,
) -> Result<SRS, KzgError> {
    let num_powers = num_powers(max_degree)?;

    let mut alpha = Fr::rand(rng);
    let srs = build_srs(num_powers, &alpha);
    alpha.zeroize();
    srs
}

fn num_powers(max_degree: usize) -> Result<usize, KzgError> {
    max_degree
        .checked_add(1)
        .ok_or(KzgError::InvalidDegreeBound(max_degree))
}

/// Raises both generators to 1, α, ..., α^(num_powers - 1).
fn build_srs(num_powers: usize, alpha: &Fr) -> Result<SRS, KzgError> {
    let start = Instant::now();

    let mut powers = helpers::compute_powers(alpha, num_powers);

    let g1 = G1Affine::generator();
    let g2 = G2Affine::generator();
    let g1_powers: Vec<G1Projective> = powers.par_iter().map(|p| g1 * p).collect();
    let g2_powers: Vec<G2Projective> = powers.par_iter().map(|p| g2 * p).collect();
    powers.zeroize();

    let srs = SRS::from_powers(
        G1Projective::normalize_batch(&g1_powers),
        G2Projective::normalize_batch(&g2_powers),
    )?;

    debug!(
        max_degree = srs.max_degree(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated SRS"
    );
    Ok(srs)
}
