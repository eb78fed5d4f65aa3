#[cfg(test)]
mod tests {
    use ark_bn254::{Fq, Fq2, Fr, G1Affine, G2Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::{One, UniformRand};
    use kzg_bn254_primitives::{
        errors::KzgError, polynomial::PolynomialCoeffForm, srs::SRS,
    };
    use kzg_bn254_prover::{
        kzg::KZG,
        setup::{setup, setup_with_rng},
    };
    use kzg_bn254_verifier::verify::verify_proof;
    use lazy_static::lazy_static;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use tracing_subscriber::EnvFilter;

    const MAX_DEGREE: usize = 10;

    // Define a static variable for setup
    lazy_static! {
        static ref KZG_INSTANCE: KZG = KZG::new();
        static ref SRS_INSTANCE: SRS = setup(MAX_DEGREE).unwrap();
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn random_poly(len: usize) -> PolynomialCoeffForm {
        let mut rng = rand::thread_rng();
        PolynomialCoeffForm::new((0..len).map(|_| Fr::rand(&mut rng)).collect())
    }

    /// Commits to `poly` and opens it at `z_fr`, returning
    /// `(commitment, proof, value)`.
    fn commit_and_open(poly: &PolynomialCoeffForm, z_fr: &Fr) -> (G1Affine, G1Affine, Fr) {
        let commitment = KZG_INSTANCE
            .commit_coeff_form(poly, &SRS_INSTANCE)
            .unwrap();
        let (proof, value) = KZG_INSTANCE
            .compute_proof_with_value(poly, z_fr, &SRS_INSTANCE)
            .unwrap();
        (commitment, proof, value)
    }

    #[test]
    fn test_verify_end_to_end() {
        init_tracing();
        let srs = setup(10).unwrap();
        let kzg = KZG::new();

        // random coefficients
        let poly = random_poly(3);

        let x0 = Fr::from(-3i64);
        let y0 = poly.evaluate(&x0);

        let commitment = kzg.commit_coeff_form(&poly, &srs).unwrap();
        let proof = kzg.compute_proof(&poly, &x0, &srs).unwrap();

        assert!(verify_proof(&srs, commitment, proof, x0, y0).unwrap());
    }

    #[test]
    fn test_verify_random_polynomials() {
        init_tracing();
        let mut rng = rand::thread_rng();

        (0..20).for_each(|_| {
            let len = rng.gen_range(0..=MAX_DEGREE + 1);
            let poly = random_poly(len);
            let z_fr = Fr::rand(&mut rng);

            let (commitment, proof, value) = commit_and_open(&poly, &z_fr);
            assert_eq!(value, poly.evaluate(&z_fr));
            assert!(
                verify_proof(&SRS_INSTANCE, commitment, proof, z_fr, value).unwrap(),
                "honest proof for length {} should verify",
                len
            );
        });
    }

    #[test]
    fn test_verify_constant_polynomial() {
        let poly = PolynomialCoeffForm::new(vec![Fr::from(7u64)]);
        let (commitment, proof, value) = commit_and_open(&poly, &Fr::from(100u64));
        assert_eq!(value, Fr::from(7u64));
        assert_eq!(proof, G1Affine::identity());
        assert!(verify_proof(&SRS_INSTANCE, commitment, proof, Fr::from(100u64), value).unwrap());
        assert!(
            !verify_proof(&SRS_INSTANCE, commitment, proof, Fr::from(100u64), Fr::from(8u64))
                .unwrap()
        );
    }

    #[test]
    fn test_verify_point_in_srs_domain() {
        // x0 = 0 and x0 = 1 are as good as any other point.
        let poly = random_poly(MAX_DEGREE + 1);
        for z_fr in [Fr::from(0u64), Fr::one()] {
            let (commitment, proof, value) = commit_and_open(&poly, &z_fr);
            assert!(verify_proof(&SRS_INSTANCE, commitment, proof, z_fr, value).unwrap());
        }
    }

    #[test]
    fn test_verify_tampered_commitment() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(5);
        let z_fr = Fr::rand(&mut rng);
        let (commitment, proof, value) = commit_and_open(&poly, &z_fr);

        let tampered = (commitment + G1Affine::generator()).into_affine();
        assert!(!verify_proof(&SRS_INSTANCE, tampered, proof, z_fr, value).unwrap());

        // A commitment to a different polynomial does not verify either.
        let other = KZG_INSTANCE
            .commit_coeff_form(&random_poly(5), &SRS_INSTANCE)
            .unwrap();
        assert!(!verify_proof(&SRS_INSTANCE, other, proof, z_fr, value).unwrap());
    }

    #[test]
    fn test_verify_tampered_proof() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(5);
        let z_fr = Fr::rand(&mut rng);
        let (commitment, proof, value) = commit_and_open(&poly, &z_fr);

        let tampered = (proof + G1Affine::generator()).into_affine();
        assert!(!verify_proof(&SRS_INSTANCE, commitment, tampered, z_fr, value).unwrap());
        assert!(
            !verify_proof(&SRS_INSTANCE, commitment, G1Affine::identity(), z_fr, value).unwrap()
        );
    }

    #[test]
    fn test_verify_tampered_point() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(5);
        let z_fr = Fr::rand(&mut rng);
        let (commitment, proof, value) = commit_and_open(&poly, &z_fr);

        assert!(!verify_proof(&SRS_INSTANCE, commitment, proof, z_fr + Fr::one(), value).unwrap());
    }

    #[test]
    fn test_verify_tampered_value() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(5);
        let z_fr = Fr::rand(&mut rng);
        let (commitment, proof, value) = commit_and_open(&poly, &z_fr);

        assert!(!verify_proof(&SRS_INSTANCE, commitment, proof, z_fr, value + Fr::one()).unwrap());
    }

    #[test]
    fn test_verify_against_other_srs() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(5);
        let z_fr = Fr::rand(&mut rng);
        let (commitment, proof, value) = commit_and_open(&poly, &z_fr);

        let other_srs = setup(MAX_DEGREE).unwrap();
        assert!(!verify_proof(&other_srs, commitment, proof, z_fr, value).unwrap());
    }

    #[test]
    fn test_verify_invalid_points() {
        let mut rng = rand::thread_rng();
        let poly = random_poly(5);
        let z_fr = Fr::rand(&mut rng);
        let (commitment, proof, value) = commit_and_open(&poly, &z_fr);

        // y² = x³ + 3 does not hold for (1, 1)
        let off_curve = G1Affine::new_unchecked(Fq::one(), Fq::one());

        assert_eq!(
            verify_proof(&SRS_INSTANCE, off_curve, proof, z_fr, value),
            Err(KzgError::NotOnCurveError(
                "commitment not on curve".to_string()
            ))
        );
        assert_eq!(
            verify_proof(&SRS_INSTANCE, commitment, off_curve, z_fr, value),
            Err(KzgError::NotOnCurveError("proof not on curve".to_string()))
        );
    }

    #[test]
    fn test_verify_degree_zero_srs() {
        let srs = setup_with_rng(0, &mut StdRng::seed_from_u64(11)).unwrap();
        let poly = PolynomialCoeffForm::new(vec![Fr::from(3u64)]);
        let kzg = KZG::new();
        let commitment = kzg.commit_coeff_form(&poly, &srs).unwrap();
        let (proof, value) = kzg
            .compute_proof_with_value(&poly, &Fr::from(1u64), &srs)
            .unwrap();

        assert_eq!(
            verify_proof(&srs, commitment, proof, Fr::from(1u64), value),
            Err(KzgError::InvalidSrs(
                "SRS of degree 0 holds no [α]·h point".to_string()
            ))
        );
    }

    #[test]
    fn test_verify_malformed_srs() {
        let srs = SRS::from_powers(
            vec![G1Affine::generator(); 2],
            vec![
                G2Affine::generator(),
                G2Affine::new_unchecked(Fq2::one(), Fq2::one()),
            ],
        )
        .unwrap();

        let result = verify_proof(
            &srs,
            G1Affine::generator(),
            G1Affine::identity(),
            Fr::one(),
            Fr::one(),
        );
        assert_eq!(
            result,
            Err(KzgError::InvalidSrs(
                "not on curve error: G2 point not on curve".to_string()
            ))
        );
    }

    #[test]
    fn test_verify_shared_srs_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let poly = random_poly(MAX_DEGREE + 1);
                    let z_fr = Fr::from(i as u64);
                    let (commitment, proof, value) = commit_and_open(&poly, &z_fr);
                    verify_proof(&SRS_INSTANCE, commitment, proof, z_fr, value).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}
