//! Prover side of the KZG polynomial commitment scheme.
//!
//! [setup] samples the secret α and produces the [SRS](kzg_bn254_primitives::srs::SRS).
//! [kzg::KZG] commits to polynomials in coefficient form and opens them at
//! arbitrary points.
//!
//! ```
//! use ark_bn254::Fr;
//! use kzg_bn254_primitives::polynomial::PolynomialCoeffForm;
//! use kzg_bn254_prover::{kzg::KZG, setup::setup};
//!
//! let srs = setup(10).unwrap();
//! let kzg = KZG::new();
//! let poly = PolynomialCoeffForm::new(vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)]);
//!
//! let commitment = kzg.commit_coeff_form(&poly, &srs).unwrap();
//! let (proof, value) = kzg.compute_proof_with_value(&poly, &Fr::from(2u64), &srs).unwrap();
//! assert_eq!(value, Fr::from(17u64));
//! # let _ = (commitment, proof);
//! ```

pub mod kzg;
pub mod setup;
