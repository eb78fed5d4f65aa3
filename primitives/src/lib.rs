//! Building blocks shared by the KZG prover and verifier.
//!
//! - [polynomial] holds the coefficient-form polynomial type together with
//!   Horner evaluation and exact long division, the only polynomial
//!   arithmetic the opening protocol needs.
//! - [srs::SRS] is the structured reference string: powers of a secret
//!   scalar in G1 and G2. It is produced by the prover crate's trusted setup
//!   and consumed read-only by commit, open and verify.
//! - [helpers] has the curve-level checks (subgroup validation, the pairing
//!   equation) used on both sides.
//! - [errors] defines [errors::PolynomialError] and [errors::KzgError].

pub mod consts;
pub mod errors;
pub mod helpers;
pub mod polynomial;
pub mod srs;
