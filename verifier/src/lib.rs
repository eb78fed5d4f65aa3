//! Verifier side of the KZG polynomial commitment scheme.
//!
//! [verify::verify_proof] checks an opening proof against a commitment with
//! a single pairing equation. It needs only the first two G2 powers of the
//! [SRS](kzg_bn254_primitives::srs::SRS).

pub mod verify;
