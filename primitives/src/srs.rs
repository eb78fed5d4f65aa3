use ark_bn254::{G1Affine, G2Affine};
use core::fmt;

use crate::errors::KzgError;

/// Represents the Structured Reference String (SRS) used in KZG commitments.
///
/// For a secret scalar α and a maximum degree t the SRS holds
/// `[g, g^α, ..., g^{α^t}]` in G1 and `[h, h^α, ..., h^{α^t}]` in G2, with
/// g and h the fixed generators of each group. α itself is not part of the
/// SRS. Once built the SRS is never mutated and can be shared freely across
/// threads.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SRS {
    // Points are stored in monomial form, ready to be used for commitments
    // with polynomials in coefficient form.
    g1: Vec<G1Affine>,
    g2: Vec<G2Affine>,
}

impl SRS {
    /// Builds an SRS from already computed powers.
    ///
    /// # Errors
    ///
    /// * [KzgError::InvalidSrs] if either sequence is empty or the two
    ///   sequences differ in length.
    pub fn from_powers(g1: Vec<G1Affine>, g2: Vec<G2Affine>) -> Result<Self, KzgError> {
        if g1.is_empty() {
            return Err(KzgError::InvalidSrs("SRS must hold at least one point".to_string()));
        }
        if g1.len() != g2.len() {
            return Err(KzgError::InvalidSrs(format!(
                "G1 has {} powers but G2 has {}",
                g1.len(),
                g2.len()
            )));
        }
        Ok(Self { g1, g2 })
    }

    /// Powers of the secret in G1, starting at the generator.
    pub fn g1(&self) -> &[G1Affine] {
        &self.g1
    }

    /// Powers of the secret in G2, starting at the generator.
    pub fn g2(&self) -> &[G2Affine] {
        &self.g2
    }

    /// The largest polynomial degree this SRS can commit to.
    pub fn max_degree(&self) -> usize {
        self.g1.len() - 1
    }

    /// Number of powers held in each group, `max_degree() + 1`.
    pub fn len(&self) -> usize {
        self.g1.len()
    }

    /// Always false, an SRS holds at least one point per group.
    pub fn is_empty(&self) -> bool {
        self.g1.is_empty()
    }
}

impl fmt::Display for SRS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for point in &self.g1 {
            write!(f, "{}, ", point)?;
        }
        write!(f, "]")
    }
}
