use thiserror::Error;

/// Errors related to Polynomial operations.
///
/// The `PolynomialError` enum covers the preconditions of exact polynomial
/// division. Evaluation never fails.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolynomialError {
    /// The divisor has no coefficients at all.
    #[error("divisor polynomial cannot be empty")]
    EmptyDivisor,

    /// The divisor has more coefficients than the dividend.
    #[error(
        "divisor length {divisor_len} exceeds dividend length {dividend_len}"
    )]
    DivisorDegreeExceedsDividend {
        dividend_len: usize,
        divisor_len: usize,
    },

    /// The divisor is the zero polynomial, or its leading coefficient is
    /// zero and therefore not invertible.
    #[error("cannot divide by zero polynomial")]
    ZeroDivisorPolynomial,

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// setup, commitment, opening and verification, including those from
/// `PolynomialError`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from Polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    /// Error when polynomial degree exceeds SRS capacity
    #[error("polynomial length {polynomial_len} exceeds SRS capacity {srs_len}")]
    DegreeBoundExceeded {
        polynomial_len: usize,
        srs_len: usize,
    },

    #[error("MSM error: {0}")]
    MsmError(String),

    /// A commitment or proof is not a valid point of the prime order
    /// subgroup, so the pairing cannot be evaluated on it.
    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// The SRS is too short or carries malformed points.
    #[error("invalid SRS: {0}")]
    InvalidSrs(String),

    /// The requested maximum degree cannot be represented.
    #[error("invalid degree bound: {0}")]
    InvalidDegreeBound(usize),

    /// The operating system could not provide secure randomness.
    #[error("randomness unavailable: {0}")]
    RandomnessUnavailable(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}
