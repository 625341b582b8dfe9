use thiserror::Error;

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur while
/// building domains and keys, committing, opening and verifying. Errors
/// raised by the underlying curve arithmetic (MSM, pairing, decoding) keep
/// their own variants and are never reported as a failed verification.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Polynomial is empty or longer than the commit key.
    #[error("invalid polynomial size {polynomial_len} (must be non-zero and at most {srs_len})")]
    InvalidPolynomialSize {
        polynomial_len: usize,
        srs_len: usize,
    },

    /// Polynomial length does not match the cardinality of the domain it is
    /// interpreted over.
    #[error("polynomial size {polynomial_len} does not match domain size {domain_size}")]
    DomainSizeMismatch {
        polynomial_len: usize,
        domain_size: u64,
    },

    /// The point coincides with a root of the evaluation domain.
    #[error("cannot divide by point in the domain")]
    PointInDomain,

    #[error("number of commitments ({commitments}) is not the same as the number of proofs ({proofs})")]
    CountMismatch { commitments: usize, proofs: usize },

    /// The pairing check did not hold.
    #[error("can't verify opening proof")]
    VerifyOpeningProof,

    #[error("MSM error: {0}")]
    MsmError(String),

    #[error("pairing error: {0}")]
    PairingError(String),

    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Error while constructing an evaluation domain.
    #[error("domain error: {0}")]
    DomainError(String),

    /// The random source could not produce a scalar.
    #[error("randomness error: {0}")]
    RandomnessError(String),
}
