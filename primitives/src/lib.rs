//! Shared building blocks of the lagrange-kzg workspace.
//!
//! Polynomials are handled exclusively in evaluation (Lagrange) form over a
//! power-of-two multiplicative subgroup of the bn254 scalar field, see
//! [domain::Domain] and [polynomial::PolynomialEvalForm]. The prover and
//! verifier crates build on the types defined here:
//!
//! - [keys::CommitKey] / [keys::OpeningKey]: public parameters, immutable once built.
//! - [proof::Commitment] / [proof::OpeningProof]: plain values produced per request.
//! - [helpers]: the thin boundary over arkworks (MSM, pairing check, batch
//!   inversion, point validation and byte conversions).

pub mod consts;
pub mod domain;
pub mod errors;
pub mod helpers;
pub mod keys;
pub mod polynomial;
pub mod proof;
pub mod traits;
