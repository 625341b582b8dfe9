//! Verifier side of the lagrange-kzg workspace.
//!
//! - [verify::verify]: checks a single [lagrange_kzg_primitives::proof::OpeningProof]
//!   with one pairing product.
//! - [batch::batch_verify_multi_points]: checks many proofs, possibly at
//!   different points, against the same opening key with one pairing
//!   product, by folding them with random weights.
//!
//! A verifier only needs the commitment, the proof and the
//! [lagrange_kzg_primitives::keys::OpeningKey]; the polynomial is never seen.

pub mod batch;
pub mod verify;
