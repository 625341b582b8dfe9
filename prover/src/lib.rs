//! Prover side of the lagrange-kzg workspace: committing to polynomials in
//! evaluation form ([kzg::commit]) and producing opening proofs at points
//! outside the evaluation domain ([kzg::open]).
//!
//! ## Example
//! ```rust
//! use ark_bn254::Fr;
//! use lagrange_kzg_primitives::{domain::Domain, polynomial::PolynomialEvalForm};
//! use lagrange_kzg_prover::{kzg, srs::SRS};
//!
//! let domain = Domain::new(4).unwrap();
//! // insecure: the secret is known. Only for tests and examples.
//! let srs = SRS::new_insecure(&domain, Fr::from(1234u64)).unwrap();
//!
//! let poly = PolynomialEvalForm::new([3u64, 7, 1, 9].map(Fr::from).to_vec());
//! let commitment = kzg::commit(&poly, &srs.commit_key).unwrap();
//! let proof = kzg::open(&domain, &poly, Fr::from(5u64), &srs.commit_key).unwrap();
//! ```

pub mod kzg;
pub mod srs;
