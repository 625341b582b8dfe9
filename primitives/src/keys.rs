use ark_bn254::{G1Affine, G2Affine};

use crate::{errors::KzgError, helpers};

/// G1 points of the structured reference string in Lagrange form:
/// `g1[i] = [L_i(α)]G₁`, where `L_i` is the i-th Lagrange basis polynomial of
/// the domain the key was built for.
///
/// Committing to a polynomial in evaluation form is then a plain inner
/// product with these points.
#[derive(Clone, Debug, PartialEq)]
pub struct CommitKey {
    g1: Vec<G1Affine>,
}

impl CommitKey {
    pub fn new(g1: Vec<G1Affine>) -> Self {
        Self { g1 }
    }

    pub fn g1(&self) -> &[G1Affine] {
        &self.g1
    }

    /// Largest polynomial this key can commit to.
    pub fn len(&self) -> usize {
        self.g1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1.is_empty()
    }
}

/// Public parameters needed to check openings: the generators and `[α]G₂`.
///
/// Only [OpeningKey::new] builds one, so every key reaching the verifier holds
/// validated points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpeningKey {
    gen_g1: G1Affine,
    gen_g2: G2Affine,
    alpha_g2: G2Affine,
}

impl OpeningKey {
    /// Builds an opening key after checking that every point is on its curve
    /// and in the prime order subgroup.
    pub fn new(gen_g1: G1Affine, gen_g2: G2Affine, alpha_g2: G2Affine) -> Result<Self, KzgError> {
        helpers::validate_g1_point(&gen_g1)?;
        helpers::validate_g2_point(&gen_g2)?;
        helpers::validate_g2_point(&alpha_g2)?;
        Ok(Self {
            gen_g1,
            gen_g2,
            alpha_g2,
        })
    }

    pub fn gen_g1(&self) -> G1Affine {
        self.gen_g1
    }

    pub fn gen_g2(&self) -> G2Affine {
        self.gen_g2
    }

    pub fn alpha_g2(&self) -> G2Affine {
        self.alpha_g2
    }
}
