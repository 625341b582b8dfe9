use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{Field, One};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use lagrange_kzg_primitives::{
    domain::Domain,
    errors::KzgError,
    helpers,
    keys::{CommitKey, OpeningKey},
};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

/// Represents the Structured Reference String (SRS) used in KZG commitments,
/// split into the key the prover needs and the key the verifier needs.
///
/// The commit key is stored in Lagrange form, aligned with the order of the
/// domain roots it was built for, so that committing to a polynomial in
/// evaluation form needs no FFT.
#[derive(Debug, PartialEq, Clone)]
pub struct SRS {
    pub commit_key: CommitKey,
    pub opening_key: OpeningKey,
}

impl SRS {
    /// Builds an SRS from a known secret `alpha`.
    ///
    /// Anyone knowing `alpha` can forge proofs: this is for tests and
    /// benchmarks only.
    ///
    /// The i-th commit key point is `[L_i(α)]G₁` with
    /// `L_i(α) = (α^n - 1) / n * ω_i / (α - ω_i)`.
    ///
    /// # Returns
    /// * `Err(KzgError::PointInDomain)` - if `alpha` is one of the domain roots.
    pub fn new_insecure(domain: &Domain, alpha: Fr) -> Result<Self, KzgError> {
        let mut inv_denominators: Vec<Fr> = domain.roots().iter().map(|root| alpha - root).collect();
        helpers::batch_invert(&mut inv_denominators)?;

        let vanishing = (alpha.pow([domain.cardinality()]) - Fr::one()) * domain.cardinality_inv();
        let lagrange_at_alpha: Vec<Fr> = domain
            .roots()
            .iter()
            .zip(&inv_denominators)
            .map(|(root, inv)| vanishing * root * inv)
            .collect();

        let gen_g1 = G1Affine::generator();
        let points: Vec<G1Projective> = lagrange_at_alpha
            .par_iter()
            .map(|l| gen_g1 * *l)
            .collect();

        let gen_g2 = G2Affine::generator();
        let alpha_g2 = (gen_g2 * alpha).into_affine();

        debug!(size = domain.cardinality(), "built insecure lagrange SRS");

        Ok(Self {
            commit_key: CommitKey::new(G1Projective::normalize_batch(&points)),
            opening_key: OpeningKey::new(gen_g1, gen_g2, alpha_g2)?,
        })
    }

    /// Builds an SRS from points in monomial form, `g1_powers[i] = [α^i]G₁`,
    /// as published by a setup ceremony. The first `domain.cardinality()`
    /// points are converted to Lagrange form with an inverse FFT over G₁.
    ///
    /// # Arguments
    /// * `g1_powers` - monomial G₁ points, at least one per domain root
    /// * `gen_g2` - `G₂` generator of the setup
    /// * `alpha_g2` - `[α]G₂`
    /// * `domain` - domain the commit key is used with
    pub fn from_monomial(
        g1_powers: &[G1Affine],
        gen_g2: G2Affine,
        alpha_g2: G2Affine,
        domain: &Domain,
    ) -> Result<Self, KzgError> {
        let length = domain.cardinality() as usize;
        if g1_powers.len() < length {
            return Err(KzgError::InvalidPolynomialSize {
                polynomial_len: length,
                srs_len: g1_powers.len(),
            });
        }

        let mut lagrange = Self::g1_ifft(&g1_powers[..length])?;
        // The IFFT output follows the natural order of the roots.
        if domain.is_bit_reversed() {
            helpers::bit_reverse_permutation(&mut lagrange);
        }

        Ok(Self {
            commit_key: CommitKey::new(lagrange),
            opening_key: OpeningKey::new(g1_powers[0], gen_g2, alpha_g2)?,
        })
    }

    /// function to compute the inverse FFT of a power-of-two number of G1 points
    pub fn g1_ifft(points: &[G1Affine]) -> Result<Vec<G1Affine>, KzgError> {
        let length = points.len();
        // is not power of 2
        if !length.is_power_of_two() {
            return Err(KzgError::DomainError(
                "length provided is not a power of 2".to_string(),
            ));
        }

        let points_projective: Vec<G1Projective> =
            points.par_iter().map(|&p| G1Projective::from(p)).collect();
        let ifft_result = GeneralEvaluationDomain::<Fr>::new(length)
            .ok_or(KzgError::DomainError(
                "Could not perform IFFT due to domain construction error".to_string(),
            ))?
            .ifft(&points_projective);

        Ok(G1Projective::normalize_batch(&ifft_result))
    }
}
