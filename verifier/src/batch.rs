use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::CurveGroup;
use ark_ff::{One, PrimeField, Zero};
use lagrange_kzg_primitives::{
    errors::KzgError,
    helpers,
    keys::OpeningKey,
    proof::{Commitment, OpeningProof},
};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::debug;

use crate::verify::verify;

/// Verifies several opening proofs at once, drawing the folding weights from
/// the operating system's secure random source. See
/// [batch_verify_multi_points_with_rng].
pub fn batch_verify_multi_points(
    commitments: &[Commitment],
    proofs: &[OpeningProof],
    open_key: &OpeningKey,
) -> Result<(), KzgError> {
    batch_verify_multi_points_with_rng(commitments, proofs, open_key, &mut OsRng)
}

/// Verifies `proofs[i]` against `commitments[i]` for every `i` with a single
/// pairing product. The proofs may open at different points but must all
/// come from the setup `open_key` belongs to.
///
/// With weights `r_0 = 1` and `r_1..r_{n-1}` drawn from `rng`, it checks
///
/// ```text
/// e(Σ r_i·(C_i - [y_i]G₁ + z_i·H_i), G₂) · e(-Σ r_i·H_i, [α]G₂) == 1
/// ```
///
/// which holds for all proofs at once, and fails with overwhelming
/// probability if any single proof is invalid. The weights must come from a
/// cryptographically secure source and must not be reused across calls.
///
/// # Returns
///
/// * `Ok(())` - every proof is valid (trivially so for an empty batch)
/// * `Err(KzgError::CountMismatch)` - the two slices have different lengths
/// * `Err(KzgError::VerifyOpeningProof)` - the combined pairing check failed
/// * `Err(KzgError::RandomnessError)` - `rng` could not produce a weight
/// * `Err(KzgError)` - engine errors (MSM, pairing, invalid points) as is
pub fn batch_verify_multi_points_with_rng<R: RngCore + CryptoRng>(
    commitments: &[Commitment],
    proofs: &[OpeningProof],
    open_key: &OpeningKey,
    rng: &mut R,
) -> Result<(), KzgError> {
    if commitments.len() != proofs.len() {
        return Err(KzgError::CountMismatch {
            commitments: commitments.len(),
            proofs: proofs.len(),
        });
    }

    match commitments.len() {
        0 => return Ok(()),
        1 => return verify(&commitments[0], &proofs[0], open_key),
        _ => {},
    }

    debug!(proofs = proofs.len(), "batch verifying opening proofs");

    helpers::validate_g1_points(commitments, "commitment")?;
    let quotients: Vec<G1Affine> = proofs.iter().map(|proof| proof.quotient_comm).collect();
    helpers::validate_g1_points(&quotients, "proof")?;

    // r_0 is fixed to one, the others are random
    let mut random_numbers = Vec::with_capacity(commitments.len());
    random_numbers.push(Fr::one());
    for _ in 1..commitments.len() {
        random_numbers.push(random_scalar(rng)?);
    }

    // Σ r_i·H_i
    let folded_quotients = helpers::g1_lincomb(&quotients, &random_numbers)?;

    // Σ r_i·C_i and Σ r_i·y_i
    let evaluations: Vec<Fr> = proofs.iter().map(|proof| proof.claimed_value).collect();
    let (folded_digests, folded_evaluations) = fold(commitments, &evaluations, &random_numbers)?;

    // F = Σ r_i·C_i - [Σ r_i·y_i]G₁
    let folded_evaluations_commit = open_key.gen_g1() * folded_evaluations;
    let mut folded = G1Projective::from(folded_digests) - folded_evaluations_commit;

    // F += Σ r_i·z_i·H_i
    for (random_number, proof) in random_numbers.iter_mut().zip(proofs) {
        *random_number *= proof.input_point;
    }
    let folded_points_quotients = helpers::g1_lincomb(&quotients, &random_numbers)?;
    folded += G1Projective::from(folded_points_quotients);

    let check = helpers::pairing_check(
        &[folded.into_affine(), -folded_quotients],
        &[open_key.gen_g2(), open_key.alpha_g2()],
    )?;

    if !check {
        debug!(proofs = proofs.len(), "batch of opening proofs rejected by pairing check");
        return Err(KzgError::VerifyOpeningProof);
    }
    Ok(())
}

/// Folds commitments and their evaluations with the same weights:
/// returns `(Σ factors[i]·digests[i], Σ factors[i]·evaluations[i])`.
///
/// MSM failures are returned to the caller.
pub fn fold(
    digests: &[Commitment],
    evaluations: &[Fr],
    factors: &[Fr],
) -> Result<(Commitment, Fr), KzgError> {
    if digests.len() != evaluations.len() || digests.len() != factors.len() {
        return Err(KzgError::MsmError(format!(
            "cannot fold {} digests with {} evaluations and {} factors",
            digests.len(),
            evaluations.len(),
            factors.len()
        )));
    }

    let folded_evaluations = evaluations
        .iter()
        .zip(factors)
        .fold(Fr::zero(), |acc, (evaluation, factor)| acc + *evaluation * factor);

    let folded_digests = helpers::g1_lincomb(digests, factors)?;

    Ok((folded_digests, folded_evaluations))
}

/// Draws a scalar from 64 random bytes reduced modulo r, the bias is
/// negligible.
fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Fr, KzgError> {
    let mut bytes = [0u8; 64];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| KzgError::RandomnessError(e.to_string()))?;
    Ok(Fr::from_le_bytes_mod_order(&bytes))
}
