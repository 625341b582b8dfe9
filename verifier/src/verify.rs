use ark_bn254::{G1Projective, G2Projective};
use ark_ec::CurveGroup;
use lagrange_kzg_primitives::{
    consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_OPENING_PROOF},
    errors::KzgError,
    helpers,
    keys::OpeningKey,
    proof::{Commitment, OpeningProof},
    traits::ReadPointFromBytes,
};
use tracing::debug;

/// This function performs verification of a KZG opening proof using
/// bilinear pairings. It checks
///
/// ```text
/// e([f(α) - f(a)]G₁, G₂) · e([-H(α)]G₁, [α - a]G₂) == 1
/// ```
///
/// where `[α - a]G₂` is obtained as `[α]G₂ - a·G₂`, α itself is unknown.
///
/// # Arguments
///
/// * `commitment` - commitment to the polynomial
/// * `proof` - quotient commitment, point `a` and claimed value `f(a)`
/// * `open_key` - generators and `[α]G₂`
///
/// # Returns
///
/// * `Ok(())` - the proof is valid
/// * `Err(KzgError::VerifyOpeningProof)` - the pairing check failed
/// * `Err(KzgError)` - any other variant if the inputs are malformed (e.g.
///   points not on the curve); such errors are never turned into a failed check
pub fn verify(
    commitment: &Commitment,
    proof: &OpeningProof,
    open_key: &OpeningKey,
) -> Result<(), KzgError> {
    helpers::validate_g1_point(commitment)
        .map_err(|e| helpers::describe_invalid_point(e, "commitment", None))?;
    helpers::validate_g1_point(&proof.quotient_comm)
        .map_err(|e| helpers::describe_invalid_point(e, "proof", None))?;

    // [f(a)]G₁
    let claimed_value_g1 = open_key.gen_g1() * proof.claimed_value;

    // [f(α) - f(a)]G₁
    let f_minus_fa_g1 = G1Projective::from(*commitment) - claimed_value_g1;

    // [-H(α)]G₁
    let neg_quotient = -proof.quotient_comm;

    // [α - a]G₂
    let alpha_minus_a_g2 =
        G2Projective::from(open_key.alpha_g2()) - open_key.gen_g2() * proof.input_point;

    let check = helpers::pairing_check(
        &[f_minus_fa_g1.into_affine(), neg_quotient],
        &[open_key.gen_g2(), alpha_minus_a_g2.into_affine()],
    )?;

    if !check {
        debug!(point = %proof.input_point, "opening proof rejected by pairing check");
        return Err(KzgError::VerifyOpeningProof);
    }
    Ok(())
}

/// Same as [verify] with the commitment and proof given in their byte
/// encodings (compressed big-endian point, see
/// [OpeningProof::to_bytes_be]).
pub fn verify_proof_bytes(
    commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    proof: &[u8; SIZE_OF_OPENING_PROOF],
    open_key: &OpeningKey,
) -> Result<(), KzgError> {
    let commitment =
        Commitment::read_point_from_bytes_native_compressed_be(commitment).map_err(|_| {
            KzgError::SerializationError("Failed to deserialize commitment".to_string())
        })?;
    let proof = OpeningProof::from_bytes_be(proof)?;
    verify(&commitment, &proof, open_key)
}
