use ark_bn254::{Fr, G1Affine};

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_OPENING_PROOF},
    errors::KzgError,
    helpers,
    traits::{ReadFrFromBytes, ReadPointFromBytes},
};

/// A commitment has no identity beyond its group element.
pub type Commitment = G1Affine;

/// Proof that a committed polynomial `f` evaluates to `claimed_value` at
/// `input_point`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningProof {
    /// Commitment to the quotient `(f(x) - f(a)) / (x - a)`
    pub quotient_comm: G1Affine,

    /// Point the polynomial is evaluated at: `a`
    pub input_point: Fr,

    /// Purported value `f(a)`
    pub claimed_value: Fr,
}

impl OpeningProof {
    /// Encodes the proof as `quotient_comm || input_point || claimed_value`,
    /// each part big endian, the point compressed.
    pub fn to_bytes_be(&self) -> Result<[u8; SIZE_OF_OPENING_PROOF], KzgError> {
        let mut bytes = [0u8; SIZE_OF_OPENING_PROOF];
        let (quotient, scalars) = bytes.split_at_mut(SIZE_OF_G1_AFFINE_COMPRESSED);
        let (point, value) = scalars.split_at_mut(BYTES_PER_FIELD_ELEMENT);

        quotient.copy_from_slice(&helpers::g1_to_bytes_be(&self.quotient_comm)?);
        point.copy_from_slice(&helpers::fr_to_bytes_be(&self.input_point));
        value.copy_from_slice(&helpers::fr_to_bytes_be(&self.claimed_value));
        Ok(bytes)
    }

    /// Decodes a proof produced by [OpeningProof::to_bytes_be]. Points off the
    /// curve or outside the subgroup and non-canonical scalars are rejected.
    pub fn from_bytes_be(bytes: &[u8; SIZE_OF_OPENING_PROOF]) -> Result<Self, KzgError> {
        let (quotient, scalars) = bytes.split_at(SIZE_OF_G1_AFFINE_COMPRESSED);
        let (point, value) = scalars.split_at(BYTES_PER_FIELD_ELEMENT);

        let quotient_comm = G1Affine::read_point_from_bytes_native_compressed_be(quotient)
            .map_err(|_| {
                KzgError::SerializationError("Failed to deserialize quotient commitment".to_string())
            })?;
        let input_point = Fr::deserialize_from_bytes_be(point).map_err(|_| {
            KzgError::SerializationError("Failed to deserialize input point".to_string())
        })?;
        let claimed_value = Fr::deserialize_from_bytes_be(value).map_err(|_| {
            KzgError::SerializationError("Failed to deserialize claimed value".to_string())
        })?;

        Ok(Self {
            quotient_comm,
            input_point,
            claimed_value,
        })
    }
}
