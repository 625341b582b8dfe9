use ark_bn254::{Fr, G1Affine};
use ark_ec::AffineRepr;
use ark_ff::Field;
use ark_serialize::CanonicalDeserialize;

use crate::consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED};

// We define our own error instead of using io::ErrorKind::InvalidData so the
// caller can tell a wrong length apart from a rejected encoding.
#[derive(Debug, thiserror::Error)]
pub enum PointReadError {
    #[error("Invalid point data: {0}")]
    InvalidData(String),

    #[error("Deserialization failed")]
    DeserializationError,
}

pub type Result<T> = core::result::Result<T, PointReadError>;

/// Decoding of compressed, big-endian G1 points. Decoding checks that the
/// point is on the curve and in the prime order subgroup. G2 points are read
/// with [crate::helpers::read_g2_point_from_bytes_be].
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_native_compressed_be(bytes: &[u8]) -> Result<Self>;
}

impl ReadPointFromBytes for G1Affine {
    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G1Affine> {
        if bytes_be.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
            return Err(PointReadError::InvalidData(format!(
                "expected {} bytes, got {}",
                SIZE_OF_G1_AFFINE_COMPRESSED,
                bytes_be.len()
            )));
        }
        let mut bytes_le = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        bytes_le.copy_from_slice(bytes_be);
        bytes_le.reverse();
        G1Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}

// Reading Fr from big endian bytes. Encodings of values >= the modulus are
// rejected rather than reduced.
pub trait ReadFrFromBytes: Field {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self>;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr> {
        if bytes.len() != BYTES_PER_FIELD_ELEMENT {
            return Err(PointReadError::InvalidData(format!(
                "expected {} bytes, got {}",
                BYTES_PER_FIELD_ELEMENT,
                bytes.len()
            )));
        }
        let mut bytes_le = [0u8; BYTES_PER_FIELD_ELEMENT];
        bytes_le.copy_from_slice(bytes);
        bytes_le.reverse();
        Fr::deserialize_uncompressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}
