use ark_bn254::{Bn254, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::Zero;

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::KzgError,
};

/// Computes the linear combination `Σ scalars[i] * points[i]` with a single
/// multi-scalar multiplication.
///
/// # Arguments
/// * `points` - G1 bases
/// * `scalars` - one scalar per base
///
/// # Returns
/// * `Ok(G1Affine)` - the combined point
/// * `Err(KzgError::MsmError)` - if the two slices have different lengths
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    if points.len() != scalars.len() {
        return Err(KzgError::MsmError(format!(
            "{} bases but {} scalars",
            points.len(),
            scalars.len()
        )));
    }

    let lincomb = G1Projective::msm(points, scalars)
        .map_err(|len| KzgError::MsmError(format!("MSM input length mismatch at {}", len)))?;

    Ok(lincomb.into_affine())
}

/// Returns whether `Π e(g1_points[i], g2_points[i])` is the identity of the
/// target group.
///
/// A length mismatch between the two lists is an engine error, it is never
/// reported as `Ok(false)`.
pub fn pairing_check(g1_points: &[G1Affine], g2_points: &[G2Affine]) -> Result<bool, KzgError> {
    if g1_points.len() != g2_points.len() {
        return Err(KzgError::PairingError(format!(
            "{} G1 points but {} G2 points",
            g1_points.len(),
            g2_points.len()
        )));
    }
    if g1_points.is_empty() {
        return Err(KzgError::PairingError("empty pairing product".to_string()));
    }

    let result = Bn254::multi_pairing(g1_points.iter().copied(), g2_points.iter().copied());
    Ok(result.is_zero())
}

/// Inverts every element of `values` in place using Montgomery's trick: one
/// field inversion plus three multiplications per element.
///
/// Every denominator inverted in this workspace has the shape `root - point`,
/// so a zero element means the point lies on the domain: that case returns
/// [KzgError::PointInDomain] and leaves `values` untouched.
pub fn batch_invert(values: &mut [Fr]) -> Result<(), KzgError> {
    if values.iter().any(|v| v.is_zero()) {
        return Err(KzgError::PointInDomain);
    }
    ark_ff::batch_inversion(values);
    Ok(())
}

/// Reorders `values` so that the element at index `i` moves to index
/// `reverse_bits(i)`, using `log2(values.len())` bits.
///
/// The length must be a power of two; other lengths are left untouched.
pub fn bit_reverse_permutation<T>(values: &mut [T]) {
    let n = values.len();
    if n <= 1 || !n.is_power_of_two() {
        return;
    }
    let shift = usize::BITS - n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if i < j {
            values.swap(i, j);
        }
    }
}

/// Checks that a G1 point is on the curve and in the prime order subgroup.
/// The point at infinity is accepted: it is the commitment to the zero
/// polynomial.
pub fn validate_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }

    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}

/// Same as [validate_g1_point] for the twist.
pub fn validate_g2_point(point: &G2Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }

    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G2 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}

/// Canonical big-endian encoding of a field element.
pub fn fr_to_bytes_be(value: &Fr) -> [u8; BYTES_PER_FIELD_ELEMENT] {
    let mut bytes = [0u8; BYTES_PER_FIELD_ELEMENT];
    let be = value.into_bigint().to_bytes_be();
    // bn254 scalars are exactly four limbs, so `be` is 32 bytes long
    bytes[BYTES_PER_FIELD_ELEMENT - be.len()..].copy_from_slice(&be);
    bytes
}

/// Compressed encoding of a G1 point, converted from arkworks' native little
/// endian layout to big endian.
pub fn g1_to_bytes_be(point: &G1Affine) -> Result<[u8; SIZE_OF_G1_AFFINE_COMPRESSED], KzgError> {
    let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    point
        .serialize_compressed(&mut bytes[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

/// Compressed big-endian encoding of a G2 point.
pub fn g2_to_bytes_be(point: &G2Affine) -> Result<[u8; SIZE_OF_G2_AFFINE_COMPRESSED], KzgError> {
    let mut bytes = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
    point
        .serialize_compressed(&mut bytes[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    bytes.reverse();
    Ok(bytes)
}

/// Reads a G2 point from its compressed big-endian encoding, checking that it
/// is on the twist and in the prime order subgroup.
pub fn read_g2_point_from_bytes_be(bytes_be: &[u8]) -> Result<G2Affine, KzgError> {
    if bytes_be.len() != SIZE_OF_G2_AFFINE_COMPRESSED {
        return Err(KzgError::SerializationError(format!(
            "expected {} bytes for a G2 point, got {}",
            SIZE_OF_G2_AFFINE_COMPRESSED,
            bytes_be.len()
        )));
    }
    let mut bytes_le = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
    bytes_le.copy_from_slice(bytes_be);
    bytes_le.reverse();
    G2Affine::deserialize_compressed(&bytes_le[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))
}

/// Validates every point of `points`, reporting the first invalid one as
/// `"<what> <index>: <reason>"`.
pub fn validate_g1_points(points: &[G1Affine], what: &str) -> Result<(), KzgError> {
    for (index, point) in points.iter().enumerate() {
        validate_g1_point(point).map_err(|e| describe_invalid_point(e, what, Some(index)))?;
    }
    Ok(())
}

/// Prefixes the reason of a [KzgError::NotOnCurveError] with the role of the
/// point and, for lists, its index. Other errors are returned as is.
pub fn describe_invalid_point(err: KzgError, what: &str, index: Option<usize>) -> KzgError {
    match (err, index) {
        (KzgError::NotOnCurveError(reason), Some(index)) => {
            KzgError::NotOnCurveError(format!("{} {}: {}", what, index, reason))
        },
        (KzgError::NotOnCurveError(reason), None) => {
            KzgError::NotOnCurveError(format!("{}: {}", what, reason))
        },
        (other, _) => other,
    }
}
