pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 64; // in bytes

/// quotient commitment || input point || claimed value
pub const SIZE_OF_OPENING_PROOF: usize = SIZE_OF_G1_AFFINE_COMPRESSED + 2 * BYTES_PER_FIELD_ELEMENT;

/// Largest evaluation domain we accept. The bn254 scalar field has
/// two-adicity 28.
pub const MAX_DOMAIN_SIZE: usize = 1 << 28;
