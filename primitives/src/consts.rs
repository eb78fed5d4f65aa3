pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 64; // in bytes

/// Size in bytes of a serialized commitment or opening proof. Both are a
/// single compressed G1 point.
pub const SIZE_OF_COMMITMENT: usize = SIZE_OF_G1_AFFINE_COMPRESSED;
pub const SIZE_OF_PROOF: usize = SIZE_OF_G1_AFFINE_COMPRESSED;

/// Number of bytes drawn from the OS to sample the setup secret. Twice the
/// field width keeps the bias of the modular reduction negligible.
pub const SETUP_SECRET_SEED_BYTES: usize = 2 * BYTES_PER_FIELD_ELEMENT;
