//! Shared constants for X25519 operations

use curvelock_params::traditional::ecdh::{
    CURVE25519_A24, CURVE25519_BASE_U, X25519_BYTES, X25519_SCALARBYTES,
};

/// Size of an X25519 scalar in bytes
pub const X25519_SCALAR_SIZE: usize = X25519_SCALARBYTES;

/// Size of an encoded u-coordinate (public point or shared secret) in bytes
pub const X25519_POINT_SIZE: usize = X25519_BYTES;

/// Encoding of the standard base point, u = 9
pub const BASE_POINT_U: [u8; X25519_POINT_SIZE] = {
    let mut bytes = [0u8; X25519_POINT_SIZE];
    bytes[0] = CURVE25519_BASE_U;
    bytes
};

/// Ladder constant a24 = (A - 2) / 4 = 121665
pub const A24: u32 = CURVE25519_A24;
