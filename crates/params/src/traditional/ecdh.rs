//! Constants for X25519 Elliptic Curve Diffie-Hellman (RFC 7748)

/// Size of an X25519 public point or shared secret in bytes
pub const X25519_BYTES: usize = 32;

/// Size of an X25519 secret scalar in bytes
pub const X25519_SCALARBYTES: usize = 32;

// Points and scalars share one buffer size throughout the library.
const _: () = assert!(X25519_BYTES == X25519_SCALARBYTES);

/// Curve coefficient A of `v^2 = u^3 + A*u^2 + u`
pub const CURVE25519_A: u32 = 486662;

/// Ladder constant (A - 2) / 4
pub const CURVE25519_A24: u32 = (CURVE25519_A - 2) / 4;

/// u-coordinate of the standard base point
pub const CURVE25519_BASE_U: u8 = 9;

/// Number of scalar bits processed by the Montgomery ladder
pub const X25519_LADDER_BITS: usize = 255;
