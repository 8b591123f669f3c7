//! X25519 Diffie-Hellman over Curve25519 (RFC 7748)
//!
//! Curve25519 in Montgomery form is `v^2 = u^3 + 486662*u^2 + u` over the
//! prime field F_p with p = 2^255 - 19. X25519 only uses u-coordinates:
//! - points and scalars are both 32-byte little-endian strings
//! - scalars are clamped before use, so every 32-byte string is a valid key
//! - the result is computed with a constant-time Montgomery ladder
//!
//! Peer points are not validated. A low-order peer point produces the
//! all-zero output, which callers can detect on the returned bytes.

mod constants;
mod field;
mod ladder;
mod scalar;

pub use constants::{A24, BASE_POINT_U, X25519_POINT_SIZE, X25519_SCALAR_SIZE};
pub use field::FieldElement;
pub use ladder::{scalar_mult, scalar_mult_base};
pub use scalar::{clamp, Scalar};

use crate::error::{validate, Result};
use rand::{CryptoRng, RngCore};

/// Compute X25519(scalar, u) on raw byte strings
///
/// Both inputs must be exactly 32 bytes; anything else is rejected with a
/// length error before any arithmetic runs. The scalar is clamped and the
/// top bit of `u` is ignored.
pub fn x25519(scalar: &[u8], u: &[u8]) -> Result<[u8; X25519_POINT_SIZE]> {
    let scalar = Scalar::from_slice(scalar)?;
    let u = validate::array::<X25519_POINT_SIZE>("X25519 point", u)?;
    Ok(scalar_mult(&scalar, &u))
}

/// Compute X25519(scalar, 9), the public point for a secret scalar
pub fn x25519_base(scalar: &[u8]) -> Result<[u8; X25519_POINT_SIZE]> {
    let scalar = Scalar::from_slice(scalar)?;
    Ok(scalar_mult_base(&scalar))
}

/// Generate a fresh clamped scalar from `rng`
pub fn generate_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
    Scalar::random(rng)
}

/// Generate a scalar and its public point
pub fn generate_keypair<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(Scalar, [u8; X25519_POINT_SIZE])> {
    let scalar = generate_scalar(rng)?;
    let public = scalar_mult_base(&scalar);
    Ok((scalar, public))
}
