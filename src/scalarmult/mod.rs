//! X25519 scalar multiplication
//!
//! Three operations make up the whole key agreement:
//!
//! - [`keygen`] draws a fresh clamped secret scalar from the OS,
//! - [`base`] derives the public point `X25519(secret, 9)`,
//! - [`shared_secret`] combines a secret scalar with a peer's public point.
//!
//! Every input is a 32-byte string ([`BYTES`] == [`SCALARBYTES`]); any other
//! length fails with
//! [`Error::InvalidKeyLength`](crate::api::Error::InvalidKeyLength) before
//! arithmetic starts.
//! Secret scalars and shared secrets live in guarded buffers that are wiped
//! when dropped.
//!
//! Peer points are not validated. A low-order point such as all zeroes
//! yields an all-zero shared secret; use [`SharedSecret::is_all_zero`] when
//! the protocol needs contributory behaviour.

mod config;
mod exchange;
mod keys;

pub use config::Config;
pub use exchange::X25519;
pub use keys::{PublicPoint, SecretScalar, SharedSecret};

use curvelock_algorithms::error::to_core_result;
use curvelock_algorithms::ec::x25519::{self as engine, Scalar};
use curvelock_api::error::validation;
use curvelock_api::Result;
use curvelock_params::traditional::ecdh::{X25519_BYTES, X25519_SCALARBYTES};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// Size of a public point or shared secret in bytes
pub const BYTES: usize = X25519_BYTES;

/// Size of a secret scalar in bytes
pub const SCALARBYTES: usize = X25519_SCALARBYTES;

const _: () = assert!(BYTES == SCALARBYTES && BYTES == 32);

/// Generate a secret scalar from the operating system's entropy source
///
/// Fails with
/// [`Error::RandomSourceUnavailable`](crate::api::Error::RandomSourceUnavailable)
/// if the OS cannot supply randomness; no partially random key is ever returned.
pub fn keygen() -> Result<SecretScalar> {
    keygen_with_config(&Config::default())
}

/// [`keygen`] with an explicit memory-locking configuration
pub fn keygen_with_config(config: &Config) -> Result<SecretScalar> {
    generate(&mut OsRng, config)
}

/// Generate a secret scalar from a caller-supplied CSPRNG
pub fn keygen_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Result<SecretScalar> {
    generate(rng, &Config::default())
}

/// Generate a secret scalar together with its public point
pub fn keypair() -> Result<(SecretScalar, PublicPoint)> {
    let secret = keygen()?;
    let public = secret.public_point();
    Ok((secret, public))
}

/// Derive the public point for `secret`
///
/// The scalar is clamped first, so any 32-byte string is accepted.
pub fn base(secret: impl AsRef<[u8]>) -> Result<PublicPoint> {
    let scalar = Scalar::from_slice(secret.as_ref())?;
    Ok(PublicPoint::from(engine::scalar_mult_base(&scalar)))
}

/// Compute the shared secret between `secret` and a peer's public point
pub fn shared_secret(
    secret: impl AsRef<[u8]>,
    peer_public: impl AsRef<[u8]>,
) -> Result<SharedSecret> {
    shared_secret_with_config(secret, peer_public, &Config::default())
}

/// [`shared_secret`] with an explicit memory-locking configuration
pub fn shared_secret_with_config(
    secret: impl AsRef<[u8]>,
    peer_public: impl AsRef<[u8]>,
    config: &Config,
) -> Result<SharedSecret> {
    let scalar = Scalar::from_slice(secret.as_ref())?;
    let point = validation::fixed_bytes::<BYTES>("X25519 point", peer_public.as_ref())?;
    SharedSecret::compute(&scalar, &point, config.lock_policy)
}

fn generate<R: CryptoRng + RngCore>(rng: &mut R, config: &Config) -> Result<SecretScalar> {
    let scalar = to_core_result(engine::generate_scalar(rng), "scalarmult::keygen")?;
    SecretScalar::from_scalar(&scalar, config.lock_policy)
}
