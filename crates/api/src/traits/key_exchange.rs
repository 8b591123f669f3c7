//! Trait definition for Diffie-Hellman style key exchange
//!
//! A key exchange here is non-interactive: each party publishes a public
//! key derived from its secret, and both sides combine their own secret
//! with the peer's public key to arrive at the same shared secret.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};

/// Trait for a Diffie-Hellman key exchange with domain-specific types.
///
/// # Security Note
///
/// Implementations are not required to reject degenerate peer keys. When a
/// protocol depends on contributory behavior the caller must check the
/// shared secret (for example, reject an all-zero value).
pub trait KeyExchange {
    /// Public key type. Safe to transmit.
    type PublicKey: Clone + Serialize;

    /// Secret key type. Must wipe itself on drop.
    type SecretKey: SerializeSecret;

    /// Shared secret type. Must wipe itself on drop and should be fed into
    /// a key-derivation step before use.
    type SharedSecret: SerializeSecret;

    /// Returns the algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair from the provided CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::SecretKey, Self::PublicKey)>;

    /// Derive the public key belonging to a secret key.
    fn public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Combine a local secret key with a peer's public key.
    fn shared_secret(
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
