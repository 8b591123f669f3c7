//! X25519 as a generic [`KeyExchange`]

use curvelock_api::{KeyExchange, Result, Serialize, SerializeSecret};
use curvelock_common::{GuardedBuffer, LockPolicy};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{keygen_with_rng, PublicPoint, SecretScalar, SharedSecret, BYTES};
use curvelock_api::error::validation;

/// X25519 Diffie-Hellman (RFC 7748)
pub struct X25519;

impl KeyExchange for X25519 {
    type PublicKey = PublicPoint;
    type SecretKey = SecretScalar;
    type SharedSecret = SharedSecret;

    fn name() -> &'static str {
        "X25519"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(SecretScalar, PublicPoint)> {
        let secret = keygen_with_rng(rng)?;
        let public = secret.public_point();
        Ok((secret, public))
    }

    fn public_key(secret_key: &SecretScalar) -> Result<PublicPoint> {
        Ok(secret_key.public_point())
    }

    fn shared_secret(
        secret_key: &SecretScalar,
        peer_public_key: &PublicPoint,
    ) -> Result<SharedSecret> {
        secret_key.diffie_hellman(peer_public_key)
    }
}

impl Serialize for PublicPoint {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        PublicPoint::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl SerializeSecret for SecretScalar {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretScalar::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.as_bytes().to_vec())
    }
}

impl SerializeSecret for SharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validation::key_length("X25519 shared secret", bytes.len(), BYTES)?;
        Ok(SharedSecret::from_buffer(GuardedBuffer::from_slice(
            bytes,
            LockPolicy::default(),
        )?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.as_bytes().to_vec())
    }
}
