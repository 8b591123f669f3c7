//! Typed X25519 key material

use core::fmt;

use curvelock_algorithms::ec::x25519::{self as engine, Scalar};
use curvelock_api::error::validation;
use curvelock_api::{Error, Result};
use curvelock_common::{GuardedBuffer, LockPolicy, SecureCompare, ZeroizeGuard};
use curvelock_internal::constant_time::ct_is_zero;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::{BYTES, SCALARBYTES};

/// Clamped secret scalar held in a guarded buffer
///
/// Not `Clone`: a second copy of the key must be requested explicitly with
/// [`SecretScalar::try_clone`], which acquires its own guarded region.
pub struct SecretScalar {
    buf: GuardedBuffer,
}

impl SecretScalar {
    /// Import a 32-byte secret, clamping it
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with(bytes, LockPolicy::default())
    }

    /// [`SecretScalar::from_bytes`] with an explicit lock policy
    pub fn from_bytes_with(bytes: &[u8], policy: LockPolicy) -> Result<Self> {
        let scalar = Scalar::from_slice(bytes)?;
        Self::from_scalar(&scalar, policy)
    }

    pub(crate) fn from_scalar(scalar: &Scalar, policy: LockPolicy) -> Result<Self> {
        Ok(Self {
            buf: GuardedBuffer::from_slice(scalar.as_bytes(), policy)?,
        })
    }

    /// Public point `X25519(self, 9)`
    pub fn public_point(&self) -> PublicPoint {
        PublicPoint(engine::scalar_mult_base(&self.scalar()))
    }

    /// Shared secret with `peer`, held in a buffer with this key's lock policy
    pub fn diffie_hellman(&self, peer: &PublicPoint) -> Result<SharedSecret> {
        SharedSecret::compute(&self.scalar(), &peer.0, self.buf.policy())
    }

    /// Copy the key into a freshly acquired guarded region
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            buf: self.buf.try_clone()?,
        })
    }

    /// The clamped scalar bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// Whether the backing region is locked against swapping
    pub fn is_locked(&self) -> bool {
        self.buf.is_locked()
    }

    fn scalar(&self) -> Scalar {
        let mut bytes = [0u8; SCALARBYTES];
        bytes.copy_from_slice(self.buf.as_slice());
        let scalar = Scalar::from_bytes(bytes);
        bytes.zeroize();
        scalar
    }
}

impl AsRef<[u8]> for SecretScalar {
    fn as_ref(&self) -> &[u8] {
        self.buf.as_slice()
    }
}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretScalar([REDACTED])")
    }
}

/// Public point: the u-coordinate of `[secret]B`
///
/// Equality is constant-time.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PublicPoint([u8; BYTES]);

impl PublicPoint {
    /// Import a 32-byte public point
    ///
    /// Any 32-byte string is accepted; the top bit is ignored by the ladder.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self(validation::fixed_bytes::<BYTES>("X25519 point", bytes)?))
    }

    /// Parse a point from 64 hex digits
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str).map_err(|e| Error::InvalidParameter {
            context: "PublicPoint::from_hex",
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Lowercase hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Copy of the encoded point
    pub fn to_bytes(&self) -> [u8; BYTES] {
        self.0
    }

    /// The encoded point
    pub fn as_bytes(&self) -> &[u8; BYTES] {
        &self.0
    }

    /// True for the all-zero encoding, a low-order point
    pub fn is_all_zero(&self) -> bool {
        ct_is_zero(&self.0).into()
    }
}

impl From<[u8; BYTES]> for PublicPoint {
    fn from(bytes: [u8; BYTES]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for PublicPoint {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for PublicPoint {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for PublicPoint {}

impl fmt::Debug for PublicPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicPoint({})", self.to_hex())
    }
}

/// Shared secret held in a guarded buffer
///
/// Feed it through a key-derivation function before use. Equality is
/// constant-time.
pub struct SharedSecret {
    buf: GuardedBuffer,
}

impl SharedSecret {
    pub(crate) fn compute(
        scalar: &Scalar,
        point: &[u8; BYTES],
        policy: LockPolicy,
    ) -> Result<Self> {
        let mut out = engine::scalar_mult(scalar, point);
        let out = ZeroizeGuard::new(&mut out);
        Ok(Self {
            buf: GuardedBuffer::from_slice(&out[..], policy)?,
        })
    }

    pub(crate) fn from_buffer(buf: GuardedBuffer) -> Self {
        Self { buf }
    }

    /// The 32 shared-secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// True when the peer point had low order and the result is all zeroes
    ///
    /// The check reads every byte regardless of the contents.
    pub fn is_all_zero(&self) -> bool {
        ct_is_zero(self.buf.as_slice()).into()
    }

    /// Whether the backing region is locked against swapping
    pub fn is_locked(&self) -> bool {
        self.buf.is_locked()
    }

    /// Copy the secret into a freshly acquired guarded region
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            buf: self.buf.try_clone()?,
        })
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.buf.as_slice()
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.buf.as_slice().secure_eq(&other.buf.as_slice())
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret([REDACTED])")
    }
}
