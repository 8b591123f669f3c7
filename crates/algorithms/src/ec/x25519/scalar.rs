//! X25519 scalar handling

use crate::ec::x25519::constants::X25519_SCALAR_SIZE;
use crate::error::{validate, Error, Result};
use curvelock_common::security::SecretBuffer;
use rand::{CryptoRng, RngCore};
use subtle::Choice;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Apply the RFC 7748 clamping rule in place
///
/// Clears the three low bits and bit 255, then sets bit 254. The result is
/// a multiple of the cofactor 8 whose top set bit is fixed, so the ladder
/// always runs the same number of steps.
#[inline]
pub fn clamp(bytes: &mut [u8; X25519_SCALAR_SIZE]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}

/// Clamped X25519 secret scalar
///
/// The bytes are held in a [`SecretBuffer`] and wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug)]
pub struct Scalar(SecretBuffer<X25519_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from raw bytes, clamping them
    pub fn from_bytes(mut bytes: [u8; X25519_SCALAR_SIZE]) -> Self {
        clamp(&mut bytes);
        let scalar = Scalar(SecretBuffer::new(bytes));
        bytes.zeroize();
        scalar
    }

    /// Create a scalar from a slice that must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut raw = validate::array::<X25519_SCALAR_SIZE>("X25519 scalar", bytes)?;
        let scalar = Self::from_bytes(raw);
        raw.zeroize();
        Ok(scalar)
    }

    /// Draw 32 bytes from `rng` and clamp them
    ///
    /// Fails with [`Error::RandomSource`] if the generator reports an error;
    /// no partially filled key is ever returned.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; X25519_SCALAR_SIZE];
        if let Err(err) = rng.try_fill_bytes(&mut bytes) {
            bytes.zeroize();
            return Err(Error::random_source("X25519 scalar generation", err));
        }
        let scalar = Self::from_bytes(bytes);
        bytes.zeroize();
        Ok(scalar)
    }

    /// The clamped scalar bytes
    pub fn as_bytes(&self) -> &[u8; X25519_SCALAR_SIZE] {
        self.0.as_array()
    }

    /// Bit `i` of the little-endian scalar
    #[inline(always)]
    pub(crate) fn bit(&self, i: usize) -> Choice {
        let byte = self.0.as_array()[i >> 3];
        Choice::from((byte >> (i & 7)) & 1)
    }
}

impl AsRef<[u8]> for Scalar {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
