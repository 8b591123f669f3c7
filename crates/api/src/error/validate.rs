//! Validation utilities for public inputs

use super::types::{Error, Result};

/// Validate that a key buffer has exactly the expected length
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Copy a slice into a fixed-size array after checking its length
#[inline]
pub fn fixed_bytes<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    key_length(context, bytes.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
