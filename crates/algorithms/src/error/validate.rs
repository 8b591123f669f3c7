//! Validation utilities for Curve25519 primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a slice length and copy it into a fixed-size array
#[inline]
pub fn array<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    length(context, bytes.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
