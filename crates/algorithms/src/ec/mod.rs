//! Elliptic Curve Primitives
//!
//! This module provides a constant-time implementation of the Montgomery
//! form of Curve25519, the curve behind the X25519 Diffie-Hellman function
//! (RFC 7748). It is the foundation for the key-exchange surface exposed by
//! the `curvelock` facade.

pub mod x25519;

// Re-export types with consistent naming scheme.
pub use x25519::{FieldElement as X25519FieldElement, Scalar as X25519Scalar};
