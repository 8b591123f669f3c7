//! Curve25519 primitives with constant-time implementation
//!
//! This crate provides the arithmetic behind X25519: field operations
//! modulo 2^255 - 19, scalar clamping and the Montgomery ladder. Nothing in
//! the ladder branches on or indexes memory by secret data.
//!
//! The library is usable in both `std` and `no_std` environments; `std`
//! only adds `std::error::Error` and OS-backed randomness downstream.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic Curve primitives
pub mod ec;
pub use ec::{x25519, X25519FieldElement, X25519Scalar};
