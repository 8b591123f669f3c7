//! Public API traits and types for the curvelock library
//!
//! This crate provides the public API surface shared by every curvelock
//! crate: the error type, validation helpers and the trait definitions a
//! key-exchange primitive implements.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{KeyExchange, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{key_exchange, serialize};
