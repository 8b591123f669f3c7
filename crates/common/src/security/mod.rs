//! Security primitives and memory safety utilities
//!
//! This module provides the types used throughout curvelock to ensure proper
//! handling of sensitive cryptographic material.

#[cfg(feature = "std")]
pub mod guarded;
pub mod memory;
pub mod secret;

// Re-export core security types
pub use secret::{SecretBuffer, ZeroizeGuard};

#[cfg(feature = "std")]
pub use guarded::{GuardedBuffer, LockError, LockPolicy};

// Re-export memory safety traits and utilities
pub use memory::{barrier, SecureCompare};
