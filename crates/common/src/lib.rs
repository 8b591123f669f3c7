//! Guarded memory and shared security containers for the curvelock library
//!
//! Secret scalars and shared secrets live in a [`GuardedBuffer`]: a heap
//! region that is zero-filled on release and, where the platform allows it,
//! locked against swapping and excluded from core dumps.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};

#[cfg(feature = "std")]
pub use security::guarded::{GuardedBuffer, LockError, LockPolicy};

// Re-export memory safety traits and utilities
pub use security::memory::{barrier, SecureCompare};
