//! # curvelock
//!
//! X25519 Diffie-Hellman over Curve25519 with constant-time arithmetic and
//! guarded, zero-on-release memory for secret key material.
//!
//! ## Usage
//!
//! ```rust
//! use curvelock::scalarmult;
//!
//! let alice = scalarmult::keygen()?;
//! let bob = scalarmult::keygen()?;
//!
//! let alice_public = scalarmult::base(&alice)?;
//! let bob_public = scalarmult::base(&bob)?;
//!
//! let k1 = scalarmult::shared_secret(&alice, &bob_public)?;
//! let k2 = scalarmult::shared_secret(&bob, &alice_public)?;
//! assert_eq!(k1, k2);
//! # Ok::<(), curvelock::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): OS entropy, memory locking and the [`scalarmult`] module
//! - `serde`: `Serialize`/`Deserialize` for public points
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: error type and the `KeyExchange` trait
//! - [`common`]: guarded buffers and secret containers
//! - [`internal`]: constant-time helpers
//! - [`params`]: X25519 size constants
//! - [`algorithms`]: field arithmetic and the Montgomery ladder

#![cfg_attr(not(feature = "std"), no_std)]

pub use curvelock_algorithms as algorithms;
pub use curvelock_api as api;
pub use curvelock_common as common;
pub use curvelock_internal as internal;
pub use curvelock_params as params;

#[cfg(feature = "std")]
pub mod scalarmult;

/// Common imports for curvelock users
pub mod prelude {
    pub use crate::api::{Error, KeyExchange, Result, Serialize, SerializeSecret};

    pub use crate::common::{SecretBuffer, SecureCompare};

    #[cfg(feature = "std")]
    pub use crate::common::{GuardedBuffer, LockPolicy};

    #[cfg(feature = "std")]
    pub use crate::scalarmult::{
        Config, PublicPoint, SecretScalar, SharedSecret, X25519, BYTES, SCALARBYTES,
    };
}
