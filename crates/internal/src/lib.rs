//! Internal utilities for the curvelock library
//!
//! Nothing in this crate is part of the stable public API. It exists so the
//! engine, the security containers and the facade share one set of
//! constant-time helpers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
