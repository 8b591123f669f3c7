//! Trait definitions for curvelock primitives

pub mod key_exchange;
pub mod serialize;

pub use key_exchange::KeyExchange;
pub use serialize::{Serialize, SerializeSecret};
