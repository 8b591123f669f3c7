//! Parameters for classical (pre-quantum) key exchange

pub mod ecdh;
