//! Error handling for the curvelock ecosystem

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use traits::ResultExt;
pub use types::{Error, Result};

// Re-export validation utilities module
pub use validate as validation;

#[cfg(feature = "std")]
impl std::error::Error for Error {}
