//! Error handling for Curve25519 primitives

#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

use curvelock_api::{Error as CoreError, Result as CoreResult, ResultExt};

/// The error type for Curve25519 primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The random number generator failed to produce output
    RandomSource {
        /// Operation that requested randomness
        context: &'static str,
        /// Error reported by the generator
        #[cfg(feature = "std")]
        details: String,
    },
}

impl Error {
    /// Wrap an RNG failure
    pub fn random_source(context: &'static str, err: rand::Error) -> Self {
        #[cfg(not(feature = "std"))]
        let _ = err;
        Error::RandomSource {
            context,
            #[cfg(feature = "std")]
            details: err.to_string(),
        }
    }
}

/// Result type for Curve25519 primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Error::RandomSource { context, details } => {
                write!(f, "Random source failed in {}: {}", context, details)
            },
            #[cfg(not(feature = "std"))]
            Error::RandomSource { context } => {
                write!(f, "Random source failed in {}", context)
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length { context, expected, actual } => CoreError::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Error::RandomSource { context, details } => CoreError::RandomSourceUnavailable {
                context,
                message: details,
            },
            #[cfg(not(feature = "std"))]
            Error::RandomSource { context } => CoreError::RandomSourceUnavailable { context },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.with_context(ctx)
}

// Include the validation submodule
pub mod validate;
