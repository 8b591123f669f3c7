//! Error type definitions for key-exchange operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for curvelock operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scalar, point or key buffer did not have the required length
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The entropy source could not supply randomness
    RandomSourceUnavailable {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A guarded region could not be locked and the caller asked for strict locking
    MemoryLock {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid parameter error (malformed encodings and the like)
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for curvelock operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength { expected, actual, .. } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            #[cfg(feature = "std")]
            Self::RandomSourceUnavailable { message, .. } => {
                Self::RandomSourceUnavailable { context, message }
            }
            #[cfg(not(feature = "std"))]
            Self::RandomSourceUnavailable { .. } => Self::RandomSourceUnavailable { context },
            #[cfg(feature = "std")]
            Self::MemoryLock { message, .. } => Self::MemoryLock { context, message },
            #[cfg(not(feature = "std"))]
            Self::MemoryLock { .. } => Self::MemoryLock { context },
            #[cfg(feature = "std")]
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
        }
    }

    /// The static context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKeyLength { context, .. }
            | Self::RandomSourceUnavailable { context, .. }
            | Self::MemoryLock { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }

    /// True for wrong-length scalar or point input
    pub fn is_invalid_key_length(&self) -> bool {
        matches!(self, Self::InvalidKeyLength { .. })
    }

    /// True when the entropy source failed
    pub fn is_random_source_unavailable(&self) -> bool {
        matches!(self, Self::RandomSourceUnavailable { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKeyLength { context, expected, actual } => {
                write!(f, "{}: invalid key length (expected {}, got {})",
                    context, expected, actual)
            },
            #[cfg(feature = "std")]
            Self::RandomSourceUnavailable { context, message } => {
                write!(f, "Random source unavailable: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::RandomSourceUnavailable { context } => {
                write!(f, "Random source unavailable: {}", context)
            },
            #[cfg(feature = "std")]
            Self::MemoryLock { context, message } => {
                write!(f, "Memory lock failed: {}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::MemoryLock { context } => {
                write!(f, "Memory lock failed: {}", context)
            },
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            #[cfg(not(feature = "std"))]
            Self::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            },
        }
    }
}
