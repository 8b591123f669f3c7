//! RFC 7748 known-answer vectors, loaded from JSON

use once_cell::sync::Lazy;
use serde::Deserialize;

const RFC7748_JSON: &str = include_str!("rfc7748.json");

/// Failure to read the bundled vectors
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    /// The JSON did not match the expected layout
    #[error("failed to parse test vectors: {0}")]
    Parse(#[from] serde_json::Error),

    /// A hex field could not be decoded to 32 bytes
    #[error("field {field} is not 32 bytes of hex: {reason}")]
    Hex {
        field: &'static str,
        reason: String,
    },
}

/// One `X25519(scalar, u) = output` vector
#[derive(Debug, Clone, Deserialize)]
pub struct ScalarMultVector {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    #[serde(default)]
    pub comment: Option<String>,
    pub scalar: String,
    pub u: String,
    pub output: String,
}

/// Result of feeding each output back as the next scalar, starting at k = u = 9
#[derive(Debug, Clone, Deserialize)]
pub struct IteratedVector {
    pub iterations: usize,
    pub output: String,
}

/// Full Diffie-Hellman exchange between two parties
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhVector {
    pub alice_secret: String,
    pub alice_public: String,
    pub bob_secret: String,
    pub bob_public: String,
    pub shared: String,
}

/// Every vector from RFC 7748
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rfc7748Vectors {
    pub source: String,
    pub scalar_mult: Vec<ScalarMultVector>,
    pub iterated: Vec<IteratedVector>,
    pub diffie_hellman: DhVector,
}

/// Parse the bundled RFC 7748 vectors
pub fn load_rfc7748() -> Result<Rfc7748Vectors, VectorError> {
    Ok(serde_json::from_str(RFC7748_JSON)?)
}

static RFC7748: Lazy<Result<Rfc7748Vectors, String>> =
    Lazy::new(|| load_rfc7748().map_err(|e| e.to_string()));

/// Cached copy of the RFC 7748 vectors
pub fn rfc7748() -> Result<&'static Rfc7748Vectors, String> {
    RFC7748.as_ref().map_err(Clone::clone)
}

/// Decode a 64-digit hex string into 32 bytes
pub fn bytes32(field: &'static str, hex_str: &str) -> Result<[u8; 32], VectorError> {
    let mut out = [0u8; 32];
    hex::decode_to_slice(hex_str, &mut out).map_err(|e| VectorError::Hex {
        field,
        reason: e.to_string(),
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_parse() {
        let v = rfc7748().unwrap();
        assert_eq!(v.source, "RFC 7748");
        assert_eq!(v.scalar_mult.len(), 2);
        assert_eq!(v.iterated.len(), 2);
        assert!(bytes32("shared", &v.diffie_hellman.shared).is_ok());
    }

    #[test]
    fn test_bad_hex_is_reported() {
        let err = bytes32("u", "abc").unwrap_err();
        assert!(err.to_string().starts_with("field u is not 32 bytes of hex"));
    }
}
