//! lk configuration.

use crate::LkError;

/// Name of the elliptic curve shared by every key and signature.
///
/// Key records carry this tag and are rejected when it differs.
pub const CURVE_NAME: &str = "P-256";

/// Default upper bound on the length of an encoded license token.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 64 * 1024;

/// Configuration for verifying licenses issued by one signer.
#[derive(Debug, Clone)]
pub struct LicenseConfig {
    /// Issuer public key, as produced by `PublicKey::to_b64_string`.
    /// SECURITY: This should be embedded in your application, not read from the environment.
    pub public_key_b64: String,

    /// Longest base64 token accepted before decoding is attempted.
    pub max_token_len: usize,
}

impl LicenseConfig {
    /// Create a configuration with the default token length limit.
    pub fn new(public_key_b64: impl Into<String>) -> Self {
        Self {
            public_key_b64: public_key_b64.into(),
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }

    /// Validate configuration for obvious errors.
    pub fn validate(&self) -> Result<(), LkError> {
        if self.public_key_b64.trim().is_empty() {
            return Err(LkError::ConfigError(
                "public_key_b64 cannot be empty".to_string(),
            ));
        }
        if self.max_token_len == 0 {
            return Err(LkError::ConfigError(
                "max_token_len must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
