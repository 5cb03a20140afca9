//! lk error types.

use thiserror::Error;

/// Errors that can occur while signing, encoding or checking licenses.
///
/// A signature that does not match is not an error: [`crate::License::verify`]
/// reports it as `false`. Only the fail-closed [`crate::LicenseVerifier`]
/// turns it into [`LkError::SignatureInvalid`].
#[derive(Debug, Error)]
pub enum LkError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Key material is invalid or belongs to another curve.
    #[error("Invalid key: {0}")]
    KeyError(String),

    /// Signature generation failed (randomness unavailable or key rejected).
    #[error("Signing failed: {0}")]
    SigningError(String),

    /// Bytes, base64 or hex input is malformed or truncated.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// License carries no signature (fail-closed).
    #[error("License is not signed")]
    SignatureMissing,

    /// License signature does not match its data and the configured key.
    #[error("License signature verification failed")]
    SignatureInvalid,
}
