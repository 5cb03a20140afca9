//! Issuer and verifier façade (main public API).
//!
//! [`LicenseIssuer`] turns payloads into signed base64 tokens.
//! [`LicenseVerifier`] is the fail-closed counterpart: a token that is
//! oversized, malformed, unsigned or not signed by the configured key is
//! rejected with an error instead of a `false`.

use crate::config::LicenseConfig;
use crate::crypto::keys::{PrivateKey, PublicKey};
use crate::encoding::Encodable;
use crate::license::License;
use crate::LkError;
use tracing::{debug, warn};

/// Signs license payloads with one private key.
#[derive(Debug, Clone)]
pub struct LicenseIssuer {
    private_key: PrivateKey,
}

impl LicenseIssuer {
    /// Create an issuer for `private_key`.
    pub fn new(private_key: PrivateKey) -> Self {
        Self { private_key }
    }

    /// Build and sign a license over `data`.
    pub fn issue(&self, data: impl Into<Vec<u8>>) -> Result<License, LkError> {
        let license = License::new(data).signed(&self.private_key)?;
        debug!(len = license.data().len(), "license issued");
        Ok(license)
    }

    /// Build, sign and base64-encode a license over `data`.
    pub fn issue_b64(&self, data: impl Into<Vec<u8>>) -> Result<String, LkError> {
        self.issue(data)?.to_b64_string()
    }

    /// Public key that verifies this issuer's licenses.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }
}

/// A license whose signature has been checked against the configured key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedLicense {
    license: License,
}

impl VerifiedLicense {
    /// The authenticated payload.
    pub fn data(&self) -> &[u8] {
        self.license.data()
    }

    /// Unwrap the verified license.
    pub fn into_license(self) -> License {
        self.license
    }
}

/// Verifies license tokens against one public key.
#[derive(Debug, Clone)]
pub struct LicenseVerifier {
    config: LicenseConfig,
    public_key: PublicKey,
}

impl LicenseVerifier {
    /// Create a verifier from configuration.
    ///
    /// # Errors
    /// - `ConfigError` - Configuration failed validation
    /// - `EncodingError` / `KeyError` - `public_key_b64` is not a valid public key
    pub fn new(config: LicenseConfig) -> Result<Self, LkError> {
        config.validate()?;
        let public_key = PublicKey::from_b64_string(config.public_key_b64.trim())?;
        Ok(Self { config, public_key })
    }

    /// Decode a base64 token and verify it.
    ///
    /// # Errors
    /// - `EncodingError` - Token is too long or malformed
    /// - `SignatureMissing` - License carries no signature
    /// - `SignatureInvalid` - Signature does not match the configured key
    pub fn verify_b64(&self, token: &str) -> Result<VerifiedLicense, LkError> {
        let token = token.trim();
        if token.len() > self.config.max_token_len {
            warn!(
                len = token.len(),
                max = self.config.max_token_len,
                "license token rejected: too long"
            );
            return Err(LkError::EncodingError(format!(
                "Token is {} bytes, limit is {}",
                token.len(),
                self.config.max_token_len
            )));
        }

        let license = License::from_b64_string(token)?;
        self.verify_license(license)
    }

    /// Verify an already decoded license.
    ///
    /// # Errors
    /// - `SignatureMissing` - License carries no signature
    /// - `SignatureInvalid` - Signature does not match the configured key
    pub fn verify_license(&self, license: License) -> Result<VerifiedLicense, LkError> {
        if !license.is_signed() {
            warn!("license rejected: unsigned");
            return Err(LkError::SignatureMissing);
        }

        if !license.verify(&self.public_key) {
            warn!("license rejected: signature mismatch");
            return Err(LkError::SignatureInvalid);
        }

        Ok(VerifiedLicense { license })
    }

    /// The configured public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the current configuration.
    pub fn config(&self) -> &LicenseConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};

    fn test_pair() -> (LicenseIssuer, LicenseVerifier) {
        let issuer = LicenseIssuer::new(PrivateKey::generate());
        let config = LicenseConfig::new(issuer.public_key().to_b64_string().unwrap());
        let verifier = LicenseVerifier::new(config).unwrap();
        (issuer, verifier)
    }

    #[test]
    fn test_verifier_creation() {
        let (issuer, verifier) = test_pair();
        assert_eq!(verifier.public_key(), &issuer.public_key());
    }

    #[test]
    fn test_verifier_rejects_bad_config() {
        let result = LicenseVerifier::new(LicenseConfig::new(""));
        assert!(matches!(result, Err(LkError::ConfigError(_))));
    }

    #[test]
    fn test_verifier_rejects_bad_public_key() {
        let result = LicenseVerifier::new(LicenseConfig::new("bm90IGEga2V5"));
        assert!(matches!(result, Err(LkError::EncodingError(_))));
    }

    #[test]
    fn test_issue_then_verify() {
        let (issuer, verifier) = test_pair();
        let token = issuer.issue_b64(b"tier:pro".to_vec()).unwrap();
        let verified = verifier.verify_b64(&token).unwrap();
        assert_eq!(verified.data(), b"tier:pro");
        assert!(verified.into_license().is_signed());
    }

    #[test]
    fn test_token_whitespace_trimmed() {
        let (issuer, verifier) = test_pair();
        let token = issuer.issue_b64(b"tier:pro".to_vec()).unwrap();
        assert!(verifier.verify_b64(&format!("  {}\n", token)).is_ok());
    }

    #[test]
    fn test_config_key_whitespace_trimmed() {
        let issuer = LicenseIssuer::new(PrivateKey::generate());
        let config = LicenseConfig::new(format!(
            "{}\n",
            issuer.public_key().to_b64_string().unwrap()
        ));
        let verifier = LicenseVerifier::new(config).unwrap();
        assert_eq!(verifier.public_key(), &issuer.public_key());
    }

    #[test]
    fn test_unsigned_token_rejected() {
        let (_, verifier) = test_pair();
        let token = License::new(b"tier:pro".to_vec()).to_b64_string().unwrap();
        let result = verifier.verify_b64(&token);
        assert!(matches!(result, Err(LkError::SignatureMissing)));
    }

    #[test]
    fn test_foreign_issuer_rejected() {
        let (_, verifier) = test_pair();
        let foreign = LicenseIssuer::new(PrivateKey::generate());
        let token = foreign.issue_b64(b"tier:pro".to_vec()).unwrap();
        let result = verifier.verify_b64(&token);
        assert!(matches!(result, Err(LkError::SignatureInvalid)));
    }

    #[test]
    fn test_tampered_license_rejected() {
        let (issuer, verifier) = test_pair();
        let mut license = issuer.issue(b"tier:pro".to_vec()).unwrap();
        license.set_data(b"tier:max".to_vec());
        let result = verifier.verify_license(license);
        assert!(matches!(result, Err(LkError::SignatureInvalid)));
    }

    #[test]
    fn test_oversized_token_rejected() {
        let (issuer, _) = test_pair();
        let config = LicenseConfig {
            public_key_b64: issuer.public_key().to_b64_string().unwrap(),
            max_token_len: 16,
        };
        let verifier = LicenseVerifier::new(config).unwrap();
        let token = issuer.issue_b64(b"tier:pro".to_vec()).unwrap();
        let result = verifier.verify_b64(&token);
        assert!(matches!(result, Err(LkError::EncodingError(_))));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let (_, verifier) = test_pair();
        let result = verifier.verify_b64(&STANDARD.encode(b"{}"));
        assert!(matches!(result, Err(LkError::EncodingError(_))));
    }

    #[test]
    fn test_config_accessor() {
        let (_, verifier) = test_pair();
        assert_eq!(verifier.config().max_token_len, crate::config::DEFAULT_MAX_TOKEN_LEN);
    }
}
