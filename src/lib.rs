//! # lk
//!
//! **ECDSA-signed license tokens for Rust.**
//!
//! A license is an opaque payload plus an ECDSA (P-256) signature over the
//! SHA-256 digest of that payload. Whoever holds the private key can issue
//! licenses; anyone with the public key can check them offline but cannot
//! forge new ones.
//!
//! ## Features
//!
//! - **Opaque payloads** — the license terms are your bytes, in your format
//! - **ECDSA P-256 over SHA-256** — raw `(R, S)` signature components
//! - **Portable encodings** — compact binary record, standard base64, hex
//! - **Mismatch is not an error** — [`License::verify`] answers `true`/`false`;
//!   errors mean the check could not be performed
//! - **Fail-closed façade** — [`LicenseVerifier`] rejects unsigned and
//!   mismatched tokens outright
//!
//! ## Quickstart
//!
//! ```
//! use lk::{Encodable, License, PrivateKey};
//!
//! fn main() -> Result<(), lk::LkError> {
//!     let private_key = PrivateKey::generate();
//!     let public_key = private_key.public_key();
//!
//!     let mut license = License::new(b"user:alice;tier:pro".to_vec());
//!     license.sign(&private_key)?;
//!     let token = license.to_b64_string()?;
//!
//!     let received = License::from_b64_string(&token)?;
//!     assert!(received.verify(&public_key));
//!     Ok(())
//! }
//! ```
//!
//! ## Threat Model
//!
//! lk protects against:
//! - **Forged licenses** — producing a valid signature requires the private key
//! - **Edited licenses** — changing any payload byte breaks the signature
//!
//! lk does **not** handle expiry, revocation or key distribution, and does
//! not prevent binary patching of the application doing the checking.
//!
//! See [`LicenseConfig`] for verifier configuration.

#![deny(warnings)]
#![deny(missing_docs)]

// Core modules
pub mod config;
pub mod errors;

// Crypto layer
pub mod crypto;

// Encoding layer
pub mod encoding;
pub mod protocol;

// License entity
pub mod license;

// Manager (issuer / verifier façade)
pub mod manager;

// Re-exports for public API
pub use config::{LicenseConfig, CURVE_NAME};
pub use crypto::digest::LicenseDigest;
pub use crypto::keys::{PrivateKey, PublicKey};
pub use crypto::signing::{LicenseSignature, SignDigest};
pub use crypto::verify::VerifyDigest;
pub use encoding::Encodable;
pub use errors::LkError;
pub use license::License;
pub use manager::{LicenseIssuer, LicenseVerifier, VerifiedLicense};
