//! Signed license entity.
//!
//! A [`License`] is an opaque payload plus an optional ECDSA signature over
//! the SHA-256 digest of that payload. The payload's meaning belongs to the
//! caller; this module only hashes, signs, verifies and encodes it.

use crate::crypto::digest::{digest_hex, license_digest, LicenseDigest};
use crate::crypto::signing::{LicenseSignature, SignDigest};
use crate::crypto::verify::VerifyDigest;
use crate::encoding::{decode_be_hex, Encodable};
use crate::protocol::models::LicenseRecord;
use crate::LkError;
use p256::elliptic_curve::rand_core::{CryptoRngCore, OsRng};
use tracing::debug;

/// License payload with its signature, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    data: Vec<u8>,
    signature: Option<LicenseSignature>,
}

impl License {
    /// Create an unsigned license. Sign it before handing it out.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            signature: None,
        }
    }

    /// The license payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Replace the payload. Any existing signature stops verifying.
    pub fn set_data(&mut self, data: impl Into<Vec<u8>>) {
        self.data = data.into();
    }

    /// Mutable access to the payload. Any existing signature stops verifying
    /// once the bytes change.
    pub fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Signature components, if the license has been signed.
    pub fn signature(&self) -> Option<&LicenseSignature> {
        self.signature.as_ref()
    }

    /// Signature `R`, big-endian.
    pub fn r(&self) -> Option<&[u8; 32]> {
        self.signature.as_ref().map(LicenseSignature::r)
    }

    /// Signature `S`, big-endian.
    pub fn s(&self) -> Option<&[u8; 32]> {
        self.signature.as_ref().map(LicenseSignature::s)
    }

    /// True once both `R` and `S` are set.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }

    /// Digest of the payload; the exact quantity signed and verified.
    pub fn hash(&self) -> LicenseDigest {
        license_digest(&self.data)
    }

    /// Sign the payload in place with the operating system's secure RNG.
    ///
    /// On error the license keeps whatever signature it had before.
    pub fn sign(&mut self, key: &impl SignDigest) -> Result<(), LkError> {
        self.sign_with_rng(key, &mut OsRng)
    }

    /// Sign the payload in place, drawing nonce randomness from `rng`.
    pub fn sign_with_rng<R: CryptoRngCore>(
        &mut self,
        key: &impl SignDigest,
        rng: &mut R,
    ) -> Result<(), LkError> {
        let digest = self.hash();
        let signature = key.sign_digest_with_rng(rng, &digest)?;
        debug!(digest = %digest_hex(&digest), "license signed");
        self.signature = Some(signature);
        Ok(())
    }

    /// Consume the license and return it signed.
    pub fn signed(mut self, key: &impl SignDigest) -> Result<Self, LkError> {
        self.sign(key)?;
        Ok(self)
    }

    /// Check the signature against `key`.
    ///
    /// Returns `false` for an unsigned license, a different key, or a payload
    /// or signature altered after signing.
    pub fn verify(&self, key: &impl VerifyDigest) -> bool {
        let Some(signature) = &self.signature else {
            debug!("license has no signature");
            return false;
        };

        let digest = self.hash();
        let valid = key.verify_digest(&digest, signature);
        debug!(digest = %digest_hex(&digest), valid, "license verified");
        valid
    }
}

impl Encodable for License {
    type Record = LicenseRecord;

    fn to_record(&self) -> LicenseRecord {
        LicenseRecord {
            data: self.data.clone(),
            r: self.r().map(hex::encode),
            s: self.s().map(hex::encode),
        }
    }

    fn from_record(record: LicenseRecord) -> Result<Self, LkError> {
        let signature = match (record.r, record.s) {
            (None, None) => None,
            (Some(r), Some(s)) => Some(LicenseSignature::from_components(
                decode_be_hex("r", &r)?,
                decode_be_hex("s", &s)?,
            )),
            _ => {
                return Err(LkError::EncodingError(
                    "License record has only one of `r` and `s`".to_string(),
                ))
            }
        };

        Ok(Self {
            data: record.data,
            signature,
        })
    }
}
