//! P-256 key pair used to sign and verify licenses.
//!
//! The curve is fixed crate-wide ([`CURVE_NAME`]). Encoded keys carry the
//! curve tag and decoding rejects any other curve.

use crate::config::CURVE_NAME;
use crate::encoding::{decode_be_hex, Encodable};
use crate::protocol::models::{PrivateKeyRecord, PublicKeyRecord};
use crate::LkError;
use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::elliptic_curve::rand_core::{CryptoRngCore, OsRng};
use std::fmt;

/// Secret signing key.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a fresh key from the operating system's secure RNG.
    ///
    /// # Panics
    /// If the OS randomness source fails. Use [`PrivateKey::try_generate`]
    /// to get an error instead.
    pub fn generate() -> Self {
        Self {
            inner: SigningKey::random(&mut OsRng),
        }
    }

    /// Generate a fresh key from the operating system's secure RNG.
    pub fn try_generate() -> Result<Self, LkError> {
        Self::try_generate_with_rng(&mut OsRng)
    }

    /// Generate a fresh key from `rng`, failing with `KeyError` when the
    /// source cannot produce bytes.
    pub fn try_generate_with_rng<R: CryptoRngCore>(rng: &mut R) -> Result<Self, LkError> {
        // SigningKey::random panics on RNG failure.
        let mut scratch = [0u8; 32];
        rng.try_fill_bytes(&mut scratch)
            .map_err(|e| LkError::KeyError(format!("Randomness unavailable: {}", e)))?;

        Ok(Self {
            inner: SigningKey::random(rng),
        })
    }

    /// Build a key from a big-endian 32-byte secret scalar.
    pub fn from_scalar_bytes(bytes: &[u8]) -> Result<Self, LkError> {
        let inner = SigningKey::from_slice(bytes)
            .map_err(|e| LkError::KeyError(format!("Invalid P-256 secret scalar: {}", e)))?;
        Ok(Self { inner })
    }

    /// Big-endian secret scalar.
    pub fn to_scalar_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// The matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: VerifyingKey::from(&self.inner),
        }
    }

    /// Native ECDSA signing key.
    pub fn to_signing_key(&self) -> SigningKey {
        self.inner.clone()
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.inner
    }
}

impl From<SigningKey> for PrivateKey {
    fn from(inner: SigningKey) -> Self {
        Self { inner }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &CURVE_NAME)
            .finish_non_exhaustive()
    }
}

impl Encodable for PrivateKey {
    type Record = PrivateKeyRecord;

    fn to_record(&self) -> PrivateKeyRecord {
        PrivateKeyRecord {
            curve: CURVE_NAME.to_string(),
            d: hex::encode(self.to_scalar_bytes()),
        }
    }

    fn from_record(record: PrivateKeyRecord) -> Result<Self, LkError> {
        check_curve(&record.curve)?;
        let scalar: [u8; 32] = decode_be_hex("d", &record.d)?;
        Self::from_scalar_bytes(&scalar)
    }
}

/// Public verification key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a SEC1-encoded point (compressed or uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, LkError> {
        let inner = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| LkError::KeyError(format!("Invalid P-256 public point: {}", e)))?;
        Ok(Self { inner })
    }

    /// SEC1 compressed point (33 bytes).
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.inner.to_encoded_point(true).as_bytes().to_vec()
    }

    /// Native ECDSA verifying key.
    pub fn to_verifying_key(&self) -> VerifyingKey {
        self.inner.clone()
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.inner
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(inner: VerifyingKey) -> Self {
        Self { inner }
    }
}

impl Encodable for PublicKey {
    type Record = PublicKeyRecord;

    fn to_record(&self) -> PublicKeyRecord {
        PublicKeyRecord {
            curve: CURVE_NAME.to_string(),
            point: hex::encode(self.to_sec1_bytes()),
        }
    }

    fn from_record(record: PublicKeyRecord) -> Result<Self, LkError> {
        check_curve(&record.curve)?;
        let point = hex::decode(&record.point)
            .map_err(|e| LkError::EncodingError(format!("Invalid hex in `point`: {}", e)))?;
        Self::from_sec1_bytes(&point)
    }
}

fn check_curve(curve: &str) -> Result<(), LkError> {
    if curve != CURVE_NAME {
        return Err(LkError::KeyError(format!(
            "Unsupported curve: {} (expected {})",
            curve, CURVE_NAME
        )));
    }
    Ok(())
}
