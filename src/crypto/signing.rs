//! ECDSA signing over license digests.
//!
//! Signatures are produced over the SHA-256 prehash with fresh randomness
//! mixed into the nonce derivation, and kept as the raw `(R, S)` pair:
//! two 32-byte big-endian integers, not DER.

use crate::crypto::digest::LicenseDigest;
use crate::crypto::keys::PrivateKey;
use crate::LkError;
use p256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use p256::ecdsa::Signature;
use p256::elliptic_curve::rand_core::{CryptoRngCore, OsRng};

/// Raw ECDSA signature components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LicenseSignature {
    r: [u8; 32],
    s: [u8; 32],
}

impl LicenseSignature {
    /// Build from big-endian `R` and `S`. No range check happens here;
    /// out-of-range values simply never verify.
    pub fn from_components(r: [u8; 32], s: [u8; 32]) -> Self {
        Self { r, s }
    }

    /// `R`, big-endian.
    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    /// `S`, big-endian.
    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// Convert to the native signature type.
    ///
    /// Fails when either component is zero or not below the group order.
    pub fn to_ecdsa(&self) -> Result<Signature, LkError> {
        let mut raw = [0u8; 64];
        raw[..32].copy_from_slice(&self.r);
        raw[32..].copy_from_slice(&self.s);
        Signature::from_slice(&raw)
            .map_err(|e| LkError::EncodingError(format!("Invalid signature scalars: {}", e)))
    }
}

impl From<Signature> for LicenseSignature {
    fn from(signature: Signature) -> Self {
        let (r_bytes, s_bytes) = signature.split_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&r_bytes);
        s.copy_from_slice(&s_bytes);
        Self { r, s }
    }
}

/// Capability to sign a license digest.
pub trait SignDigest {
    /// Sign `digest`, drawing nonce randomness from `rng`.
    fn sign_digest_with_rng<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        digest: &LicenseDigest,
    ) -> Result<LicenseSignature, LkError>;

    /// Sign `digest` with the operating system's secure RNG.
    fn sign_digest(&self, digest: &LicenseDigest) -> Result<LicenseSignature, LkError> {
        self.sign_digest_with_rng(&mut OsRng, digest)
    }
}

impl SignDigest for PrivateKey {
    fn sign_digest_with_rng<R: CryptoRngCore>(
        &self,
        rng: &mut R,
        digest: &LicenseDigest,
    ) -> Result<LicenseSignature, LkError> {
        // The signer itself panics on RNG failure; check the source first.
        let mut scratch = [0u8; 32];
        rng.try_fill_bytes(&mut scratch)
            .map_err(|e| LkError::SigningError(format!("Randomness unavailable: {}", e)))?;

        let signature: Signature = self
            .signing_key()
            .sign_prehash_with_rng(rng, digest)
            .map_err(|e| LkError::SigningError(format!("ECDSA signing failed: {}", e)))?;

        Ok(LicenseSignature::from(signature))
    }
}
