//! ECDSA verification of license digests.

use crate::crypto::digest::LicenseDigest;
use crate::crypto::keys::PublicKey;
use crate::crypto::signing::LicenseSignature;
use p256::ecdsa::signature::hazmat::PrehashVerifier;

/// Capability to check a signature over a license digest.
///
/// A mismatch of any kind is `false`; implementations never error.
pub trait VerifyDigest {
    /// True iff `signature` is valid for `digest` under this key.
    fn verify_digest(&self, digest: &LicenseDigest, signature: &LicenseSignature) -> bool;
}

impl VerifyDigest for PublicKey {
    fn verify_digest(&self, digest: &LicenseDigest, signature: &LicenseSignature) -> bool {
        // Zero or out-of-range components cannot form a signature.
        let Ok(signature) = signature.to_ecdsa() else {
            return false;
        };

        self.verifying_key()
            .verify_prehash(digest, &signature)
            .is_ok()
    }
}
