//! SHA-256 digest computation.

use sha2::{Digest, Sha256};

/// Size in bytes of a [`LicenseDigest`].
pub const DIGEST_LEN: usize = 32;

/// The quantity actually signed: SHA-256 of the license payload.
pub type LicenseDigest = [u8; DIGEST_LEN];

/// Compute the SHA-256 digest of a license payload.
///
/// No salt, nonce or framing is mixed in, so signing and verification
/// always agree on the digest for the same bytes.
pub fn license_digest(data: &[u8]) -> LicenseDigest {
    Sha256::digest(data).into()
}

/// Lowercase hex rendering of a digest, for log fields.
pub fn digest_hex(digest: &LicenseDigest) -> String {
    hex::encode(digest)
}
