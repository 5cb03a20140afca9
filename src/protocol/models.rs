//! Wire records for licenses and keys.
//!
//! These are the shapes actually written by the encoders in
//! [`crate::encoding`]. Domain types convert to and from them so that
//! validation of untrusted input happens in one place.

use crate::encoding::base64_bytes;
use serde::{Deserialize, Serialize};

/// Serialized license: payload plus optional signature integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseRecord {
    /// License payload, standard base64.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,

    /// Signature `R`, big-endian hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,

    /// Signature `S`, big-endian hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,
}

/// Serialized private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrivateKeyRecord {
    /// Curve tag, see [`crate::config::CURVE_NAME`].
    pub curve: String,

    /// Secret scalar, big-endian hex.
    pub d: String,
}

/// Serialized public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PublicKeyRecord {
    /// Curve tag, see [`crate::config::CURVE_NAME`].
    pub curve: String,

    /// SEC1 compressed point, hex.
    pub point: String,
}
