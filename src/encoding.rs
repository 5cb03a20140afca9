//! Generic encode/decode helpers shared by licenses and keys.
//!
//! Every entity serializes to a compact JSON record (the binary form). The
//! text forms wrap those bytes in standard padded base64 or lowercase hex.

use crate::LkError;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};

/// Serialize a value to its binary record form.
pub fn to_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, LkError> {
    serde_json::to_vec(value)
        .map_err(|e| LkError::EncodingError(format!("Failed to serialize record: {}", e)))
}

/// Deserialize a value from its binary record form.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, LkError> {
    serde_json::from_slice(bytes)
        .map_err(|e| LkError::EncodingError(format!("Failed to deserialize record: {}", e)))
}

/// Serialize a value and wrap it in standard base64.
pub fn to_b64_string<T: Serialize>(value: &T) -> Result<String, LkError> {
    Ok(STANDARD.encode(to_bytes(value)?))
}

/// Decode standard base64 and deserialize the record inside.
///
/// Strict: surrounding whitespace is not stripped.
pub fn from_b64_string<T: DeserializeOwned>(s: &str) -> Result<T, LkError> {
    let bytes = STANDARD
        .decode(s)
        .map_err(|e| LkError::EncodingError(format!("Invalid base64: {}", e)))?;
    from_bytes(&bytes)
}

/// Serialize a value and render it as lowercase hex.
pub fn to_hex_string<T: Serialize>(value: &T) -> Result<String, LkError> {
    Ok(hex::encode(to_bytes(value)?))
}

/// Decode hex and deserialize the record inside.
///
/// Strict: surrounding whitespace is not stripped.
pub fn from_hex_string<T: DeserializeOwned>(s: &str) -> Result<T, LkError> {
    let bytes = hex::decode(s)
        .map_err(|e| LkError::EncodingError(format!("Invalid hex: {}", e)))?;
    from_bytes(&bytes)
}

/// An entity with a serde wire record, encodable through the shared helpers.
///
/// `from_record` is where untrusted input is validated, so the decoders
/// never hand back a value the domain type could not have produced itself.
pub trait Encodable: Sized {
    /// Wire shape written by the encoders.
    type Record: Serialize + DeserializeOwned;

    /// Build the wire record for this value.
    fn to_record(&self) -> Self::Record;

    /// Validate a decoded wire record and build the value.
    fn from_record(record: Self::Record) -> Result<Self, LkError>;

    /// Binary form.
    fn to_bytes(&self) -> Result<Vec<u8>, LkError> {
        to_bytes(&self.to_record())
    }

    /// Parse the binary form.
    fn from_bytes(bytes: &[u8]) -> Result<Self, LkError> {
        Self::from_record(from_bytes(bytes)?)
    }

    /// Standard padded base64 of the binary form.
    fn to_b64_string(&self) -> Result<String, LkError> {
        to_b64_string(&self.to_record())
    }

    /// Parse standard base64 text. Whitespace around the token is rejected;
    /// trim text read from files before calling this.
    fn from_b64_string(s: &str) -> Result<Self, LkError> {
        Self::from_record(from_b64_string(s)?)
    }

    /// Lowercase hex of the binary form.
    fn to_hex_string(&self) -> Result<String, LkError> {
        to_hex_string(&self.to_record())
    }

    /// Parse hex text. Whitespace around the token is rejected.
    fn from_hex_string(s: &str) -> Result<Self, LkError> {
        Self::from_record(from_hex_string(s)?)
    }
}

/// Decode a big-endian unsigned integer from hex into a fixed-width buffer.
///
/// Leading zero bytes may be omitted by the encoder; the value is left-padded.
pub(crate) fn decode_be_hex<const N: usize>(field: &str, s: &str) -> Result<[u8; N], LkError> {
    let bytes = hex::decode(s)
        .map_err(|e| LkError::EncodingError(format!("Invalid hex in `{}`: {}", field, e)))?;
    if bytes.len() > N {
        return Err(LkError::EncodingError(format!(
            "`{}` is {} bytes, expected at most {}",
            field,
            bytes.len(),
            N
        )));
    }
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(&bytes);
    Ok(out)
}

/// Serde adapter storing byte fields as standard base64 strings.
pub(crate) mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        STANDARD.decode(s).map_err(serde::de::Error::custom)
    }
}
