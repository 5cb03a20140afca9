//! End-to-end issue/transmit/verify scenario.
//!
//! The issuer signs a license and hands out a base64 token; a separate
//! party that only knows the base64 public key decodes and checks it.

use lk::{Encodable, License, LicenseConfig, LicenseVerifier, LkError, PrivateKey, PublicKey};

const PAYLOAD: &[u8] = b"user:alice;tier:pro;expires:2030-01-01";

#[test]
fn test_token_verifies_after_transmission() {
    let private_key = PrivateKey::generate();
    let public_b64 = private_key.public_key().to_b64_string().unwrap();

    let mut license = License::new(PAYLOAD);
    license.sign(&private_key).unwrap();
    let token = license.to_b64_string().unwrap();

    // Receiving side: only strings cross the boundary.
    let public_key = PublicKey::from_b64_string(&public_b64).unwrap();
    let received = License::from_b64_string(&token).unwrap();

    assert_eq!(received, license);
    assert!(received.verify(&public_key));
}

#[test]
fn test_every_single_byte_flip_is_detected() {
    let private_key = PrivateKey::generate();
    let public_key = private_key.public_key();
    let original = License::new(PAYLOAD).signed(&private_key).unwrap();

    for i in 0..PAYLOAD.len() {
        let mut tampered = original.clone();
        tampered.data_mut()[i] ^= 0x01;
        assert!(
            !tampered.verify(&public_key),
            "flip at byte {} went undetected",
            i
        );
    }
}

#[test]
fn test_signature_moved_to_other_payload_is_rejected() {
    let private_key = PrivateKey::generate();
    let signed = License::new(PAYLOAD).signed(&private_key).unwrap();

    let carrier = License::from_bytes(&signed.to_bytes().unwrap()).unwrap();

    // Rebuild the forged record with mallory's payload and alice's signature.
    let mut record = carrier.to_record();
    record.data = b"user:mallory;tier:pro;expires:2099-01-01".to_vec();
    let forged = License::from_record(record).unwrap();
    assert!(!forged.verify(&private_key.public_key()));
}

#[test]
fn test_verifier_facade_with_exported_key() {
    let private_key = PrivateKey::generate();
    let config = LicenseConfig::new(private_key.public_key().to_b64_string().unwrap());
    let verifier = LicenseVerifier::new(config).unwrap();

    let token = License::new(PAYLOAD)
        .signed(&private_key)
        .unwrap()
        .to_b64_string()
        .unwrap();
    let verified = verifier.verify_b64(&token).unwrap();
    assert_eq!(verified.data(), PAYLOAD);

    let unsigned = License::new(PAYLOAD).to_b64_string().unwrap();
    assert!(matches!(
        verifier.verify_b64(&unsigned),
        Err(LkError::SignatureMissing)
    ));
}

#[test]
fn test_private_key_survives_storage_roundtrip() {
    let private_key = PrivateKey::generate();
    let stored = private_key.to_hex_string().unwrap();
    let restored = PrivateKey::from_hex_string(&stored).unwrap();

    let license = License::new(PAYLOAD).signed(&restored).unwrap();
    assert!(license.verify(&private_key.public_key()));
}
