//! Licenses, keys and the verifier are shared read-only across threads.

use lk::{Encodable, License, LicenseConfig, LicenseVerifier, PrivateKey, PublicKey};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn public_types_are_send_sync() {
    assert_send_sync::<License>();
    assert_send_sync::<PublicKey>();
    assert_send_sync::<PrivateKey>();
    assert_send_sync::<LicenseVerifier>();
}

#[test]
fn concurrent_verify_and_encode_on_one_license() {
    let private_key = PrivateKey::generate();
    let public_key = private_key.public_key();
    let license = License::new(b"user:alice;tier:pro".to_vec())
        .signed(&private_key)
        .unwrap();
    let expected = license.to_bytes().unwrap();

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..16 {
                    assert!(license.verify(&public_key));
                    assert_eq!(license.to_bytes().unwrap(), expected);
                }
            });
        }
    });
}

#[test]
fn shared_verifier_across_threads() {
    let private_key = PrivateKey::generate();
    let config = LicenseConfig::new(private_key.public_key().to_b64_string().unwrap());
    let verifier = LicenseVerifier::new(config).unwrap();
    let token = License::new(b"tier:pro".to_vec())
        .signed(&private_key)
        .unwrap()
        .to_b64_string()
        .unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let verified = verifier.verify_b64(&token).unwrap();
                assert_eq!(verified.data(), b"tier:pro");
            });
        }
    });
}
