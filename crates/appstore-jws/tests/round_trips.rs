//! Per-algorithm round-trip tests
//!
//! Each supported scheme signs a payload with a fixture key and verifies it
//! through the public API, preserving every field.

mod support;

use appstore_jws::{Error, Signed, verify};
use serde::Deserialize;
use serde_json::{Value, json};
use support::{EC_P256_CERT, RSA_2048_CERT, Signer, TokenBuilder, presigned_tokens};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Notification {
    notification_type: String,
    notification_uuid: String,
    signed_date: i64,
    data: NotificationData,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct NotificationData {
    bundle_id: String,
    environment: String,
    app_apple_id: Option<i64>,
}

fn notification_json() -> Value {
    json!({
        "notificationType": "DID_RENEW",
        "notificationUUID": "002e14d5-51f5-4503-b5a8-c3a1af68eb20",
        "signedDate": 1_698_148_900_000_i64,
        "data": {
            "bundleId": "com.example.test",
            "environment": "Sandbox",
            "appAppleId": null,
        },
    })
}

#[test]
fn round_trip_all_signers_value() {
    for signer in Signer::all() {
        let payload = notification_json();
        let token = TokenBuilder::new(signer).payload(payload.clone()).generate();

        let decoded: Value = verify(&token).unwrap_or_else(|e| panic!("{signer:?}: {e}"));
        assert_eq!(decoded, payload, "{signer:?}");
    }
}

#[test]
fn round_trip_all_signers_typed() {
    for signer in Signer::all() {
        let token = TokenBuilder::new(signer)
            .payload(notification_json())
            .generate();

        let decoded: Notification = verify(&token).expect("verify");
        assert_eq!(
            decoded,
            Notification {
                notification_type: "DID_RENEW".into(),
                notification_uuid: "002e14d5-51f5-4503-b5a8-c3a1af68eb20".into(),
                signed_date: 1_698_148_900_000,
                data: NotificationData {
                    bundle_id: "com.example.test".into(),
                    environment: "Sandbox".into(),
                    app_apple_id: None,
                },
            }
        );
    }
}

#[test]
fn round_trip_through_signed_wrapper() {
    let token = TokenBuilder::new(Signer::Es256Raw)
        .payload(notification_json())
        .generate();

    let signed: Signed<Notification> = serde_json::from_value(json!(token)).unwrap();
    assert_eq!(signed.verify().unwrap().notification_type, "DID_RENEW");
    assert_eq!(signed.header().unwrap().algorithm, "ES256");
}

#[test]
fn es256_raw_and_der_encodings_share_key_and_payload() {
    let payload = json!({"environment": "Sandbox", "bundleId": "com.example.test"});

    let raw = TokenBuilder::new(Signer::Es256Raw)
        .payload(payload.clone())
        .generate();
    let der = TokenBuilder::new(Signer::Es256Der)
        .payload(payload.clone())
        .generate();

    // Same header (same certificate), different signature encodings
    assert_eq!(raw.split('.').next(), der.split('.').next());
    assert_eq!(support::segment_bytes(&raw, 2).len(), 64);
    assert_eq!(support::segment_bytes(&der, 2)[0], 0x30);

    assert_eq!(verify::<Value>(&raw).unwrap(), payload);
    assert_eq!(verify::<Value>(&der).unwrap(), payload);
}

#[test]
fn only_leaf_certificate_signs() {
    // Intermediate and root entries are carried but never used for the key
    let token = TokenBuilder::new(Signer::Es256Raw)
        .chain(&[EC_P256_CERT, RSA_2048_CERT, RSA_2048_CERT])
        .payload(json!({"ok": true}))
        .generate();
    assert_eq!(verify::<Value>(&token).unwrap(), json!({"ok": true}));

    let wrong_leaf = TokenBuilder::new(Signer::Es256Raw)
        .chain(&[RSA_2048_CERT, EC_P256_CERT])
        .payload(json!({"ok": true}))
        .generate();
    assert!(matches!(
        verify::<Value>(&wrong_leaf),
        Err(Error::AlgorithmMismatch { .. })
    ));
}

#[test]
fn payload_type_mismatch_after_valid_signature() {
    let token = TokenBuilder::new(Signer::Rs256)
        .payload(json!({"notificationType": 42}))
        .generate();

    assert!(matches!(
        verify::<Notification>(&token),
        Err(Error::PayloadParseError(_))
    ));
}

#[test]
fn verification_is_repeatable_across_threads() {
    let token = TokenBuilder::new(Signer::Es256Der)
        .payload(notification_json())
        .generate();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| verify::<Value>(&token)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), notification_json());
        }
    });
}

#[test]
fn round_trip_presigned_curves_and_rsa_1024() {
    for (name, token) in presigned_tokens() {
        let payload: Value = verify(token).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(
            payload,
            json!({"environment": "Sandbox", "bundleId": "com.example.test"}),
            "{name}"
        );
    }
}
