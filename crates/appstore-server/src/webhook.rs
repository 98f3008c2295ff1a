//! Decoding of App Store Server Notifications V2
//!
//! A notification request body is `{"signedPayload": "..."}`. The envelope
//! and the transaction and renewal info nested in its `data` are each signed
//! separately; all of them must verify before anything is returned.

use crate::error::{Error, Result};
use appstore_jws::Signed;
use appstore_types::{
    JwsRenewalInfoDecodedPayload, JwsTransactionDecodedPayload, ResponseBodyV2,
    ResponseBodyV2DecodedPayload,
};

/// A notification with every signed part verified and decoded
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedNotification {
    pub payload: ResponseBodyV2DecodedPayload,
    /// Decoded `data.signedTransactionInfo`, when present
    pub transaction: Option<JwsTransactionDecodedPayload>,
    /// Decoded `data.signedRenewalInfo`, when present
    pub renewal_info: Option<JwsRenewalInfoDecodedPayload>,
}

/// Verify and decode a notification request body
pub fn decode_notification(body: &str) -> Result<DecodedNotification> {
    let envelope: ResponseBodyV2 = serde_json::from_str(body)
        .map_err(|e| Error::Json(format!("notification body: {e}")))?;

    decode_signed_payload(&envelope.signed_payload)
}

/// Verify and decode a signed notification payload
///
/// Also used for the payloads returned by Get Test Notification Status and
/// Get Notification History.
pub fn decode_signed_payload(
    signed_payload: &Signed<ResponseBodyV2DecodedPayload>,
) -> Result<DecodedNotification> {
    let payload = signed_payload.verify().inspect_err(|e| {
        tracing::warn!(error = %e, "notification signedPayload failed verification");
    })?;

    let (transaction, renewal_info) = match &payload.data {
        Some(data) => (
            verify_nested(data.signed_transaction_info.as_ref(), "signedTransactionInfo")?,
            verify_nested(data.signed_renewal_info.as_ref(), "signedRenewalInfo")?,
        ),
        None => (None, None),
    };

    Ok(DecodedNotification {
        payload,
        transaction,
        renewal_info,
    })
}

fn verify_nested<T>(signed: Option<&Signed<T>>, field: &str) -> Result<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    let Some(signed) = signed else {
        return Ok(None);
    };

    match signed.verify() {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            tracing::warn!(field, error = %e, "nested signed field failed verification");
            Err(Error::Verification(e))
        }
    }
}
