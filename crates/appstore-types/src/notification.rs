use crate::enums::{ConsumptionRequestReason, Environment, NotificationType, Status, Subtype};
use crate::renewal_info::JwsRenewalInfo;
use crate::transaction::JwsTransaction;
use appstore_jws::Signed;
use serde::{Deserialize, Serialize};

/// Body of an App Store Server Notifications V2 request
///
/// <https://developer.apple.com/documentation/appstoreservernotifications/responsebodyv2>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBodyV2 {
    pub signed_payload: Signed<ResponseBodyV2DecodedPayload>,
}

/// Decoded notification envelope
///
/// Exactly one of `data`, `summary` and `external_purchase_token` is present,
/// depending on the notification type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBodyV2DecodedPayload {
    pub notification_type: NotificationType,
    pub subtype: Option<Subtype>,
    pub data: Option<Data>,
    /// Present for `RENEWAL_EXTENSION` with subtype `SUMMARY`
    pub summary: Option<Summary>,
    /// Present for `EXTERNAL_PURCHASE_TOKEN`
    pub external_purchase_token: Option<ExternalPurchaseToken>,
    pub version: Option<String>,
    pub signed_date: Option<i64>,
    /// Unique identifier of the notification, stable across retries
    #[serde(rename = "notificationUUID")]
    pub notification_uuid: Option<String>,
}

/// App metadata and signed purchase information of a notification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    /// Not present in the sandbox environment
    pub app_apple_id: Option<i64>,
    pub bundle_id: Option<String>,
    pub bundle_version: Option<String>,
    pub consumption_request_reason: Option<ConsumptionRequestReason>,
    pub environment: Option<Environment>,
    pub signed_renewal_info: Option<JwsRenewalInfo>,
    pub signed_transaction_info: Option<JwsTransaction>,
    pub status: Option<Status>,
}

/// Result of a renewal date extension for all active subscribers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub request_identifier: Option<String>,
    pub environment: Option<Environment>,
    pub app_apple_id: Option<i64>,
    pub bundle_id: Option<String>,
    pub product_id: Option<String>,
    /// Storefronts the extension was limited to, all when absent
    pub storefront_country_codes: Option<Vec<String>>,
    pub failed_count: Option<i64>,
    pub succeeded_count: Option<i64>,
}

/// External purchase token created by Apple
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPurchaseToken {
    pub external_purchase_id: Option<String>,
    pub token_creation_date: Option<i64>,
    pub app_apple_id: Option<i64>,
    pub bundle_id: Option<String>,
}
