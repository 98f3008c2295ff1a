//! Response bodies of the App Store Server API

use crate::enums::{Environment, OrderLookupStatus, SendAttemptResult, Status};
use crate::notification::ResponseBodyV2DecodedPayload;
use crate::renewal_info::JwsRenewalInfo;
use crate::transaction::JwsTransaction;
use appstore_jws::Signed;
use serde::{Deserialize, Serialize};

/// Response of Get Transaction Info
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfoResponse {
    pub signed_transaction_info: JwsTransaction,
}

/// A page of the customer's transaction history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    pub app_apple_id: Option<i64>,
    pub bundle_id: Option<String>,
    pub environment: Option<Environment>,
    #[serde(default)]
    pub has_more: bool,
    /// Pass back as `revision` to fetch the next page
    pub revision: Option<String>,
    #[serde(default)]
    pub signed_transactions: Vec<JwsTransaction>,
}

/// Statuses of all subscriptions of a customer, grouped by subscription group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub data: Vec<SubscriptionGroupIdentifierItem>,
    pub environment: Option<Environment>,
    pub app_apple_id: Option<i64>,
    pub bundle_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionGroupIdentifierItem {
    pub subscription_group_identifier: Option<String>,
    #[serde(default)]
    pub last_transactions: Vec<LastTransactionsItem>,
}

/// Most recent signed transaction and renewal info of one subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastTransactionsItem {
    pub original_transaction_id: Option<String>,
    pub status: Option<Status>,
    pub signed_renewal_info: Option<JwsRenewalInfo>,
    pub signed_transaction_info: Option<JwsTransaction>,
}

/// Transactions of an order ID from a customer's receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLookupResponse {
    pub status: OrderLookupStatus,
    #[serde(default)]
    pub signed_transactions: Vec<JwsTransaction>,
}

/// A page of refunded transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundHistoryResponse {
    #[serde(default)]
    pub has_more: bool,
    pub revision: Option<String>,
    #[serde(default)]
    pub signed_transactions: Vec<JwsTransaction>,
}

/// Token identifying a requested test notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTestNotificationResponse {
    pub test_notification_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAttemptItem {
    pub attempt_date: Option<i64>,
    pub send_attempt_result: Option<SendAttemptResult>,
}

/// Delivery attempts and payload of a test notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckTestNotificationResponse {
    #[serde(default)]
    pub send_attempts: Vec<SendAttemptItem>,
    pub signed_payload: Signed<ResponseBodyV2DecodedPayload>,
}

/// A page of notifications the App Store sent to your server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryResponse {
    #[serde(default)]
    pub notification_history: Vec<NotificationHistoryResponseItem>,
    #[serde(default)]
    pub has_more: bool,
    /// Pass back as `paginationToken` to fetch the next page
    pub pagination_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryResponseItem {
    pub signed_payload: Signed<ResponseBodyV2DecodedPayload>,
    #[serde(default)]
    pub send_attempts: Vec<SendAttemptItem>,
}

/// Result of extending one subscription's renewal date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendRenewalDateResponse {
    /// New renewal date in UNIX milliseconds
    pub effective_date: Option<i64>,
    pub original_transaction_id: Option<String>,
    #[serde(default)]
    pub success: bool,
    pub web_order_line_item_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassExtendRenewalDateResponse {
    pub request_identifier: String,
}

/// Progress of a renewal date extension for all active subscribers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassExtendRenewalDateStatusResponse {
    pub request_identifier: Option<String>,
    #[serde(default)]
    pub complete: bool,
    pub complete_date: Option<i64>,
    pub failed_count: Option<i64>,
    pub succeeded_count: Option<i64>,
}

/// Error body returned with non-success statuses
///
/// <https://developer.apple.com/documentation/appstoreserverapi/error_codes>
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
}
