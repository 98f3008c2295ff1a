//! Request parameters and bodies of the App Store Server API

use crate::enums::{
    AccountTenure, ConsumptionStatus, DeliveryStatus, ExtendReasonCode, InAppOwnershipType,
    LifetimeDollars, NotificationType, Order, Platform, PlayTime, ProductType, RefundPreference,
    Subtype, UserStatus,
};
use serde::{Deserialize, Serialize};

/// Filters of Get Transaction History, sent as query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionHistoryRequest {
    /// Token from the previous page
    pub revision: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub product_ids: Vec<String>,
    pub product_types: Vec<ProductType>,
    pub sort: Option<Order>,
    pub subscription_group_identifiers: Vec<String>,
    pub in_app_ownership_type: Option<InAppOwnershipType>,
    pub revoked: Option<bool>,
}

impl TransactionHistoryRequest {
    /// Query parameters in Apple's names; list filters repeat their name
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(revision) = &self.revision {
            pairs.push(("revision", revision.clone()));
        }
        if let Some(start_date) = self.start_date {
            pairs.push(("startDate", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            pairs.push(("endDate", end_date.to_string()));
        }
        for product_id in &self.product_ids {
            pairs.push(("productId", product_id.clone()));
        }
        for product_type in &self.product_types {
            pairs.push(("productType", product_type.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.to_string()));
        }
        for group in &self.subscription_group_identifiers {
            pairs.push(("subscriptionGroupIdentifier", group.clone()));
        }
        if let Some(ownership) = &self.in_app_ownership_type {
            pairs.push(("inAppOwnershipType", ownership.to_string()));
        }
        if let Some(revoked) = self.revoked {
            pairs.push(("revoked", revoked.to_string()));
        }

        pairs
    }
}

/// Consumption data sent in reply to a `CONSUMPTION_REQUEST` notification
///
/// <https://developer.apple.com/documentation/appstoreserverapi/consumptionrequest>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumptionRequest {
    /// Whether the customer consented to provide consumption data
    pub customer_consented: bool,
    pub consumption_status: ConsumptionStatus,
    pub platform: Platform,
    pub sample_content_provided: bool,
    pub delivery_status: DeliveryStatus,
    /// Empty when the app has no account token for the customer
    pub app_account_token: String,
    pub account_tenure: AccountTenure,
    pub play_time: PlayTime,
    pub lifetime_dollars_refunded: LifetimeDollars,
    pub lifetime_dollars_purchased: LifetimeDollars,
    pub user_status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_preference: Option<RefundPreference>,
}

/// Extension of one subscription's renewal date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendRenewalDateRequest {
    /// Between 1 and 90
    pub extend_by_days: i32,
    pub extend_reason_code: ExtendReasonCode,
    /// Your UUID for this request
    pub request_identifier: String,
}

/// Extension of the renewal date for all active subscribers of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MassExtendRenewalDateRequest {
    pub request_identifier: String,
    pub extend_by_days: i32,
    pub extend_reason_code: ExtendReasonCode,
    pub product_id: String,
    /// Limit the extension to these storefronts; all when empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storefront_country_codes: Vec<String>,
}

/// Filters of Get Notification History
///
/// The pagination token travels as a query parameter, not in this body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationHistoryRequest {
    pub start_date: i64,
    pub end_date: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<NotificationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_subtype: Option<Subtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_failures: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}
