use crate::enums::{
    Environment, InAppOwnershipType, OfferDiscountType, OfferType, RevocationReason,
    TransactionReason, TransactionType,
};
use serde::{Deserialize, Serialize};

/// A customer's in-app purchase transaction, signed by the App Store
pub type JwsTransaction = appstore_jws::Signed<JwsTransactionDecodedPayload>;

/// Decoded payload of a signed transaction
///
/// <https://developer.apple.com/documentation/appstoreserverapi/jwstransactiondecodedpayload>
///
/// Dates are UNIX time in milliseconds. Apple omits fields that do not apply
/// to the purchase, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwsTransactionDecodedPayload {
    /// UUID the app associated with the customer at purchase time
    pub app_account_token: Option<String>,
    pub bundle_id: Option<String>,
    /// ISO 4217 currency code of `price`
    pub currency: Option<String>,
    pub environment: Option<Environment>,
    pub expires_date: Option<i64>,
    pub in_app_ownership_type: Option<InAppOwnershipType>,
    pub is_upgraded: Option<bool>,
    pub offer_discount_type: Option<OfferDiscountType>,
    pub offer_identifier: Option<String>,
    pub offer_type: Option<OfferType>,
    pub original_purchase_date: Option<i64>,
    pub original_transaction_id: Option<String>,
    /// Price in milliunits of `currency`
    pub price: Option<i64>,
    pub product_id: Option<String>,
    pub purchase_date: Option<i64>,
    pub quantity: Option<i32>,
    pub revocation_date: Option<i64>,
    pub revocation_reason: Option<RevocationReason>,
    /// When the App Store signed this payload
    pub signed_date: Option<i64>,
    /// Three-letter code of the storefront country or region
    pub storefront: Option<String>,
    pub storefront_id: Option<String>,
    pub subscription_group_identifier: Option<String>,
    pub transaction_id: Option<String>,
    pub transaction_reason: Option<TransactionReason>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub web_order_line_item_id: Option<String>,
}
