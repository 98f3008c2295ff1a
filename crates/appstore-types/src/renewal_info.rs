use crate::enums::{
    AutoRenewStatus, Environment, ExpirationIntent, OfferDiscountType, OfferType,
    PriceIncreaseStatus,
};
use serde::{Deserialize, Serialize};

/// Subscription renewal information, signed by the App Store
pub type JwsRenewalInfo = appstore_jws::Signed<JwsRenewalInfoDecodedPayload>;

/// Decoded payload of signed renewal information for an auto-renewable
/// subscription
///
/// <https://developer.apple.com/documentation/appstoreserverapi/jwsrenewalinfodecodedpayload>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JwsRenewalInfoDecodedPayload {
    /// Product that renews at the next billing period
    pub auto_renew_product_id: Option<String>,
    pub auto_renew_status: Option<AutoRenewStatus>,
    /// Currency of `renewal_price`
    pub currency: Option<String>,
    /// Win-back offers the customer may redeem, best first
    pub eligible_win_back_offer_ids: Option<Vec<String>>,
    pub environment: Option<Environment>,
    pub expiration_intent: Option<ExpirationIntent>,
    pub grace_period_expires_date: Option<i64>,
    /// Whether the App Store is still trying to renew an expired subscription
    pub is_in_billing_retry_period: Option<bool>,
    pub offer_discount_type: Option<OfferDiscountType>,
    pub offer_identifier: Option<String>,
    pub offer_type: Option<OfferType>,
    pub original_transaction_id: Option<String>,
    pub price_increase_status: Option<PriceIncreaseStatus>,
    pub product_id: Option<String>,
    /// Earliest start date ignoring lapses of 60 days or fewer
    pub recent_subscription_start_date: Option<i64>,
    pub renewal_date: Option<i64>,
    /// Renewal price in milliunits of `currency`
    pub renewal_price: Option<i64>,
    pub signed_date: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_renewal_info() {
        let payload: JwsRenewalInfoDecodedPayload = serde_json::from_str(
            r#"{
                "originalTransactionId": "2000000000000000",
                "autoRenewProductId": "com.example.yearly",
                "productId": "com.example.monthly",
                "autoRenewStatus": 1,
                "expirationIntent": 2,
                "isInBillingRetryPeriod": true,
                "priceIncreaseStatus": 0,
                "gracePeriodExpiresDate": 1698235300000,
                "eligibleWinBackOfferIds": ["winback.a", "winback.b"],
                "environment": "Production",
                "signedDate": 1698148950000
            }"#,
        )
        .unwrap();

        assert_eq!(payload.auto_renew_status, Some(AutoRenewStatus::On));
        assert_eq!(payload.expiration_intent, Some(ExpirationIntent::BillingError));
        assert_eq!(payload.is_in_billing_retry_period, Some(true));
        assert_eq!(
            payload.price_increase_status,
            Some(PriceIncreaseStatus::CustomerHasNotResponded)
        );
        assert_eq!(
            payload.eligible_win_back_offer_ids,
            Some(vec!["winback.a".to_string(), "winback.b".to_string()])
        );
    }
}
