//! Subscription status and renewal date extensions

use crate::client::{ApiRequest, AppStoreClient};
use crate::error::Result;
use appstore_types::{
    ExtendRenewalDateRequest, ExtendRenewalDateResponse, MassExtendRenewalDateRequest,
    MassExtendRenewalDateResponse, MassExtendRenewalDateStatusResponse, Status, StatusResponse,
};
use reqwest::Method;

impl AppStoreClient {
    /// Get the statuses of all of a customer's auto-renewable subscriptions
    ///
    /// `GET /inApps/v1/subscriptions/{transactionId}`, optionally limited to
    /// the given statuses.
    pub async fn get_all_subscription_statuses(
        &self,
        transaction_id: &str,
        statuses: &[Status],
    ) -> Result<StatusResponse> {
        let segments = ["inApps", "v1", "subscriptions", transaction_id];
        let query = statuses
            .iter()
            .map(|status| ("status", status.value().to_string()))
            .collect();
        self.request_json(ApiRequest::new(Method::GET, &segments).query(query))
            .await
    }

    /// Extend the renewal date of one active subscription
    ///
    /// `PUT /inApps/v1/subscriptions/extend/{originalTransactionId}`
    pub async fn extend_subscription_renewal_date(
        &self,
        original_transaction_id: &str,
        request: &ExtendRenewalDateRequest,
    ) -> Result<ExtendRenewalDateResponse> {
        let segments = ["inApps", "v1", "subscriptions", "extend", original_transaction_id];
        self.send_json(ApiRequest::new(Method::PUT, &segments), request)
            .await
    }

    /// Extend the renewal date of all active subscribers of a product
    ///
    /// `POST /inApps/v1/subscriptions/extend/mass`. The App Store works
    /// through the request asynchronously; poll
    /// [`get_status_of_renewal_date_extensions`](Self::get_status_of_renewal_date_extensions)
    /// or wait for a `RENEWAL_EXTENSION` notification.
    pub async fn extend_renewal_dates_for_all_active_subscribers(
        &self,
        request: &MassExtendRenewalDateRequest,
    ) -> Result<MassExtendRenewalDateResponse> {
        let segments = ["inApps", "v1", "subscriptions", "extend", "mass"];
        self.send_json(ApiRequest::new(Method::POST, &segments), request)
            .await
    }

    /// Check a renewal date extension for all active subscribers
    ///
    /// `GET /inApps/v1/subscriptions/extend/mass/{productId}/{requestIdentifier}`
    pub async fn get_status_of_renewal_date_extensions(
        &self,
        product_id: &str,
        request_identifier: &str,
    ) -> Result<MassExtendRenewalDateStatusResponse> {
        let segments = [
            "inApps",
            "v1",
            "subscriptions",
            "extend",
            "mass",
            product_id,
            request_identifier,
        ];
        self.request_json(ApiRequest::new(Method::GET, &segments)).await
    }
}
