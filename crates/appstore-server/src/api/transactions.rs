//! Transaction information, history, order lookup, refunds and consumption

use crate::client::{ApiRequest, AppStoreClient};
use crate::error::Result;
use appstore_types::{
    ConsumptionRequest, HistoryResponse, OrderLookupResponse, RefundHistoryResponse,
    TransactionHistoryRequest, TransactionInfoResponse,
};
use reqwest::Method;

impl AppStoreClient {
    /// Get information about a single transaction
    ///
    /// `GET /inApps/v1/transactions/{transactionId}`
    pub async fn get_transaction_info(
        &self,
        transaction_id: &str,
    ) -> Result<TransactionInfoResponse> {
        let segments = ["inApps", "v1", "transactions", transaction_id];
        self.request_json(ApiRequest::new(Method::GET, &segments)).await
    }

    /// Get one page of a customer's in-app purchase history
    ///
    /// `GET /inApps/v2/history/{transactionId}`. Continue with the returned
    /// `revision` while `has_more` is set.
    pub async fn get_transaction_history(
        &self,
        transaction_id: &str,
        request: &TransactionHistoryRequest,
    ) -> Result<HistoryResponse> {
        let segments = ["inApps", "v2", "history", transaction_id];
        self.request_json(ApiRequest::new(Method::GET, &segments).query(request.query_pairs()))
            .await
    }

    /// Get the transactions of an order ID from a customer's receipt
    ///
    /// `GET /inApps/v1/lookup/{orderId}`
    pub async fn look_up_order_id(&self, order_id: &str) -> Result<OrderLookupResponse> {
        let segments = ["inApps", "v1", "lookup", order_id];
        self.request_json(ApiRequest::new(Method::GET, &segments)).await
    }

    /// Get one page of a customer's refunded transactions
    ///
    /// `GET /inApps/v2/refund/lookup/{transactionId}`
    pub async fn get_refund_history(
        &self,
        transaction_id: &str,
        revision: Option<&str>,
    ) -> Result<RefundHistoryResponse> {
        let segments = ["inApps", "v2", "refund", "lookup", transaction_id];
        let query = revision
            .map(|revision| vec![("revision", revision.to_string())])
            .unwrap_or_default();
        self.request_json(ApiRequest::new(Method::GET, &segments).query(query))
            .await
    }

    /// Send consumption data in reply to a `CONSUMPTION_REQUEST` notification
    ///
    /// `PUT /inApps/v1/transactions/consumption/{transactionId}`
    pub async fn send_consumption_information(
        &self,
        transaction_id: &str,
        request: &ConsumptionRequest,
    ) -> Result<()> {
        let segments = ["inApps", "v1", "transactions", "consumption", transaction_id];
        self.send_no_content(ApiRequest::new(Method::PUT, &segments), request)
            .await
    }
}
