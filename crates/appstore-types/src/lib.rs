//! App Store Server Types
//!
//! Models of the App Store Server API and App Store Server Notifications V2.
//! Signed fields stay as [`Signed`] tokens until verified, so no decoded
//! payload is reachable without a signature check:
//!
//! ```no_run
//! use appstore_types::TransactionInfoResponse;
//!
//! # fn run(body: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let response: TransactionInfoResponse = serde_json::from_str(body)?;
//! let transaction = response.signed_transaction_info.verify()?;
//! println!("{:?}", transaction.product_id);
//! # Ok(())
//! # }
//! ```

mod macros;

mod enums;
mod notification;
mod renewal_info;
mod requests;
mod responses;
mod transaction;

pub use appstore_jws::Signed;
pub use enums::*;
pub use notification::{
    Data, ExternalPurchaseToken, ResponseBodyV2, ResponseBodyV2DecodedPayload, Summary,
};
pub use renewal_info::{JwsRenewalInfo, JwsRenewalInfoDecodedPayload};
pub use requests::{
    ConsumptionRequest, ExtendRenewalDateRequest, MassExtendRenewalDateRequest,
    NotificationHistoryRequest, TransactionHistoryRequest,
};
pub use responses::{
    CheckTestNotificationResponse, ErrorPayload, ExtendRenewalDateResponse, HistoryResponse,
    LastTransactionsItem, MassExtendRenewalDateResponse, MassExtendRenewalDateStatusResponse,
    NotificationHistoryResponse, NotificationHistoryResponseItem, OrderLookupResponse,
    RefundHistoryResponse, SendAttemptItem, SendTestNotificationResponse, StatusResponse,
    SubscriptionGroupIdentifierItem, TransactionInfoResponse,
};
pub use transaction::{JwsTransaction, JwsTransactionDecodedPayload};
