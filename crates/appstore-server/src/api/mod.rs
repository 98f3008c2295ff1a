//! App Store Server API endpoints, one method on
//! [`AppStoreClient`](crate::AppStoreClient) each

mod notifications;
mod subscriptions;
mod transactions;
