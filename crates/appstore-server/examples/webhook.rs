//! Receives App Store Server Notifications V2.
//!
//! Run with
//!
//! ```not_rust
//! cargo run --example webhook
//! ```
//!
//! then point the sandbox notification URL of your app at
//! `http://<host>:4000/notifications`.

use appstore_server::decode_notification;
use axum::{Router, http::StatusCode, routing::post};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,appstore_server=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = Router::new().route("/notifications", post(handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:4000")
        .await
        .unwrap();
    tracing::debug!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}

/// Apple retries delivery until it sees a 2xx status
async fn handler(body: String) -> StatusCode {
    let notification = match decode_notification(&body) {
        Ok(notification) => notification,
        Err(e) => {
            tracing::warn!("rejected notification: {e}");
            return StatusCode::BAD_REQUEST;
        }
    };

    let payload = &notification.payload;
    tracing::info!(
        notification_type = %payload.notification_type,
        subtype = ?payload.subtype,
        uuid = ?payload.notification_uuid,
        "notification received"
    );

    if let Some(transaction) = &notification.transaction {
        tracing::info!(
            transaction_id = ?transaction.transaction_id,
            product_id = ?transaction.product_id,
            "transaction"
        );
    }

    if let Some(renewal) = &notification.renewal_info {
        tracing::info!(
            auto_renew_status = ?renewal.auto_renew_status,
            auto_renew_product_id = ?renewal.auto_renew_product_id,
            "renewal info"
        );
    }

    StatusCode::OK
}
