//! App Store Server
//!
//! An async client for the App Store Server API and a decoder for App Store
//! Server Notifications V2. Every signed payload Apple returns is verified
//! against the certificate embedded in its header before it is decoded.
//!
//! ```no_run
//! use appstore_server::{AppStoreClient, ClientConfig, Credentials, Environment, Service};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let private_key = std::fs::read_to_string("AuthKey_KEY123.p8")?;
//! let credentials = Credentials::new("issuer-id", "KEY123", private_key)
//!     .with_bundle_id("com.example.app");
//! let config = ClientConfig::new(Service::AppStoreServer, Environment::Sandbox, credentials);
//! let client = AppStoreClient::new(config)?;
//!
//! let response = client.get_transaction_info("2000000000000001").await?;
//! let transaction = response.signed_transaction_info.verify()?;
//! println!("{:?}", transaction.product_id);
//! # Ok(())
//! # }
//! ```
//!
//! Notifications are decoded with [`decode_notification`], which verifies the
//! envelope and the signed transaction and renewal info it carries.

mod api;
mod auth;
mod client;
mod config;
mod error;
mod webhook;

// Internal modules
pub(crate) mod limits;
pub(crate) mod url;

// Public Interface
pub use client::AppStoreClient;
pub use config::{ClientConfig, Credentials, Environment, Service};
pub use error::{Error, Result};
pub use webhook::{DecodedNotification, decode_notification, decode_signed_payload};

pub use appstore_jws;
pub use appstore_types as types;
