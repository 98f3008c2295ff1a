//! Verification of JWS payloads signed by the App Store.
//!
//! App Store Server API responses and App Store Server Notifications carry
//! signed data in JWS compact serialization. The signing certificate chain
//! travels in the `x5c` header; the leaf certificate's key (ECDSA on P-256,
//! P-384 or P-521, or RSA) verifies the SHA-256 signature over the exact
//! `header.payload` text, and only then is the payload decoded into the
//! caller's type.
//!
//! ```no_run
//! use appstore_jws::{Signed, verify};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! struct Transaction {
//!     transaction_id: String,
//! }
//!
//! # fn run(token: &str) -> appstore_jws::Result<()> {
//! let transaction: Transaction = verify(token)?;
//!
//! let signed: Signed<Transaction> = Signed::new(token);
//! let again = signed.verify()?;
//! # Ok(())
//! # }
//! ```
//!
//! The embedded leaf certificate is trusted as is; the chain is not checked
//! against an Apple root.

mod error;
mod signed;
mod verifier;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod certificate;
pub(crate) mod header;
pub(crate) mod key;
pub(crate) mod limits;
pub(crate) mod utils;

// Public Interface
pub use algorithm::AlgorithmType;
pub use error::{Error, Result};
pub use header::DecodedHeader;
pub use signed::Signed;
pub use verifier::{decode_header, verify};
