//! # rmu-rs
//!
//! An async Rust client for the regmyudid.cc (RMU) device registration API.
//!
//! The client authenticates once when it is created, then exposes one
//! method per remote operation. Every operation performs a single HTTP GET
//! with the request data in the query string and decodes the JSON envelope
//! the service answers with.
//!
//! ## Features
//!
//! - **Registration**: register UDIDs with local validation of UDID, email
//!   and registration type before anything is sent
//! - **Status**: look up registrations by UDID, email, transaction ID or date
//! - **Account**: read and update API information, fetch statistics
//! - **Versions**: one client for both the v1.0 and v2.0 endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rmu_rs::RmuClient;
//! use rmu_rs::api::StatusQuery;
//!
//! #[tokio::main]
//! async fn main() -> rmu_rs::Result<()> {
//!     let client = RmuClient::connect("client-id", "api-password").await?;
//!     if client.is_failed() {
//!         eprintln!("RMU rejected the credentials");
//!         return Ok(());
//!     }
//!
//!     let result = client
//!         .register_udid(
//!             "user@example.com",
//!             "0123456789abcdef0123456789abcdef01234567",
//!             "REG",
//!             "order-1001",
//!         )
//!         .await?;
//!     println!("Registered: {result}");
//!
//!     let status = client
//!         .get_status(&StatusQuery::new().transaction_id("order-1001"))
//!         .await?;
//!     println!("Status: {status}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`Result`]. [`Error`] separates transport
//! failures, undecodable bodies, errors reported by RMU and input rejected
//! locally:
//!
//! ```rust,no_run
//! # async fn example(client: rmu_rs::RmuClient) {
//! use rmu_rs::models::RegistrationFailure;
//!
//! match client.register_udid("user@example.com", "bad", "REG", "tx").await {
//!     Ok(data) => println!("{data}"),
//!     Err(err) if err.is_validation() => {
//!         let failure = RegistrationFailure::from(&err);
//!         println!("{}", serde_json::to_string(&failure).unwrap());
//!     }
//!     Err(err) => eprintln!("registration failed: {err}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result, ValidationError};
pub use models::{ApiVersion, DeleteKey, Email, RegistrationType, TransactionId, Udid, WEBSITE_URL};
pub use client::{ClientConfig, QueryParams, RmuClient};

/// Prelude module for convenient imports.
///
/// ```rust
/// use rmu_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result, ValidationError};
    pub use crate::models::{
        ApiVersion, DeleteKey, Email, Envelope, Mode, RegistrationFailure, RegistrationType,
        TransactionId, Udid,
    };
    pub use crate::api::{AccountService, Registration, StatusQuery, UdidService};
    pub use crate::client::{ClientConfig, QueryParams, RmuClient};
}
