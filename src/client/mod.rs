//! HTTP client and service layer for the RMU API.
//!
//! This module provides the main entry point [`RmuClient`] for
//! interacting with the RMU API.
//!
//! # Example
//!
//! ```no_run
//! use rmu_rs::{ApiVersion, ClientConfig, RmuClient};
//!
//! # async fn example() -> rmu_rs::Result<()> {
//! let client = RmuClient::connect_with_config(
//!     "client-id",
//!     "api-password",
//!     ClientConfig::for_version(ApiVersion::V1),
//! ).await?;
//!
//! let info = client.get_api_info().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
mod query;

pub use config::ClientConfig;
pub use http::RmuClient;
pub use query::QueryParams;
pub(crate) use http::ClientInner;
