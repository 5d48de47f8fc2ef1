//! Account service for API information and statistics.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::{ClientInner, QueryParams};
use crate::models::Mode;
use crate::Result;

/// Service for account-level operations.
///
/// Payloads are returned as they arrive in the envelope's `data` field.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: rmu_rs::RmuClient) -> rmu_rs::Result<()> {
/// let info = client.account().info().await?;
/// println!("API info: {info}");
///
/// client
///     .account()
///     .set_info(&serde_json::json!({"callback_url": "https://shop.example/rmu"}))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct AccountService {
    inner: Arc<ClientInner>,
}

impl AccountService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the API information attached to the account.
    pub async fn info(&self) -> Result<Value> {
        let envelope = self.inner.call(QueryParams::new(Mode::ApiInfo)).await?;
        Ok(envelope.into_data())
    }

    /// Store API information on the account.
    ///
    /// `info` is sent as a nested `data[...]` mapping.
    pub async fn set_info<T: Serialize + ?Sized>(&self, info: &T) -> Result<Value> {
        let mut params = QueryParams::new(Mode::SetApiInfo);
        params.push_value("data", &serde_json::to_value(info)?);

        let envelope = self.inner.call(params).await?;
        Ok(envelope.into_data())
    }

    /// Get account statistics.
    pub async fn statistics(&self) -> Result<Value> {
        let envelope = self.inner.call(QueryParams::new(Mode::Statistics)).await?;
        Ok(envelope.into_data())
    }
}
