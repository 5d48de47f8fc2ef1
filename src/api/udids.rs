//! UDID service for registration, status lookup and deletion.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::{ClientInner, QueryParams};
use crate::error::ValidationError;
use crate::models::{DeleteKey, Email, Mode, RegistrationType, TransactionId, Udid};
use crate::{ApiVersion, Result};

/// Default page size for status lookups.
pub const DEFAULT_STATUS_LIMIT: u32 = 10;

/// Service for device registration operations.
///
/// # Example
///
/// ```no_run
/// use rmu_rs::api::StatusQuery;
///
/// # async fn example(client: rmu_rs::RmuClient) -> rmu_rs::Result<()> {
/// let udid = "0123456789abcdef0123456789abcdef01234567";
///
/// let registered = client
///     .udids()
///     .register("user@example.com", udid, "REG", "order-1001")
///     .await?;
/// println!("Registered: {registered}");
///
/// let status = client
///     .udids()
///     .status(&StatusQuery::new().udid(udid))
///     .await?;
/// println!("Status: {status}");
/// # Ok(())
/// # }
/// ```
pub struct UdidService {
    inner: Arc<ClientInner>,
}

/// Filters and paging for a status lookup.
///
/// `udid`, `transaction_id` and `added` are only sent when set to a
/// non-empty or non-zero value. `start` and `limit` are always sent.
///
/// # Example
///
/// ```
/// use rmu_rs::api::StatusQuery;
///
/// let query = StatusQuery::new()
///     .transaction_id("order-1001")
///     .start(20)
///     .limit(50);
/// assert_eq!(query.limit, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusQuery {
    /// UDID or email to look up
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udid: Option<String>,
    /// Transaction ID in the caller's payment system
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<TransactionId>,
    /// Only records added after this timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added: Option<u64>,
    /// Offset of the first record
    pub start: u32,
    /// Maximum number of records
    pub limit: u32,
}

impl Default for StatusQuery {
    fn default() -> Self {
        Self {
            udid: None,
            transaction_id: None,
            added: None,
            start: 0,
            limit: DEFAULT_STATUS_LIMIT,
        }
    }
}

impl StatusQuery {
    /// Create a query with no filters, starting at 0 with a limit of 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by UDID or email. Empty strings clear the filter.
    pub fn udid(mut self, udid: impl Into<String>) -> Self {
        let udid = udid.into();
        self.udid = (!udid.is_empty()).then_some(udid);
        self
    }

    /// Filter by transaction ID. Empty strings clear the filter.
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        let transaction_id = transaction_id.into();
        self.transaction_id =
            (!transaction_id.is_empty()).then(|| TransactionId::new(transaction_id));
        self
    }

    /// Only records added after this timestamp. Zero clears the filter.
    pub fn added(mut self, added: u64) -> Self {
        self.added = (added != 0).then_some(added);
        self
    }

    /// Set the offset of the first record.
    pub fn start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Set the maximum number of records.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// A registration request that passed local validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Email of the device owner
    pub email: Email,
    /// Device identifier
    pub udid: Udid,
    /// Kind of registration
    #[serde(rename = "type")]
    pub registration_type: RegistrationType,
    /// Transaction ID in the caller's payment system
    pub transaction_id: TransactionId,
}

impl Registration {
    /// Validate registration input for an API version.
    ///
    /// Checks run in order UDID, email, registration type and stop at the
    /// first failure.
    ///
    /// # Example
    ///
    /// ```
    /// use rmu_rs::api::Registration;
    /// use rmu_rs::error::ValidationError;
    /// use rmu_rs::ApiVersion;
    ///
    /// let err = Registration::new("not-an-email", "bad", "PRO", "tx1", ApiVersion::V2)
    ///     .unwrap_err();
    /// assert_eq!(err, ValidationError::InvalidUdid);
    /// ```
    pub fn new(
        email: &str,
        udid: &str,
        registration_type: &str,
        transaction_id: &str,
        version: ApiVersion,
    ) -> std::result::Result<Self, ValidationError> {
        let udid = Udid::parse(udid, version)?;
        let email = Email::parse(email)?;
        let registration_type = registration_type.parse()?;

        Ok(Self {
            email,
            udid,
            registration_type,
            transaction_id: TransactionId::new(transaction_id),
        })
    }
}

impl UdidService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Check a UDID against this client's API version.
    pub fn validate(&self, udid: &str) -> bool {
        self.inner.config.api_version.validate_udid(udid)
    }

    /// Register a device.
    ///
    /// Input is validated first; a validation failure returns
    /// [`Error::Validation`](crate::Error::Validation) without contacting
    /// the remote. On success the envelope's `data` is returned, or the
    /// whole envelope if it has no `data` field.
    pub async fn register(
        &self,
        email: &str,
        udid: &str,
        registration_type: &str,
        transaction_id: &str,
    ) -> Result<Value> {
        let registration = Registration::new(
            email,
            udid,
            registration_type,
            transaction_id,
            self.inner.config.api_version,
        )?;
        self.submit(&registration).await
    }

    /// Submit an already validated registration.
    pub async fn submit(&self, registration: &Registration) -> Result<Value> {
        let params = QueryParams::from_serialize(Mode::Register, registration)?;

        tracing::debug!(udid = %registration.udid, "Registering UDID");

        let envelope = self.inner.call(params).await?;
        Ok(envelope.into_data_or_envelope())
    }

    /// Look up registration status.
    pub async fn status(&self, query: &StatusQuery) -> Result<Value> {
        let params = QueryParams::from_serialize(Mode::Status, query)?;
        let envelope = self.inner.call(params).await?;
        Ok(envelope.into_data())
    }

    /// Delete a failed registration. Only failed REG/CERT records can be
    /// deleted.
    pub async fn delete(&self, key: &DeleteKey) -> Result<Value> {
        let mut params = QueryParams::new(Mode::Delete);
        params.push("delete_key", key.as_str());

        let envelope = self.inner.call(params).await?;
        Ok(envelope.into_data())
    }
}
