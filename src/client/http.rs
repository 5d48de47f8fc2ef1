//! HTTP client implementation for the RMU API.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use url::Url;

use crate::api::{AccountService, StatusQuery, UdidService};
use crate::models::{rmu_link, Envelope, Mode};
use crate::{ApiVersion, Error, Result};

use super::config::ClientConfig;
use super::query::QueryParams;

/// The main client for interacting with the RMU API.
///
/// Creating a client runs an authentication probe. By default a failed
/// probe is recorded rather than returned; check
/// [`is_authenticated`](Self::is_authenticated) before issuing calls.
///
/// # Example
///
/// ```no_run
/// use rmu_rs::RmuClient;
///
/// # async fn example() -> rmu_rs::Result<()> {
/// let client = RmuClient::connect("client-id", "api-password").await?;
/// if !client.is_authenticated() {
///     eprintln!("RMU rejected the credentials");
///     return Ok(());
/// }
///
/// let stats = client.get_statistics().await?;
/// println!("{stats}");
/// # Ok(())
/// # }
/// ```
pub struct RmuClient {
    pub(crate) inner: Arc<ClientInner>,
    authenticated: bool,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) credentials: Credentials,
    pub(crate) config: ClientConfig,
    pub(crate) endpoint: Url,
}

pub(crate) struct Credentials {
    client_id: String,
    api_password: SecretString,
}

impl RmuClient {
    /// Create a client for the current API version and run the
    /// authentication probe.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be built. A rejected
    /// probe leaves the client in the failed state.
    pub async fn connect(
        client_id: impl Into<String>,
        api_password: impl Into<String>,
    ) -> Result<Self> {
        Self::connect_with_config(client_id, api_password, ClientConfig::default()).await
    }

    /// Create a client with custom configuration and run the authentication
    /// probe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] if the probe fails and
    /// `config.require_auth` is set.
    pub async fn connect_with_config(
        client_id: impl Into<String>,
        api_password: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let inner = Arc::new(ClientInner::new(
            Credentials {
                client_id: client_id.into(),
                api_password: SecretString::from(api_password.into()),
            },
            config,
        )?);

        let probe = inner.query(QueryParams::new(Mode::Auth)).await;
        let failure = match probe {
            Ok(envelope) if envelope.is_authenticated() => None,
            Ok(envelope) => Some(
                envelope
                    .error_message()
                    .unwrap_or_else(|| "credentials were not accepted".to_string()),
            ),
            Err(err) => Some(err.to_string()),
        };

        match failure {
            None => {
                tracing::info!(
                    client_id = %inner.credentials.client_id,
                    version = %inner.config.api_version,
                    "Authenticated with RMU"
                );
                Ok(Self {
                    inner,
                    authenticated: true,
                })
            }
            Some(reason) if inner.config.require_auth => Err(Error::Authentication(reason)),
            Some(reason) => {
                tracing::warn!(
                    client_id = %inner.credentials.client_id,
                    %reason,
                    "RMU authentication probe failed"
                );
                Ok(Self {
                    inner,
                    authenticated: false,
                })
            }
        }
    }

    /// Whether the authentication probe succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the authentication probe failed.
    pub fn is_failed(&self) -> bool {
        !self.authenticated
    }

    /// The API version this client talks to.
    pub fn api_version(&self) -> ApiVersion {
        self.inner.config.api_version
    }

    /// The URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// The client identifier this client authenticates with.
    pub fn client_id(&self) -> &str {
        &self.inner.credentials.client_id
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the UDID registration service.
    pub fn udids(&self) -> UdidService {
        UdidService::new(self.inner.clone())
    }

    /// Send a raw query and return the decoded response object.
    ///
    /// Credentials are added automatically. Transport failures, non-JSON
    /// bodies and non-object JSON all yield `None`; use
    /// [`query`](Self::query) to find out which one happened.
    pub async fn api_query(&self, params: QueryParams) -> Option<Map<String, Value>> {
        self.inner.query(params).await.ok().map(|envelope| envelope.raw)
    }

    /// Send a raw query and return the decoded envelope.
    ///
    /// The envelope's `error` field is not inspected.
    pub async fn query(&self, params: QueryParams) -> Result<Envelope> {
        self.inner.query(params).await
    }

    /// Get API information associated with the account.
    pub async fn get_api_info(&self) -> Result<Value> {
        self.account().info().await
    }

    /// Store API information on the account.
    pub async fn set_api_info<T: Serialize + ?Sized>(&self, info: &T) -> Result<Value> {
        self.account().set_info(info).await
    }

    /// Get account statistics.
    pub async fn get_statistics(&self) -> Result<Value> {
        self.account().statistics().await
    }

    /// Delete a failed registration using its delete key.
    pub async fn delete_udid(&self, key: &str) -> Result<Value> {
        self.udids().delete(&key.into()).await
    }

    /// Look up registration status.
    pub async fn get_status(&self, query: &StatusQuery) -> Result<Value> {
        self.udids().status(query).await
    }

    /// Register a device.
    ///
    /// Input is validated locally first (UDID, then email, then type); no
    /// request is sent if any check fails.
    pub async fn register_udid(
        &self,
        email: &str,
        udid: &str,
        registration_type: &str,
        transaction_id: &str,
    ) -> Result<Value> {
        self.udids()
            .register(email, udid, registration_type, transaction_id)
            .await
    }

    /// Check a UDID against the current API version's rules.
    ///
    /// Use [`ApiVersion::validate_udid`] for other versions.
    pub fn validate_udid(udid: &str) -> bool {
        ApiVersion::default().validate_udid(udid)
    }

    /// Build a full link to a file on the RMU website.
    pub fn get_rmu_link(path: &str) -> String {
        rmu_link(path)
    }
}

impl ClientInner {
    fn new(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            credentials,
            config,
            endpoint,
        })
    }

    /// Send one GET request and decode the envelope.
    pub(crate) async fn query(&self, params: QueryParams) -> Result<Envelope> {
        let mode = params.mode();
        let version = self.config.api_version;

        tracing::debug!(%mode, url = %self.endpoint, "Sending RMU query");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(params.pairs())
            .query(&[
                (version.client_id_field(), self.credentials.client_id.as_str()),
                (
                    version.password_field(),
                    self.credentials.api_password.expose_secret(),
                ),
            ])
            .send()
            .await
            .map_err(|err| redact(mode, err, "RMU request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%mode, status = status.as_u16(), "RMU returned error status");
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| redact(mode, err, "RMU response body could not be read"))?;
        let value: Value = serde_json::from_slice(&body)
            .inspect_err(|err| tracing::warn!(%mode, error = %err, "RMU returned invalid JSON"))?;

        match value {
            Value::Object(map) => Ok(Envelope::from_map(map)),
            other => Err(Error::UnexpectedResponse(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Send a query and turn a remote error into [`Error::Api`].
    pub(crate) async fn call(&self, params: QueryParams) -> Result<Envelope> {
        let mode = params.mode();
        let envelope = self.query(params).await?;

        if let Some(message) = envelope.error_message() {
            tracing::debug!(%mode, %message, "RMU reported an error");
            return Err(Error::Api {
                mode,
                message,
                body: Value::Object(envelope.raw),
            });
        }

        Ok(envelope)
    }
}

/// Strip the request URL from a transport error and log it.
///
/// The URL carries the API password in its query string.
fn redact(mode: Mode, err: reqwest::Error, message: &'static str) -> Error {
    let err = err.without_url();
    tracing::warn!(%mode, error = %err, "{}", message);
    Error::Http(err)
}

impl Clone for RmuClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            authenticated: self.authenticated,
        }
    }
}

impl std::fmt::Debug for RmuClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RmuClient")
            .field("credentials", &self.inner.credentials)
            .field("config", &self.inner.config)
            .field("authenticated", &self.authenticated)
            .finish()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            client_id: "shop-42".to_string(),
            api_password: SecretString::from("super-secret-password".to_string()),
        };
        let debug_str = format!("{:?}", credentials);

        assert!(debug_str.contains("shop-42"));
        assert!(!debug_str.contains("super-secret-password"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_static_helpers() {
        assert!(RmuClient::validate_udid("0123456789abcdef0123456789"));
        assert!(!RmuClient::validate_udid("0123456789abcdef0123fffff9"));
        assert_eq!(
            RmuClient::get_rmu_link("download/abc.mobileprovision"),
            "https://regmyudid.cc/download/abc.mobileprovision"
        );
    }
}
