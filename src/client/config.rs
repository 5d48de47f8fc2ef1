//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::{ApiVersion, Error, Result};

/// Configuration for the RMU client.
///
/// # Example
///
/// ```
/// use rmu_rs::{ApiVersion, ClientConfig};
/// use std::time::Duration;
///
/// let config = ClientConfig::for_version(ApiVersion::V1)
///     .with_timeout(Duration::from_secs(20))
///     .with_user_agent("my-shop/1.0");
/// assert!(config.require_auth);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Remote API version
    pub api_version: ApiVersion,
    /// Override for the version's base URL
    pub base_url: Option<Url>,
    /// Request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
    /// User-Agent header value
    pub user_agent: String,
    /// Fail construction when the authentication probe fails
    pub require_auth: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_version(ApiVersion::default())
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration for a specific API version.
    pub fn for_version(api_version: ApiVersion) -> Self {
        Self {
            api_version,
            base_url: None,
            timeout: None,
            user_agent: format!("rmu-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            require_auth: api_version.requires_auth(),
        }
    }

    /// Set the API version.
    ///
    /// This does not change `require_auth`; use [`for_version`](Self::for_version)
    /// to pick up the version's defaults.
    pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
        self.api_version = api_version;
        self
    }

    /// Send requests to a different base URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Parse and set a different base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UrlParse`](crate::Error::UrlParse) if the URL is invalid.
    pub fn with_base_url_str(self, base_url: &str) -> Result<Self> {
        Ok(self.with_base_url(Url::parse(base_url)?))
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fail construction when the authentication probe fails.
    pub fn with_require_auth(mut self, enabled: bool) -> Self {
        self.require_auth = enabled;
        self
    }

    /// The URL requests are sent to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL is not `http` or `https`.
    pub fn endpoint(&self) -> Result<Url> {
        let url = match &self.base_url {
            Some(url) => url.clone(),
            None => Url::parse(self.api_version.base_url())?,
        };
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config(format!(
                "base URL must use http or https, got {}",
                other
            ))),
        }
    }
}
