//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the string
//! identifiers the RMU API accepts, plus [`ApiVersion`], which captures
//! everything that differs between the supported endpoint versions.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::ValidationError;

/// Public website of the RMU service, used to build download links.
pub const WEBSITE_URL: &str = "https://regmyudid.cc/";

/// Substring that marks a placeholder or known-bad device identifier.
const DENIED_UDID_PATTERN: &str = "fffff";

static UDID_V2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9+\-]{25,40}$").unwrap());

static UDID_V1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9+\-]{40}$").unwrap());

static EMAIL_LOCAL_ATOM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-]+$").unwrap());

static EMAIL_DOMAIN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?$").unwrap());

/// Build a full link to a file hosted on the RMU website.
///
/// This is plain concatenation; the path is not normalized.
///
/// # Example
///
/// ```
/// assert_eq!(
///     rmu_rs::models::rmu_link("files/cert.zip"),
///     "https://regmyudid.cc/files/cert.zip"
/// );
/// ```
pub fn rmu_link(path: &str) -> String {
    format!("{}{}", WEBSITE_URL, path)
}

/// Version of the remote RMU API.
///
/// The versions differ in base URL, the name of the client identifier
/// field, UDID rules and how a failed authentication probe is treated.
///
/// # Example
///
/// ```
/// use rmu_rs::ApiVersion;
///
/// let v = ApiVersion::default();
/// assert_eq!(v.base_url(), "https://secure.regmyudid.ru/API/v2.0/");
/// assert_eq!(v.client_id_field(), "api_client_id");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Legacy endpoint. UDIDs must be exactly 40 lowercase characters.
    V1,
    /// Current endpoint. UDIDs may be 25 to 40 characters, any case.
    #[default]
    V2,
}

impl ApiVersion {
    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "https://secure.regmyudid.ru/API/v1.0/",
            ApiVersion::V2 => "https://secure.regmyudid.ru/API/v2.0/",
        }
    }

    /// Query parameter carrying the client identifier.
    pub fn client_id_field(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "client_id",
            ApiVersion::V2 => "api_client_id",
        }
    }

    /// Query parameter carrying the API password.
    pub fn password_field(&self) -> &'static str {
        "api_password"
    }

    /// Whether a failed authentication probe should fail client construction
    /// by default.
    pub fn requires_auth(&self) -> bool {
        matches!(self, ApiVersion::V1)
    }

    /// Check a UDID against this version's rules.
    ///
    /// The identifier must match the version's character class and length
    /// window and must not contain `fffff` anywhere.
    pub fn validate_udid(&self, udid: &str) -> bool {
        let shape = match self {
            ApiVersion::V1 => &*UDID_V1,
            ApiVersion::V2 => &*UDID_V2,
        };
        shape.is_match(udid) && !udid.contains(DENIED_UDID_PATTERN)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => write!(f, "v1.0"),
            ApiVersion::V2 => write!(f, "v2.0"),
        }
    }
}

/// A device identifier submitted for registration.
///
/// [`Udid::new`] wraps any string; use [`Udid::parse`] to enforce the
/// rules of an API version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Udid(String);

impl Udid {
    /// Create a UDID without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Create a UDID, validating it against `version`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUdid`] if the identifier is rejected.
    pub fn parse(s: &str, version: ApiVersion) -> Result<Self, ValidationError> {
        if version.validate_udid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::InvalidUdid)
        }
    }

    /// Get the UDID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Udid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Udid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Udid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Udid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An email address of the user a device is registered for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create an email address, validating its syntax.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] if the address is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use rmu_rs::models::Email;
    ///
    /// assert!(Email::parse("user@example.com").is_ok());
    /// assert!(Email::parse("user@localhost").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if is_valid_email(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_valid_email(s: &str) -> bool {
    if s.len() > 254 {
        return false;
    }
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    // Atoms split on '.', so an empty atom means a leading, trailing or doubled dot.
    if !local.split('.').all(|atom| EMAIL_LOCAL_ATOM.is_match(atom)) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let tld_starts_with_letter = labels
        .last()
        .and_then(|tld| tld.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic());
    labels.len() >= 2
        && tld_starts_with_letter
        && labels.iter().all(|label| EMAIL_DOMAIN_LABEL.is_match(label))
}

/// Key issued by RMU that allows deleting a failed registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeleteKey(String);

impl DeleteKey {
    /// Create a new delete key.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeleteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DeleteKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DeleteKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Transaction ID in the caller's payment system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new transaction ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the transaction ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
