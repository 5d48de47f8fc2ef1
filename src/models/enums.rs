//! Enumeration types for the RMU API.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Remote operation selected by the `mode` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Credential check performed when a client is created
    Auth,
    /// Read the API information attached to the account
    ApiInfo,
    /// Store API information on the account
    SetApiInfo,
    /// Account statistics
    Statistics,
    /// Delete a failed registration
    Delete,
    /// Registration status lookup
    Status,
    /// Register a device
    Register,
}

impl Mode {
    /// The wire value of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auth => "auth",
            Mode::ApiInfo => "api_info",
            Mode::SetApiInfo => "set_api_info",
            Mode::Statistics => "statistics",
            Mode::Delete => "delete",
            Mode::Status => "status",
            Mode::Register => "register",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of registration to request for a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistrationType {
    /// Developer certificate
    #[serde(rename = "CERT")]
    Cert,
    /// Plain UDID registration
    #[serde(rename = "REG")]
    Reg,
}

impl RegistrationType {
    /// The wire value of this registration type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegistrationType::Cert => "CERT",
            RegistrationType::Reg => "REG",
        }
    }
}

impl fmt::Display for RegistrationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CERT" => Ok(RegistrationType::Cert),
            "REG" => Ok(RegistrationType::Reg),
            _ => Err(ValidationError::InvalidRegistrationType),
        }
    }
}
