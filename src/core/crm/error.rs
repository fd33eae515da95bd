//! CRM client error types

use thiserror::Error;

/// Errors raised by the CRM client.
///
/// Only the generic `execute` primitive propagates these; the named
/// operations capture them and return structured results instead.
#[derive(Error, Debug)]
pub enum CrmError {
    /// Required connection settings absent
    #[error("CRM configuration error: {0}")]
    Configuration(String),

    /// Backend rejected credentials or was unreachable during authentication.
    /// Deliberately generic: backend auth diagnostics are logged, not exposed.
    #[error("failed to connect to CRM backend")]
    Authentication,

    /// Backend returned an error envelope for a non-auth operation
    #[error("CRM execution failed: {0}")]
    Remote(String),

    /// HTTP transport failure (includes timeouts)
    #[error("CRM request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON envelope
    #[error("failed to parse CRM response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CrmError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a remote execution error
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    /// Whether this failure needs operator intervention rather than a retry
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
