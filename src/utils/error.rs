//! Error handling for the gateway
//!
//! Top-level error type for the HTTP boundary. Display output is the
//! technical message for logs; `error_response` builds the safe
//! user-facing body instead of echoing internal detail.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::core::crm::CrmError;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request payload rejected before reaching the CRM layer
    #[error("Validation error: {0}")]
    Validation(String),

    /// Quota exhausted for this endpoint/identifier pair
    #[error("Rate limit exceeded: retry in {0}s")]
    RateLimit(u64),

    /// CRM client errors
    #[error("CRM error: {0}")]
    Crm(#[from] CrmError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GatewayError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RateLimit(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Crm(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Validation(message) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "error": message,
            })),
            Self::RateLimit(retry_after) => HttpResponse::TooManyRequests()
                .insert_header(("Retry-After", retry_after.to_string()))
                .json(json!({
                    "success": false,
                    "error": "Zu viele Anfragen. Bitte versuchen Sie es später erneut.",
                    "retryAfter": retry_after,
                })),
            // Technical detail stays in the log; the user gets a generic body
            _ => HttpResponse::build(self.status_code()).json(json!({
                "success": false,
                "error": "Ein interner Fehler ist aufgetreten. Bitte versuchen Sie es später erneut.",
            })),
        }
    }
}
