//! Form payload and result contracts
//!
//! Payloads arrive pre-validated from the website; numeric values come in as
//! strings and are parsed leniently downstream.

use serde::{Deserialize, Serialize};

/// Contact form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

/// Quote request submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    /// Heated area in m², as entered by the user
    #[serde(default)]
    pub heating_area: Option<String>,
    /// Heat pump type, only present for heat pump inquiries
    #[serde(default)]
    pub pump_type: Option<String>,
    /// Budget estimate in EUR, as entered by the user
    #[serde(default)]
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub preferred_contact_time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Emergency service request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyForm {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub emergency_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Newsletter signup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterForm {
    pub email: String,
}

/// Handler-facing result for lead-producing submissions
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    /// Successful submission
    pub fn created(lead_id: i64, message: impl Into<String>) -> Self {
        Self {
            success: true,
            lead_id: Some(lead_id),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed submission, carrying the technical message for logs
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            lead_id: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Handler-facing result for newsletter signups
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NewsletterResult {
    /// Successful signup (new or repeated)
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Failed signup
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
