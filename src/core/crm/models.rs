//! Wire types for the CRM lead and mailing models

use serde::{Serialize, Serializer};

/// Sentinel error value signalling an idempotent, already-completed
/// subscription. A success condition, not a failure; callers must compare
/// against this literal rather than only checking `success`.
pub const ALREADY_SUBSCRIBED: &str = "already_subscribed";

/// CRM record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadType {
    /// Unqualified inquiry
    Lead,
    /// Qualified, higher-value sales prospect
    Opportunity,
}

/// Priority tier, serialized as the backend's string enum `"0".."3"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeadPriority {
    Low,
    Normal,
    High,
    /// Reserved for emergency-sourced records
    Urgent,
}

impl LeadPriority {
    /// Wire representation
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "0",
            Self::Normal => "1",
            Self::High => "2",
            Self::Urgent => "3",
        }
    }
}

impl Serialize for LeadPriority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Enumerated origin of a lead record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    ContactForm,
    QuoteRequest,
    EmergencyService,
}

impl LeadSource {
    /// Emergency-sourced records get escalated priority and team
    pub fn is_emergency(self) -> bool {
        matches!(self, Self::EmergencyService)
    }
}

/// Phone value for the backend schema, which distinguishes an explicit
/// `false` ("no phone") from a missing key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneField {
    /// A phone number
    Number(String),
    /// Explicitly absent, serialized as `false`
    Absent,
}

impl Serialize for PhoneField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(number) => serializer.serialize_str(number),
            Self::Absent => serializer.serialize_bool(false),
        }
    }
}

/// Assigned owner, `false` meaning explicitly unassigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerField {
    /// Backend user id
    User(i64),
    /// Explicitly unassigned, serialized as `false`
    Unassigned,
}

impl Serialize for OwnerField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::User(id) => serializer.serialize_i64(*id),
            Self::Unassigned => serializer.serialize_bool(false),
        }
    }
}

/// A lead record to be created in the backend.
///
/// Every optional field is skipped when unset: some backend versions reject
/// payloads carrying undefined keys, so absence must mean absence.
#[derive(Debug, Clone, Serialize)]
pub struct NewLead {
    /// Record title
    pub name: String,
    /// Contact person
    pub contact_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Record type
    #[serde(rename = "type")]
    pub lead_type: LeadType,
    /// Priority tier
    pub priority: LeadPriority,
    /// Target team; defaulted by the client when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<OwnerField>,
    /// Source tag (custom extension field)
    pub x_source: LeadSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_emergency_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_heating_area: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_estimated_cost: Option<f64>,
}

impl NewLead {
    /// Create a lead with the required fields; everything else starts unset
    pub fn new(
        name: impl Into<String>,
        contact_name: impl Into<String>,
        lead_type: LeadType,
        priority: LeadPriority,
        source: LeadSource,
    ) -> Self {
        Self {
            name: name.into(),
            contact_name: contact_name.into(),
            email_from: None,
            phone: None,
            street: None,
            zip: None,
            city: None,
            description: None,
            lead_type,
            priority,
            team_id: None,
            user_id: None,
            x_source: source,
            x_service_type: None,
            x_property_type: None,
            x_emergency_type: None,
            x_heating_area: None,
            x_estimated_cost: None,
        }
    }
}

/// Result of a connection probe. Always returned, never thrown.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<i64>,
}

/// Result of a lead create call
#[derive(Debug, Clone, Serialize)]
pub struct LeadResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LeadResult {
    /// Successful creation with the backend-assigned id
    pub fn created(lead_id: i64) -> Self {
        Self {
            success: true,
            lead_id: Some(lead_id),
            error: None,
        }
    }

    /// Captured failure
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            lead_id: None,
            error: Some(error.into()),
        }
    }
}

/// Result of a mailing contact upsert
#[derive(Debug, Clone, Serialize)]
pub struct MailingContactResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MailingContactResult {
    /// Newly subscribed (created or linked)
    pub fn subscribed(contact_id: i64) -> Self {
        Self {
            success: true,
            contact_id: Some(contact_id),
            error: None,
        }
    }

    /// Idempotent repeat subscription, flagged with the sentinel value
    pub fn already_subscribed(contact_id: i64) -> Self {
        Self {
            success: true,
            contact_id: Some(contact_id),
            error: Some(ALREADY_SUBSCRIBED.to_string()),
        }
    }

    /// Captured failure
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            contact_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_serializes_as_string_enum() {
        assert_eq!(json!(LeadPriority::Low), json!("0"));
        assert_eq!(json!(LeadPriority::Normal), json!("1"));
        assert_eq!(json!(LeadPriority::High), json!("2"));
        assert_eq!(json!(LeadPriority::Urgent), json!("3"));
    }

    #[test]
    fn test_phone_tri_state() {
        let mut lead = NewLead::new(
            "Anfrage",
            "Max",
            LeadType::Lead,
            LeadPriority::Normal,
            LeadSource::ContactForm,
        );

        // Unset: key must not appear on the wire
        let value = serde_json::to_value(&lead).unwrap();
        assert!(value.get("phone").is_none());

        lead.phone = Some(PhoneField::Number("+49 171 0000000".into()));
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["phone"], json!("+49 171 0000000"));

        // Explicitly absent: key appears as false
        lead.phone = Some(PhoneField::Absent);
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["phone"], json!(false));
    }

    #[test]
    fn test_unset_fields_stripped() {
        let lead = NewLead::new(
            "Anfrage",
            "Max",
            LeadType::Opportunity,
            LeadPriority::High,
            LeadSource::QuoteRequest,
        );
        let value = serde_json::to_value(&lead).unwrap();

        assert_eq!(value["type"], json!("opportunity"));
        assert_eq!(value["x_source"], json!("quote_request"));
        for absent in [
            "email_from",
            "street",
            "zip",
            "city",
            "description",
            "team_id",
            "user_id",
            "x_service_type",
            "x_heating_area",
            "x_estimated_cost",
        ] {
            assert!(value.get(absent).is_none(), "{absent} should be stripped");
        }
    }

    #[test]
    fn test_owner_field_unassigned() {
        let mut lead = NewLead::new(
            "Anfrage",
            "Max",
            LeadType::Lead,
            LeadPriority::Normal,
            LeadSource::ContactForm,
        );
        lead.user_id = Some(OwnerField::Unassigned);
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["user_id"], json!(false));

        lead.user_id = Some(OwnerField::User(7));
        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["user_id"], json!(7));
    }
}
