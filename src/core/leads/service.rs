//! Lead submission service
//!
//! Translates form-shaped business data into lead records or mailing
//! operations and applies submission-type-specific policy. Mirrors the CRM
//! client's never-throw contract: every operation returns a structured result.

use std::sync::Arc;

use tracing::warn;

use crate::core::crm::{
    ALREADY_SUBSCRIBED, CrmClient, LeadPriority, LeadSource, LeadType, NewLead, PhoneField,
};

use super::forms::{
    ContactForm, EmergencyForm, NewsletterForm, NewsletterResult, QuoteForm, SubmissionResult,
};

/// Service wrapping the CRM client for the four website form types
pub struct LeadService {
    crm: Arc<CrmClient>,
}

impl LeadService {
    /// Create a service over a shared CRM client
    pub fn new(crm: Arc<CrmClient>) -> Self {
        Self { crm }
    }

    /// Submit a contact inquiry as a normal-priority lead
    pub async fn submit_contact(&self, form: ContactForm) -> SubmissionResult {
        let subject = form.subject.as_deref().unwrap_or("Allgemeine Anfrage");
        let mut lead = NewLead::new(
            format!("Kontaktanfrage: {subject}"),
            form.name,
            LeadType::Lead,
            LeadPriority::Normal,
            LeadSource::ContactForm,
        );
        lead.email_from = Some(form.email);
        lead.phone = form.phone.map(PhoneField::Number);
        lead.description = Some(form.message);

        self.finish("contact", self.crm.create_lead(lead).await)
    }

    /// Submit a quote request as a high-priority opportunity
    pub async fn submit_quote(&self, form: QuoteForm) -> SubmissionResult {
        let service = form.service_type.as_deref().unwrap_or("Heizung");
        let mut lead = NewLead::new(
            format!("Angebotsanfrage: {service}"),
            form.name.clone(),
            LeadType::Opportunity,
            LeadPriority::High,
            LeadSource::QuoteRequest,
        );
        lead.email_from = Some(form.email.clone());
        lead.phone = form.phone.clone().map(PhoneField::Number);
        lead.description = Some(build_quote_description(&form));
        lead.x_service_type = form.service_type.clone();
        lead.x_property_type = form.property_type.clone();
        lead.x_heating_area = form.heating_area.as_deref().and_then(parse_number);
        lead.x_estimated_cost = form.estimated_cost.as_deref().and_then(parse_number);

        self.finish("quote", self.crm.create_lead(lead).await)
    }

    /// Submit an emergency request; the CRM client escalates the source tag
    /// to urgent priority and the emergency team.
    pub async fn submit_emergency(&self, form: EmergencyForm) -> SubmissionResult {
        let mut lead = NewLead::new(
            format!("NOTFALL: {}", form.emergency_type),
            form.name.clone(),
            LeadType::Lead,
            LeadPriority::Urgent,
            LeadSource::EmergencyService,
        );
        lead.phone = Some(PhoneField::Number(form.phone.clone()));
        lead.street = form.address.clone();
        lead.zip = form.postal_code.clone();
        lead.description = Some(build_emergency_description(&form));
        lead.x_emergency_type = Some(form.emergency_type);

        self.finish("emergency", self.crm.create_lead(lead).await)
    }

    /// Subscribe an email address to the newsletter list. A repeat
    /// subscription is a success with an informational message, not an error.
    pub async fn subscribe_newsletter(&self, form: NewsletterForm) -> NewsletterResult {
        let result = self.crm.create_mailing_contact(&form.email).await;

        if result.success {
            if result.error.as_deref() == Some(ALREADY_SUBSCRIBED) {
                return NewsletterResult::ok("Diese E-Mail-Adresse ist bereits angemeldet.");
            }
            return NewsletterResult::ok("Vielen Dank für Ihre Anmeldung!");
        }

        let error = result
            .error
            .unwrap_or_else(|| "newsletter subscription failed".to_string());
        warn!("newsletter subscription failed: {error}");
        NewsletterResult::failure(error)
    }

    fn finish(&self, kind: &str, result: crate::core::crm::LeadResult) -> SubmissionResult {
        match (result.success, result.lead_id) {
            (true, Some(lead_id)) => SubmissionResult::created(
                lead_id,
                "Ihre Anfrage wurde erfolgreich übermittelt.",
            ),
            _ => {
                let error = result
                    .error
                    .unwrap_or_else(|| format!("{kind} submission failed"));
                warn!("{kind} submission failed: {error}");
                SubmissionResult::failure(error)
            }
        }
    }
}

/// Build the multi-section quote description. Sections for absent fields are
/// omitted entirely, never rendered as empty placeholders.
fn build_quote_description(form: &QuoteForm) -> String {
    let mut sections = Vec::new();

    let mut property = Vec::new();
    if let Some(kind) = &form.property_type {
        property.push(format!("Objektart: {kind}"));
    }
    if let Some(area) = &form.heating_area {
        property.push(format!("Beheizte Fläche: {area} m²"));
    }
    if !property.is_empty() {
        sections.push(format!("Objektdaten:\n{}", property.join("\n")));
    }

    if let Some(pump) = &form.pump_type {
        sections.push(format!("Wärmepumpe:\nTyp: {pump}"));
    }

    if let Some(cost) = form.estimated_cost.as_deref().and_then(parse_number) {
        sections.push(format!("Geschätztes Budget: {}", format_eur(cost)));
    }

    if let Some(time) = &form.preferred_contact_time {
        sections.push(format!("Bevorzugte Kontaktzeit: {time}"));
    }

    if let Some(message) = &form.message {
        sections.push(format!("Nachricht:\n{message}"));
    }

    sections.join("\n\n")
}

/// Build the emergency description: attention marker first, call-back
/// instruction last.
fn build_emergency_description(form: &EmergencyForm) -> String {
    let mut lines = vec![
        "⚠️ NOTFALL - SOFORTIGE BEARBEITUNG ERFORDERLICH".to_string(),
        String::new(),
        format!("Notfall-Art: {}", form.emergency_type),
    ];

    match (&form.address, &form.postal_code) {
        (Some(address), Some(postal_code)) => {
            lines.push(format!("Adresse: {address}, {postal_code}"));
        }
        (Some(address), None) => lines.push(format!("Adresse: {address}")),
        (None, Some(postal_code)) => lines.push(format!("PLZ: {postal_code}")),
        (None, None) => {}
    }

    if let Some(details) = &form.description {
        lines.push(format!("Beschreibung: {details}"));
    }

    lines.push(String::new());
    lines.push("Bitte umgehend zurückrufen!".to_string());
    lines.join("\n")
}

/// Parse a user-entered number, accepting a German decimal comma.
/// Returns None for anything that is not a valid number.
fn parse_number(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format an amount as a German-locale EUR string, e.g. `12.500,00 €`
fn format_eur(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}{grouped},{frac:02} €")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_form() -> QuoteForm {
        QuoteForm {
            name: "Max Mustermann".into(),
            email: "max@example.com".into(),
            phone: None,
            service_type: Some("Wärmepumpe".into()),
            property_type: Some("Einfamilienhaus".into()),
            heating_area: Some("120".into()),
            pump_type: None,
            estimated_cost: Some("15000".into()),
            preferred_contact_time: None,
            message: Some("Bitte um Rückruf".into()),
        }
    }

    #[test]
    fn test_quote_description_omits_absent_pump_section() {
        let form = quote_form();
        let description = build_quote_description(&form);

        assert!(description.contains("Beheizte Fläche: 120 m²"));
        assert!(!description.contains("Wärmepumpe:"));
    }

    #[test]
    fn test_quote_description_includes_pump_section_when_present() {
        let mut form = quote_form();
        form.pump_type = Some("Luft-Wasser".into());
        let description = build_quote_description(&form);

        assert!(description.contains("Wärmepumpe:\nTyp: Luft-Wasser"));
    }

    #[test]
    fn test_quote_description_formats_budget() {
        let form = quote_form();
        let description = build_quote_description(&form);

        assert!(description.contains("Geschätztes Budget: 15.000,00 €"));
    }

    #[test]
    fn test_quote_description_empty_form_has_no_placeholders() {
        let form = QuoteForm {
            name: "Max".into(),
            email: "max@example.com".into(),
            phone: None,
            service_type: None,
            property_type: None,
            heating_area: None,
            pump_type: None,
            estimated_cost: None,
            preferred_contact_time: None,
            message: None,
        };
        assert_eq!(build_quote_description(&form), "");
    }

    #[test]
    fn test_emergency_description_marker_and_callback() {
        let form = EmergencyForm {
            name: "Max Mustermann".into(),
            phone: "+49 171 0000000".into(),
            address: Some("Hauptstraße 1".into()),
            postal_code: Some("86150".into()),
            emergency_type: "rohrbruch".into(),
            description: Some("Wasser läuft im Keller".into()),
        };
        let description = build_emergency_description(&form);

        assert!(description.starts_with("⚠️ NOTFALL"));
        assert!(description.contains("Notfall-Art: rohrbruch"));
        assert!(description.contains("Adresse: Hauptstraße 1, 86150"));
        assert!(description.contains("Wasser läuft im Keller"));
        assert!(description.ends_with("Bitte umgehend zurückrufen!"));
    }

    #[test]
    fn test_parse_number_accepts_decimal_comma() {
        assert_eq!(parse_number("120"), Some(120.0));
        assert_eq!(parse_number(" 89,5 "), Some(89.5));
        assert_eq!(parse_number("ca. 120"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_format_eur_grouping() {
        assert_eq!(format_eur(15000.0), "15.000,00 €");
        assert_eq!(format_eur(899.5), "899,50 €");
        assert_eq!(format_eur(1234567.89), "1.234.567,89 €");
        assert_eq!(format_eur(0.0), "0,00 €");
    }
}
