//! Form submission endpoints
//!
//! Each handler checks the per-form quota, runs minimal validation, delegates
//! to the lead service and translates failures into safe user-facing
//! messages. Technical detail never leaves the log.

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::core::leads::{
    ContactForm, EmergencyForm, NewsletterForm, NewsletterResult, QuoteForm, SubmissionResult,
};
use crate::core::rate_limiter::{
    CONTACT_QUOTA, EMERGENCY_QUOTA, NEWSLETTER_QUOTA, QUOTE_QUOTA, RateLimitQuota,
};
use crate::server::state::AppState;
use crate::utils::error::GatewayError;

use super::client_identifier;

const RETRY_LATER: &str =
    "Ihre Anfrage konnte nicht übermittelt werden. Bitte versuchen Sie es später erneut.";
const NEWSLETTER_FAILED: &str =
    "Die Anmeldung ist fehlgeschlagen. Bitte versuchen Sie es später erneut.";

async fn enforce_quota(
    req: &HttpRequest,
    state: &AppState,
    endpoint: &str,
    quota: RateLimitQuota,
) -> Result<(), GatewayError> {
    let identifier = client_identifier(req);
    let limit = state
        .limiter
        .check_and_record(endpoint, &identifier, quota)
        .await;

    if !limit.allowed {
        debug!("{endpoint} request from {identifier} rate limited");
        return Err(GatewayError::RateLimit(limit.retry_after_secs.unwrap_or(1)));
    }
    Ok(())
}

fn require(value: &str, message: &str) -> Result<(), GatewayError> {
    if value.trim().is_empty() {
        return Err(GatewayError::validation(message));
    }
    Ok(())
}

fn require_email(value: &str) -> Result<(), GatewayError> {
    require(value, "E-Mail-Adresse fehlt")?;
    if !value.contains('@') {
        return Err(GatewayError::validation("Ungültige E-Mail-Adresse"));
    }
    Ok(())
}

fn submission_response(result: SubmissionResult, fallback: String) -> HttpResponse {
    if result.success {
        return HttpResponse::Ok().json(result);
    }
    // The service already logged the technical error
    HttpResponse::BadGateway().json(SubmissionResult::failure(fallback))
}

/// POST /api/contact
pub async fn submit_contact(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
) -> Result<HttpResponse, GatewayError> {
    enforce_quota(&req, &state, "contact", CONTACT_QUOTA).await?;

    let form = form.into_inner();
    require(&form.name, "Name fehlt")?;
    require_email(&form.email)?;
    require(&form.message, "Nachricht fehlt")?;

    let result = state.leads.submit_contact(form).await;
    Ok(submission_response(result, RETRY_LATER.to_string()))
}

/// POST /api/quote
pub async fn submit_quote(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<QuoteForm>,
) -> Result<HttpResponse, GatewayError> {
    enforce_quota(&req, &state, "quote", QUOTE_QUOTA).await?;

    let form = form.into_inner();
    require(&form.name, "Name fehlt")?;
    require_email(&form.email)?;

    let result = state.leads.submit_quote(form).await;
    Ok(submission_response(result, RETRY_LATER.to_string()))
}

/// POST /api/emergency
pub async fn submit_emergency(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<EmergencyForm>,
) -> Result<HttpResponse, GatewayError> {
    enforce_quota(&req, &state, "emergency", EMERGENCY_QUOTA).await?;

    let form = form.into_inner();
    require(&form.name, "Name fehlt")?;
    require(&form.phone, "Telefonnummer fehlt")?;
    require(&form.emergency_type, "Art des Notfalls fehlt")?;

    let result = state.leads.submit_emergency(form).await;
    // Emergency failures always point the user at the direct phone line
    let fallback = format!(
        "Ihre Notfall-Meldung konnte nicht übermittelt werden. Bitte rufen Sie uns direkt an: {}",
        state.config.emergency_phone
    );
    Ok(submission_response(result, fallback))
}

/// POST /api/newsletter
pub async fn subscribe_newsletter(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: web::Json<NewsletterForm>,
) -> Result<HttpResponse, GatewayError> {
    enforce_quota(&req, &state, "newsletter", NEWSLETTER_QUOTA).await?;

    let form = form.into_inner();
    require_email(&form.email)?;

    let result = state.leads.subscribe_newsletter(form).await;
    if result.success {
        return Ok(HttpResponse::Ok().json(result));
    }
    Ok(HttpResponse::BadGateway().json(NewsletterResult::failure(NEWSLETTER_FAILED)))
}
