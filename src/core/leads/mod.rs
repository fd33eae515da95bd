//! Lead submission service
//!
//! Form payload contracts and the submission-type-specific policy that turns
//! them into CRM lead records or mailing operations.

mod forms;
mod service;

pub use forms::{
    ContactForm, EmergencyForm, NewsletterForm, NewsletterResult, QuoteForm, SubmissionResult,
};
pub use service::LeadService;
