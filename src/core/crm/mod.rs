//! CRM backend integration
//!
//! Session-based JSON-RPC client for the remote business backend: lazy
//! authentication with a process-lifetime cached uid, a generic execute
//! primitive, and never-throw operations for leads and mailing contacts.

mod client;
mod config;
mod error;
mod models;

pub use client::CrmClient;
pub use config::CrmConfig;
pub use error::CrmError;
pub use models::{
    ALREADY_SUBSCRIBED, ConnectionStatus, LeadPriority, LeadResult, LeadSource, LeadType,
    MailingContactResult, NewLead, OwnerField, PhoneField,
};
