//! Core business modules: CRM client, lead submission service, rate limiter

pub mod crm;
pub mod leads;
pub mod rate_limiter;
