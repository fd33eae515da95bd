//! # lead-gateway
//!
//! Lead capture gateway for a heating & sanitary service website. Bridges
//! pre-validated form submissions (contact, quote, emergency, newsletter) to
//! an Odoo-style CRM backend over its JSON-RPC protocol, guarded by a
//! per-form in-memory rate limiter.
//!
//! ## Library usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lead_gateway::core::crm::{CrmClient, CrmConfig};
//! use lead_gateway::core::leads::{LeadService, NewsletterForm};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let crm = Arc::new(CrmClient::new(CrmConfig::from_env())?);
//!     let leads = LeadService::new(crm);
//!
//!     let result = leads
//!         .subscribe_newsletter(NewsletterForm { email: "max@example.com".into() })
//!         .await;
//!     println!("subscribed: {}", result.success);
//!     Ok(())
//! }
//! ```
//!
//! ## Server mode
//!
//! The `lead-gateway` binary serves `POST /api/{contact,quote,emergency,
//! newsletter}` plus `GET /health` and a CRM connection probe.

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::ServerConfig;
pub use core::crm::{CrmClient, CrmConfig, CrmError};
pub use core::leads::LeadService;
pub use core::rate_limiter::RateLimiter;
pub use utils::error::{GatewayError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
