//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::core::crm::CrmClient;
use crate::core::leads::LeadService;
use crate::core::rate_limiter::RateLimiter;

/// HTTP server state shared across handlers.
///
/// All fields are wrapped in Arc for sharing across workers. The CRM client
/// and rate limiter are constructed once at process start and injected, so
/// session lifetime and limiter state are explicit and resettable in tests.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (shared read-only)
    pub config: Arc<ServerConfig>,
    /// CRM client owning the backend session
    pub crm: Arc<CrmClient>,
    /// Lead submission service
    pub leads: Arc<LeadService>,
    /// Per-form request quota guard
    pub limiter: Arc<RateLimiter>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: ServerConfig, crm: CrmClient) -> Self {
        let crm = Arc::new(crm);
        Self {
            config: Arc::new(config),
            leads: Arc::new(LeadService::new(crm.clone())),
            crm,
            limiter: Arc::new(RateLimiter::new()),
        }
    }
}
