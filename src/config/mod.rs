//! Server configuration
//!
//! HTTP-facing settings loaded from the environment. CRM connection settings
//! live in [`crate::core::crm::CrmConfig`].

use std::env;

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Phone number shown to users when an emergency submission fails
    pub emergency_phone: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            emergency_phone: "+49 821 567890".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            config.port = port.parse().unwrap_or(config.port);
        }

        if let Ok(phone) = env::var("EMERGENCY_PHONE") {
            config.emergency_phone = phone;
        }

        config
    }
}
