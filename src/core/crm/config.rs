//! CRM connection configuration

use std::env;

/// Connection settings for the CRM backend.
///
/// The four connection values are optional on purpose: their absence is a
/// hard configuration failure surfaced on first use, not at startup.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    /// Backend base URL
    pub base_url: Option<String>,
    /// Database/tenant name
    pub database: Option<String>,
    /// Login username
    pub username: Option<String>,
    /// Credential / API key
    pub api_key: Option<String>,
    /// Default team for non-emergency leads
    pub sales_team_id: i64,
    /// Team that emergency leads are reassigned to
    pub emergency_team_id: i64,
    /// Mailing list that newsletter signups are linked to
    pub newsletter_list_id: i64,
    /// Request timeout (seconds)
    pub request_timeout: u64,
    /// Connection timeout (seconds)
    pub connect_timeout: u64,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            database: None,
            username: None,
            api_key: None,
            sales_team_id: 1,
            emergency_team_id: 2,
            newsletter_list_id: 1,
            request_timeout: 30,
            connect_timeout: 10,
        }
    }
}

impl CrmConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.base_url = env::var("CRM_BASE_URL").ok();
        config.database = env::var("CRM_DB").ok();
        config.username = env::var("CRM_USERNAME").ok();
        config.api_key = env::var("CRM_API_KEY").ok();

        if let Ok(team) = env::var("CRM_SALES_TEAM_ID") {
            config.sales_team_id = team.parse().unwrap_or(config.sales_team_id);
        }

        if let Ok(team) = env::var("CRM_EMERGENCY_TEAM_ID") {
            config.emergency_team_id = team.parse().unwrap_or(config.emergency_team_id);
        }

        if let Ok(list) = env::var("CRM_NEWSLETTER_LIST_ID") {
            config.newsletter_list_id = list.parse().unwrap_or(config.newsletter_list_id);
        }

        if let Ok(timeout) = env::var("CRM_TIMEOUT") {
            config.request_timeout = timeout.parse().unwrap_or(config.request_timeout);
        }

        if let Ok(timeout) = env::var("CRM_CONNECT_TIMEOUT") {
            config.connect_timeout = timeout.parse().unwrap_or(config.connect_timeout);
        }

        config
    }

    /// Set the backend base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the database name
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the login username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the default sales team
    pub fn with_sales_team_id(mut self, team_id: i64) -> Self {
        self.sales_team_id = team_id;
        self
    }

    /// Set the emergency team
    pub fn with_emergency_team_id(mut self, team_id: i64) -> Self {
        self.emergency_team_id = team_id;
        self
    }

    /// Set the newsletter mailing list
    pub fn with_newsletter_list_id(mut self, list_id: i64) -> Self {
        self.newsletter_list_id = list_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CrmConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.api_key.is_none());
        assert_eq!(config.sales_team_id, 1);
        assert_eq!(config.emergency_team_id, 2);
        assert_eq!(config.newsletter_list_id, 1);
        assert_eq!(config.request_timeout, 30);
    }

    #[test]
    fn test_builder_setters() {
        let config = CrmConfig::default()
            .with_base_url("https://crm.example.com")
            .with_database("prod")
            .with_username("website@example.com")
            .with_api_key("secret")
            .with_sales_team_id(3)
            .with_emergency_team_id(9)
            .with_newsletter_list_id(4);

        assert_eq!(config.base_url.as_deref(), Some("https://crm.example.com"));
        assert_eq!(config.database.as_deref(), Some("prod"));
        assert_eq!(config.sales_team_id, 3);
        assert_eq!(config.emergency_team_id, 9);
        assert_eq!(config.newsletter_list_id, 4);
    }
}
