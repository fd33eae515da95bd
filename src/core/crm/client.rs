//! CRM backend client
//!
//! Owns the authenticated JSON-RPC session and exposes a generic execute
//! primitive plus the three named operations built on it.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, Response};
use serde_json::{Map, Value, json};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use super::config::CrmConfig;
use super::error::CrmError;
use super::models::{ConnectionStatus, LeadPriority, LeadResult, MailingContactResult, NewLead};

/// Cached authenticated identity. Either fully populated from the last
/// successful authentication or fully empty, never partial.
#[derive(Debug, Default)]
struct Session {
    uid: Option<i64>,
    session_id: Option<String>,
}

/// Client for the CRM backend's JSON-RPC endpoints.
///
/// One instance owns one session for the process lifetime. Authentication is
/// lazy; the session mutex is held across the authentication call, so
/// concurrent first requests serialize behind a single in-flight attempt.
/// There is no session-expiry detection: a session lives until restart.
pub struct CrmClient {
    config: CrmConfig,
    http_client: Client,
    session: Mutex<Session>,
}

impl CrmClient {
    /// Create a client. Connection settings are not validated here; missing
    /// values surface as configuration errors on first use.
    pub fn new(config: CrmConfig) -> Result<Self, CrmError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()?;

        Ok(Self {
            config,
            http_client,
            session: Mutex::new(Session::default()),
        })
    }

    /// Connection settings in use
    pub fn config(&self) -> &CrmConfig {
        &self.config
    }

    fn endpoint_url(&self, path: &str) -> Result<String, CrmError> {
        let base = self
            .config
            .base_url
            .as_deref()
            .ok_or_else(|| CrmError::configuration("CRM_BASE_URL is not set"))?;
        Ok(format!("{}{}", base.trim_end_matches('/'), path))
    }

    /// Return the cached uid, authenticating on first use.
    async fn ensure_authenticated(&self) -> Result<i64, CrmError> {
        let mut session = self.session.lock().await;
        if let Some(uid) = session.uid {
            return Ok(uid);
        }

        match self.authenticate().await {
            Ok((uid, session_id)) => {
                info!(uid, "authenticated against CRM backend");
                session.uid = Some(uid);
                session.session_id = session_id;
                Ok(uid)
            }
            Err(err) => {
                // Clear any partial state; callers get the generic failure
                // while the specific cause stays in the log.
                *session = Session::default();
                if err.is_configuration() {
                    error!("CRM configuration error: {err}");
                } else {
                    error!("CRM authentication failed: {err}");
                }
                Err(CrmError::Authentication)
            }
        }
    }

    async fn authenticate(&self) -> Result<(i64, Option<String>), CrmError> {
        let url = self.endpoint_url("/web/session/authenticate")?;
        let db = self
            .config
            .database
            .as_deref()
            .ok_or_else(|| CrmError::configuration("CRM_DB is not set"))?;
        let login = self
            .config
            .username
            .as_deref()
            .ok_or_else(|| CrmError::configuration("CRM_USERNAME is not set"))?;
        let password = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| CrmError::configuration("CRM_API_KEY is not set"))?;

        let body = json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": {
                "db": db,
                "login": login,
                "password": password,
            }
        });

        let response = self.http_client.post(&url).json(&body).send().await?;
        let result = self.handle_response(response).await?;

        let uid = result
            .get("uid")
            .and_then(Value::as_i64)
            .filter(|uid| *uid > 0)
            .ok_or_else(|| CrmError::remote("authentication response carried no user id"))?;
        let session_id = result
            .get("session_id")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok((uid, session_id))
    }

    /// Merge the fixed locale/timezone context into caller kwargs.
    ///
    /// Precedence is explicit: defaults (`lang`, `tz`, `uid`) are applied
    /// first, caller-supplied `context` keys override them on conflict.
    fn merge_context(kwargs: Map<String, Value>, uid: i64) -> Map<String, Value> {
        let mut merged = kwargs;

        let mut context = Map::new();
        context.insert("lang".to_string(), json!("de_DE"));
        context.insert("tz".to_string(), json!("Europe/Berlin"));
        context.insert("uid".to_string(), json!(uid));

        if let Some(Value::Object(caller)) = merged.remove("context") {
            for (key, value) in caller {
                context.insert(key, value);
            }
        }

        merged.insert("context".to_string(), Value::Object(context));
        merged
    }

    /// Generic remote procedure call against the backend's execute endpoint.
    ///
    /// Authenticates lazily. Raises on any failure; internal callers wrap
    /// this into never-throw results at the operation boundary.
    pub async fn execute(
        &self,
        model: &str,
        method: &str,
        args: Vec<Value>,
        kwargs: Map<String, Value>,
    ) -> Result<Value, CrmError> {
        let uid = self.ensure_authenticated().await?;
        let url = self.endpoint_url("/web/dataset/call_kw")?;
        let kwargs = Self::merge_context(kwargs, uid);

        debug!(model, method, "executing CRM call");

        let body = json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": {
                "model": model,
                "method": method,
                "args": args,
                "kwargs": kwargs,
            }
        });

        let response = self.http_client.post(&url).json(&body).send().await?;
        self.handle_response(response).await
    }

    /// Unwrap the JSON-RPC envelope, surfacing the backend message when the
    /// response carries an error object.
    async fn handle_response(&self, response: Response) -> Result<Value, CrmError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(CrmError::remote(format!("backend returned HTTP {status}")));
        }

        let envelope: Value = serde_json::from_str(&text)?;
        if let Some(error) = envelope.get("error") {
            return Err(CrmError::remote(Self::backend_message(error)));
        }

        Ok(envelope.get("result").cloned().unwrap_or(Value::Null))
    }

    fn backend_message(error: &Value) -> String {
        error
            .get("data")
            .and_then(|data| data.get("message"))
            .and_then(Value::as_str)
            .or_else(|| error.get("message").and_then(Value::as_str))
            .map(str::to_owned)
            .unwrap_or_else(|| "remote execution failed".to_string())
    }

    /// Probe the backend connection. Never throws; failures come back as a
    /// result with a human-readable message.
    pub async fn test_connection(&self) -> ConnectionStatus {
        match self.ensure_authenticated().await {
            Ok(uid) => ConnectionStatus {
                success: true,
                message: format!("Connected to CRM backend as uid {uid}"),
                uid: Some(uid),
            },
            Err(err) => ConnectionStatus {
                success: false,
                message: err.to_string(),
                uid: None,
            },
        }
    }

    /// Create a lead record. Never throws.
    ///
    /// Applies the team default, and for emergency-sourced records forces
    /// urgent priority plus the emergency team regardless of caller input.
    pub async fn create_lead(&self, mut lead: NewLead) -> LeadResult {
        if lead.team_id.is_none() {
            lead.team_id = Some(self.config.sales_team_id);
        }
        if lead.x_source.is_emergency() {
            lead.team_id = Some(self.config.emergency_team_id);
            lead.priority = LeadPriority::Urgent;
        }

        let payload = match serde_json::to_value(&lead) {
            Ok(payload) => payload,
            Err(err) => return LeadResult::failure(err.to_string()),
        };

        match self
            .execute("crm.lead", "create", vec![payload], Map::new())
            .await
        {
            Ok(result) => match result.as_i64() {
                Some(lead_id) => {
                    info!(lead_id, source = ?lead.x_source, "created CRM lead");
                    LeadResult::created(lead_id)
                }
                None => LeadResult::failure("create call returned no record id"),
            },
            Err(err) => {
                error!("failed to create CRM lead: {err}");
                LeadResult::failure(err.to_string())
            }
        }
    }

    /// Create or link a mailing contact for the configured newsletter list.
    /// Never throws.
    ///
    /// An existing contact already on the list is reported as success with
    /// the `already_subscribed` sentinel. An existing contact on other lists
    /// is linked additively; prior memberships stay intact.
    pub async fn create_mailing_contact(&self, email: &str) -> MailingContactResult {
        match self.upsert_mailing_contact(email).await {
            Ok(result) => result,
            Err(err) => {
                error!("failed to upsert mailing contact: {err}");
                MailingContactResult::failure(err.to_string())
            }
        }
    }

    async fn upsert_mailing_contact(&self, email: &str) -> Result<MailingContactResult, CrmError> {
        let list_id = self.config.newsletter_list_id;

        let mut kwargs = Map::new();
        kwargs.insert("fields".to_string(), json!(["id", "list_ids"]));
        kwargs.insert("limit".to_string(), json!(1));
        let domain = json!([["email", "=", email]]);

        let found = self
            .execute("mailing.contact", "search_read", vec![domain], kwargs)
            .await?;

        if let Some(record) = found.as_array().and_then(|records| records.first()) {
            let contact_id = record
                .get("id")
                .and_then(Value::as_i64)
                .ok_or_else(|| CrmError::remote("search returned a record without id"))?;

            let on_list = record
                .get("list_ids")
                .and_then(Value::as_array)
                .is_some_and(|ids| ids.iter().any(|id| id.as_i64() == Some(list_id)));

            if on_list {
                debug!(contact_id, "mailing contact already subscribed");
                return Ok(MailingContactResult::already_subscribed(contact_id));
            }

            // Link operation 4 adds to the list without touching other memberships
            let values = json!({ "list_ids": [[4, list_id]] });
            self.execute(
                "mailing.contact",
                "write",
                vec![json!([contact_id]), values],
                Map::new(),
            )
            .await?;

            info!(contact_id, list_id, "linked existing mailing contact");
            return Ok(MailingContactResult::subscribed(contact_id));
        }

        let values = json!({ "email": email, "list_ids": [[4, list_id]] });
        let created = self
            .execute("mailing.contact", "create", vec![values], Map::new())
            .await?;
        let contact_id = created
            .as_i64()
            .ok_or_else(|| CrmError::remote("create call returned no record id"))?;

        info!(contact_id, list_id, "created mailing contact");
        Ok(MailingContactResult::subscribed(contact_id))
    }
}
