//! Shared helpers for integration tests
//!
//! Provides a CRM client wired against a wiremock backend plus canned
//! JSON-RPC envelopes.

#![allow(dead_code)]

use lead_gateway::core::crm::{CrmClient, CrmConfig};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sales team 1, emergency team 7, newsletter list 3
pub fn test_config(base_url: &str) -> CrmConfig {
    CrmConfig::default()
        .with_base_url(base_url)
        .with_database("test")
        .with_username("integration@example.com")
        .with_api_key("secret")
        .with_sales_team_id(1)
        .with_emergency_team_id(7)
        .with_newsletter_list_id(3)
}

pub fn test_client(base_url: &str) -> CrmClient {
    CrmClient::new(test_config(base_url)).expect("failed to build CRM client")
}

/// Successful JSON-RPC envelope
pub fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": null,
        "result": result,
    }))
}

/// Error envelope in the backend's shape: generic message plus nested detail
pub fn rpc_error(detail: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": null,
        "error": {
            "code": 200,
            "message": "Odoo Server Error",
            "data": { "message": detail },
        }
    }))
}

/// Mount a successful authentication response (uid 2)
pub async fn mount_authentication(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/web/session/authenticate"))
        .respond_with(rpc_result(json!({ "uid": 2, "session_id": "sid-1" })))
        .mount(server)
        .await;
}

/// Find the first execute call for the given model/method and return its
/// parsed request body.
pub async fn find_call(server: &MockServer, model: &str, rpc_method: &str) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");

    requests
        .iter()
        .filter(|request| request.url.path() == "/web/dataset/call_kw")
        .map(|request| {
            serde_json::from_slice::<Value>(&request.body).expect("request body is JSON")
        })
        .find(|body| {
            body["params"]["model"] == json!(model) && body["params"]["method"] == json!(rpc_method)
        })
        .unwrap_or_else(|| panic!("no {model}.{rpc_method} call was issued"))
}

/// Count requests against the authentication endpoint
pub async fn authentication_calls(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .filter(|request| request.url.path() == "/web/session/authenticate")
        .count()
}
