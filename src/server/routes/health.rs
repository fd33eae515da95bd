//! Health check endpoint

use actix_web::HttpResponse;
use serde_json::json;

/// Basic health check, used by load balancers and uptime monitoring
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
