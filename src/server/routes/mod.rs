//! HTTP route modules

pub mod crm;
pub mod forms;
pub mod health;

use actix_web::{HttpRequest, web};

/// Configure all routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .route("/contact", web::post().to(forms::submit_contact))
                .route("/quote", web::post().to(forms::submit_quote))
                .route("/emergency", web::post().to(forms::submit_emergency))
                .route("/newsletter", web::post().to(forms::subscribe_newsletter))
                .route("/crm/test", web::get().to(crm::test_connection)),
        );
}

/// Stable client identifier for rate limiting, derived from the forwarded
/// address when present, else the peer address.
pub(super) fn client_identifier(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}
