//! HTTP boundary
//!
//! Thin actix-web layer in front of the lead submission service: request
//! handlers validate untrusted input, apply the per-form quota and translate
//! results into user-facing responses.

pub mod builder;
pub mod routes;
pub mod state;

pub use builder::run_server;
pub use state::AppState;
