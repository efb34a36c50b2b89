//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: repository wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and
/// the black-box tests).
///
/// Each call constructs a fresh set of services, so every server gets
/// its own repository with its own id sequence.
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
