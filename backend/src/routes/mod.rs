//! Route definitions for the RSH Network API
//!
//! This module organizes all API routes and applies middleware. Resource
//! routes keep the paths existing clients call, so they live at the root
//! rather than under a version prefix.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod appointments;
mod catalog;
mod consultants;
mod health;
mod reviews;
mod tokens;
mod users;

#[cfg(test)]
mod auth_tests;

pub use appointments::appointment_routes;
pub use catalog::catalog_routes;
pub use consultants::consultant_routes;
pub use reviews::review_routes;
pub use tokens::token_routes;
pub use users::user_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .merge(token_routes())
        .merge(user_routes())
        .merge(consultant_routes())
        .merge(appointment_routes())
        .merge(review_routes())
        .merge(catalog_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Root greeting
async fn root() -> &'static str {
    "RSH Network Server"
}
