//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`               - Liveness text
//! - `GET  /health`         - Store readiness and totals
//! - `GET  /r/{qr_id}`      - Redirect and count a click
//! - `GET  /qr/{qr_id}`     - Code image
//! - `GET  /stats/{qr_id}`  - Click statistics
//! - `POST /register`       - Create or update a link
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Timeout** - Requests exceeding the configured limit get `408`
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, home_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the served application: [`router`] plus request timeout and
/// trailing slash normalization.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = router(state).layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        request_timeout,
    ));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
