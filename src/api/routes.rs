//! API route configuration.

use crate::api::handlers::{qr_handler, redirect_handler, register_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link registry routes. None require authentication.
///
/// # Endpoints
///
/// - `GET  /r/{qr_id}`     - Redirect to `long_url`, counting one click
/// - `GET  /qr/{qr_id}`    - PNG code image for the link's `short_url`
/// - `GET  /stats/{qr_id}` - Title, short URL and click count
/// - `POST /register`      - Create or update a link
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/r/{qr_id}", get(redirect_handler))
        .route("/qr/{qr_id}", get(qr_handler))
        .route("/stats/{qr_id}", get(stats_handler))
        .route("/register", post(register_handler))
}
