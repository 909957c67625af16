//! Handler for link registration endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::register::{RegisterRequest, RegisterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new link or updates an existing one.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// {
///   "qr_id": "x1",
///   "title": "Home",
///   "long_url": "https://example.com",
///   "short_url": "https://s.ly/x1"
/// }
/// ```
///
/// Re-registering an existing `qr_id` replaces its metadata and keeps its
/// click count.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or a field is
/// missing or malformed.
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    state.registry_service.register(payload.into()).await?;

    Ok(Json(RegisterResponse::ok()))
}
