//! Handler for QR code redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a scanned QR code to its target URL.
///
/// # Endpoint
///
/// `GET /r/{qr_id}`
///
/// # Click Tracking
///
/// The click counter is incremented and persisted before the response is
/// sent, so a `302` means the click has been recorded.
///
/// # Errors
///
/// Returns 404 Not Found if the `qr_id` is not registered.
/// Returns 503 Service Unavailable if the store is busy.
pub async fn redirect_handler(
    Path(qr_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.resolution_service.resolve(&qr_id).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, long_url)]))
}
