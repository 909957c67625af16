//! Handler for QR code images.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Returns the QR code image encoding the link's short URL.
///
/// # Endpoint
///
/// `GET /qr/{qr_id}`
///
/// Does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the `qr_id` is not registered.
pub async fn qr_handler(
    Path(qr_id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let image = state.qr_service.render(&qr_id).await?;

    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes))
}
