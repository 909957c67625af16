//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves title, short URL and click count for a link.
///
/// # Endpoint
///
/// `GET /stats/{qr_id}`
///
/// # Response
///
/// ```json
/// { "title": "Home", "short_url": "https://s.ly/x1", "clicks": 3 }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the `qr_id` is not registered.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(qr_id): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&qr_id).await?;

    Ok(Json(stats.into()))
}
