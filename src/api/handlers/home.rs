//! Liveness endpoint.

/// Plain-text liveness check.
///
/// `GET /`
pub async fn home_handler() -> &'static str {
    "QR tracker is running!"
}
