//! QR code image service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::code_image::CodeImageEncoder;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Rendered code image together with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeImage {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Renders the code image for a registered link's `short_url`.
///
/// Rendering does not count as a click.
pub struct QrService<S: LinkStore, E: CodeImageEncoder> {
    store: Arc<S>,
    encoder: Arc<E>,
}

impl<S: LinkStore, E: CodeImageEncoder + 'static> QrService<S, E> {
    /// Creates a new QR service.
    pub fn new(store: Arc<S>, encoder: Arc<E>) -> Self {
        Self { store, encoder }
    }

    /// Renders the code image for `qr_id`.
    ///
    /// Encoding runs on the blocking thread pool.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `qr_id` is not registered.
    /// Returns [`AppError::Validation`] if the short URL does not fit a code symbol.
    /// Returns [`AppError::Internal`] if rendering fails.
    pub async fn render(&self, qr_id: &str) -> Result<CodeImage, AppError> {
        let short_url = self
            .store
            .load()
            .await?
            .link(qr_id)
            .map(|link| link.short_url.clone())
            .ok_or_else(|| AppError::not_found("QR code not found", json!({ "qr_id": qr_id })))?;

        let encoder = self.encoder.clone();
        let bytes = tokio::task::spawn_blocking(move || encoder.encode(&short_url))
            .await
            .map_err(|e| {
                AppError::internal(
                    "QR rendering task failed",
                    json!({ "reason": e.to_string() }),
                )
            })??;

        Ok(CodeImage {
            content_type: self.encoder.content_type(),
            bytes,
        })
    }
}
