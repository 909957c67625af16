//! Code image encoding contract.

use crate::error::AppError;

/// Turns a piece of text into a scannable image.
///
/// Encoding is a pure, CPU-bound transform; callers run it off the async
/// executor (see [`crate::application::services::QrService`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::imaging::QrPngEncoder`] - QR code rendered as PNG
#[cfg_attr(test, mockall::automock)]
pub trait CodeImageEncoder: Send + Sync {
    /// MIME type of the bytes produced by [`CodeImageEncoder::encode`].
    fn content_type(&self) -> &'static str;

    /// Encodes `text` into image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the text does not fit into a code symbol.
    /// Returns [`AppError::Internal`] if the image cannot be serialized.
    fn encode(&self, text: &str) -> Result<Vec<u8>, AppError>;
}
