//! QR code rendering to PNG.

use std::io::Cursor;

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use serde_json::json;

use crate::domain::code_image::CodeImageEncoder;
use crate::error::AppError;

/// Pixels per QR module.
const MODULE_SIZE: u32 = 8;

/// Renders QR codes as grayscale PNG images.
///
/// - Error correction level H (about 30% of the symbol can be damaged)
/// - Symbol version chosen automatically from the payload length
/// - 8x8 pixel modules with the standard 4-module quiet zone
#[derive(Debug, Clone)]
pub struct QrPngEncoder {
    module_size: u32,
}

impl QrPngEncoder {
    pub fn new() -> Self {
        Self {
            module_size: MODULE_SIZE,
        }
    }
}

impl Default for QrPngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeImageEncoder for QrPngEncoder {
    fn content_type(&self) -> &'static str {
        "image/png"
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, AppError> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H).map_err(|e| {
            AppError::bad_request(
                "Text cannot be encoded as a QR code",
                json!({ "reason": e.to_string(), "length": text.len() }),
            )
        })?;

        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png).map_err(|e| {
            AppError::internal("Failed to write PNG image", json!({ "reason": e.to_string() }))
        })?;

        Ok(png.into_inner())
    }
}
