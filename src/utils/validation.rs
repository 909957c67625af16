//! Registration input validation.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;
use url::Url;

use crate::domain::entities::NewLink;
use crate::error::AppError;

/// Maximum length of a `qr_id`.
pub const MAX_QR_ID_LEN: usize = 64;

/// Maximum length of a `short_url` in bytes.
///
/// Stays under the 1273-byte capacity of a version 40 code at error
/// correction level H, so every registered link can be rendered.
pub const MAX_SHORT_URL_LEN: usize = 1024;

/// URL-safe identifier: ASCII letters, digits, `-` and `_`.
static QR_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Validates all registration fields.
///
/// # Rules
///
/// - `qr_id`, `title`, `long_url`, `short_url` must be non-empty
/// - `qr_id` must be URL-safe and at most 64 characters
/// - `long_url` must be an absolute `http` or `https` URL
/// - `short_url` must be at most 1024 bytes
///
/// Expects already trimmed input (see [`NewLink::trimmed`]).
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming the first offending field.
pub fn validate_new_link(new_link: &NewLink) -> Result<(), AppError> {
    require_non_empty("qr_id", &new_link.qr_id)?;
    require_non_empty("title", &new_link.title)?;
    require_non_empty("long_url", &new_link.long_url)?;
    require_non_empty("short_url", &new_link.short_url)?;

    validate_qr_id(&new_link.qr_id)?;
    validate_long_url(&new_link.long_url)?;
    validate_short_url(&new_link.short_url)
}

/// Fails if `value` is empty.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::bad_request(
            format!("Field '{field}' is required"),
            json!({ "field": field }),
        ));
    }

    Ok(())
}

/// Validates that a `qr_id` can be used verbatim as a URL path segment.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_qr_id("promo-2024_a").is_ok());
/// assert!(validate_qr_id("has space").is_err());
/// assert!(validate_qr_id("a/b").is_err());
/// ```
pub fn validate_qr_id(qr_id: &str) -> Result<(), AppError> {
    if qr_id.len() > MAX_QR_ID_LEN {
        return Err(AppError::bad_request(
            format!("qr_id must be at most {MAX_QR_ID_LEN} characters"),
            json!({ "field": "qr_id", "provided_length": qr_id.len() }),
        ));
    }

    if !QR_ID_REGEX.is_match(qr_id) {
        return Err(AppError::bad_request(
            "qr_id may only contain letters, digits, hyphens and underscores",
            json!({ "field": "qr_id", "qr_id": qr_id }),
        ));
    }

    Ok(())
}

/// Validates the redirect target.
pub fn validate_long_url(long_url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(long_url).map_err(|e| {
        AppError::bad_request(
            "long_url must be an absolute URL",
            json!({ "field": "long_url", "reason": e.to_string() }),
        )
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::bad_request(
            "long_url must use http or https",
            json!({ "field": "long_url", "scheme": scheme }),
        )),
    }
}

/// Validates that the code payload fits into a single QR symbol.
pub fn validate_short_url(short_url: &str) -> Result<(), AppError> {
    if short_url.len() > MAX_SHORT_URL_LEN {
        return Err(AppError::bad_request(
            format!("short_url must be at most {MAX_SHORT_URL_LEN} bytes"),
            json!({ "field": "short_url", "provided_length": short_url.len() }),
        ));
    }

    Ok(())
}
