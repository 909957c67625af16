//! DTOs for link registration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::NewLink;

/// Request to register or update a link.
///
/// Missing fields deserialize to empty strings so they are reported as
/// validation errors rather than JSON rejections.
///
/// The derived rules only check presence. Trimming and the content rules
/// (`qr_id` charset, URL schemes, lengths) live in
/// [`validate_new_link`](crate::utils::validation::validate_new_link), which
/// the registry service applies to every caller.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "qr_id is required"))]
    pub qr_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "long_url is required"))]
    pub long_url: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "short_url is required"))]
    pub short_url: String,
}

impl From<RegisterRequest> for NewLink {
    fn from(request: RegisterRequest) -> Self {
        NewLink::new(
            request.qr_id,
            request.title,
            request.long_url,
            request.short_url,
        )
    }
}

/// Body returned after a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
}

impl RegisterResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
