//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - File-backed [`crate::domain::repositories::LinkStore`]
//! - [`imaging`] - QR code PNG rendering for [`crate::domain::code_image::CodeImageEncoder`]

pub mod imaging;
pub mod persistence;
