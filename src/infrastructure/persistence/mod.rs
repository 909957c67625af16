//! Link store implementations.
//!
//! # Stores
//!
//! - [`FileLinkStore`] - Single JSON file with atomic replace and an in-memory snapshot
//!
//! Errors are reported as [`StoreError`] and converted into
//! [`crate::error::AppError`] at the service boundary.

pub mod error;
pub mod file_link_store;

pub use error::StoreError;
pub use file_link_store::FileLinkStore;
