//! # QR Tracker
//!
//! A link registry for printed QR codes: each code points at `/r/{qr_id}`,
//! which counts the scan and redirects to the registered target.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Link state, store and encoder traits
//! - **Application Layer** ([`application`]) - Registration, resolution, statistics, images
//! - **Infrastructure Layer** ([`infrastructure`]) - JSON file store and PNG rendering
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Upsert registration that keeps existing click counts
//! - Lost-update-free click counting under concurrent scans
//! - Crash-safe persistence (temp file + fsync + rename)
//! - PNG code rendering with high error correction
//! - `qr-admin` CLI working on the same data file
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_FILE="data.json"
//! cargo run
//!
//! curl -X POST localhost:5000/register -H 'content-type: application/json' \
//!   -d '{"qr_id":"x1","title":"Home","long_url":"https://example.com","short_url":"https://s.ly/x1"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        QrService, RegistryService, ResolutionService, StatsService,
    };
    pub use crate::domain::entities::{Link, LinkState, LinkStats, NewLink, Registration};
    pub use crate::error::AppError;
    pub use crate::infrastructure::imaging::QrPngEncoder;
    pub use crate::infrastructure::persistence::FileLinkStore;
    pub use crate::state::AppState;
}
