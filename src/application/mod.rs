//! Application layer services implementing business logic.
//!
//! Services validate input and run every state change as one transaction
//! against the [`LinkStore`](crate::domain::repositories::LinkStore) trait,
//! so handlers and the admin CLI share the same rules.
//!
//! # Available Services
//!
//! - [`services::registry_service::RegistryService`] - Link registration (upsert)
//! - [`services::resolution_service::ResolutionService`] - Redirect resolution and click counting
//! - [`services::stats_service::StatsService`] - Per-link and aggregate click statistics
//! - [`services::qr_service::QrService`] - Code image rendering

pub mod services;
