//! Business logic services for the application layer.

pub mod qr_service;
pub mod registry_service;
pub mod resolution_service;
pub mod stats_service;

pub use qr_service::{CodeImage, QrService};
pub use registry_service::RegistryService;
pub use resolution_service::ResolutionService;
pub use stats_service::{StatsService, StoreSummary};
