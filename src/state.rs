//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{QrService, RegistryService, ResolutionService, StatsService};
use crate::infrastructure::imaging::QrPngEncoder;
use crate::infrastructure::persistence::FileLinkStore;

/// Services wired to one [`FileLinkStore`].
///
/// Cloning is cheap: every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry_service: Arc<RegistryService<FileLinkStore>>,
    pub resolution_service: Arc<ResolutionService<FileLinkStore>>,
    pub stats_service: Arc<StatsService<FileLinkStore>>,
    pub qr_service: Arc<QrService<FileLinkStore, QrPngEncoder>>,
}

impl AppState {
    pub fn new(store: Arc<FileLinkStore>, encoder: Arc<QrPngEncoder>) -> Self {
        Self {
            registry_service: Arc::new(RegistryService::new(store.clone())),
            resolution_service: Arc::new(ResolutionService::new(store.clone())),
            stats_service: Arc::new(StatsService::new(store.clone())),
            qr_service: Arc::new(QrService::new(store, encoder)),
        }
    }
}
