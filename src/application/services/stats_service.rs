//! Click statistics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::LinkStats;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Totals across the whole registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSummary {
    pub links: usize,
    pub clicks: u64,
}

/// Read-only access to link metadata and click counts.
///
/// Reads the store's committed snapshot and never takes the writer lock.
pub struct StatsService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> StatsService<S> {
    /// Creates a new statistics service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Retrieves title, short URL and click count for one link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `qr_id` is not registered.
    pub async fn get_stats(&self, qr_id: &str) -> Result<LinkStats, AppError> {
        self.store
            .load()
            .await?
            .stats(qr_id)
            .ok_or_else(|| AppError::not_found("QR code not found", json!({ "qr_id": qr_id })))
    }

    /// Retrieves stats for every registered link, ordered by `qr_id`.
    pub async fn list_stats(&self) -> Result<Vec<LinkStats>, AppError> {
        Ok(self.store.load().await?.all_stats())
    }

    /// Checks that the store can still persist, then reports totals.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage location is unreachable.
    pub async fn readiness(&self) -> Result<StoreSummary, AppError> {
        self.store.check().await?;
        self.summary().await
    }

    /// Counts links and total clicks.
    pub async fn summary(&self) -> Result<StoreSummary, AppError> {
        let state = self.store.load().await?;

        Ok(StoreSummary {
            links: state.links.len(),
            clicks: state.total_clicks(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Link, LinkState, NewLink};
    use crate::domain::repositories::MockLinkStore;

    fn sample_state() -> LinkState {
        let mut state = LinkState::default();
        for (qr_id, title, clicks) in [("x1", "Home", 3), ("a2", "Promo", 4)] {
            state.upsert(NewLink::new(
                qr_id.to_string(),
                title.to_string(),
                "https://example.com".to_string(),
                format!("https://s.ly/{qr_id}"),
            ));
            state.counters.insert(qr_id.to_string(), clicks);
        }
        state
    }

    fn store_with(state: LinkState) -> MockLinkStore {
        let state = Arc::new(state);
        let mut mock_store = MockLinkStore::new();
        mock_store
            .expect_load()
            .returning(move || Ok(state.clone()));
        mock_store.expect_with_lock().times(0);
        mock_store
    }

    #[tokio::test]
    async fn test_get_stats_success() {
        let service = StatsService::new(Arc::new(store_with(sample_state())));

        let stats = service.get_stats("x1").await.unwrap();

        assert_eq!(stats.title, "Home");
        assert_eq!(stats.short_url, "https://s.ly/x1");
        assert_eq!(stats.clicks, 3);
    }

    #[tokio::test]
    async fn test_get_stats_is_idempotent() {
        let service = StatsService::new(Arc::new(store_with(sample_state())));

        let first = service.get_stats("x1").await.unwrap();
        let second = service.get_stats("x1").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let service = StatsService::new(Arc::new(store_with(sample_state())));

        let result = service.get_stats("missing").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_stats_missing_counter_defaults_to_zero() {
        let mut state = LinkState::default();
        state.links.insert(
            "legacy".to_string(),
            Link::new(
                "Legacy".to_string(),
                "https://example.com".to_string(),
                "https://s.ly/legacy".to_string(),
            ),
        );

        let service = StatsService::new(Arc::new(store_with(state)));

        let stats = service.get_stats("legacy").await.unwrap();

        assert_eq!(stats.clicks, 0);
    }

    #[tokio::test]
    async fn test_list_stats_sorted() {
        let service = StatsService::new(Arc::new(store_with(sample_state())));

        let all = service.list_stats().await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].qr_id, "a2");
        assert_eq!(all[1].qr_id, "x1");
    }

    #[tokio::test]
    async fn test_summary() {
        let service = StatsService::new(Arc::new(store_with(sample_state())));

        let summary = service.summary().await.unwrap();

        assert_eq!(summary, StoreSummary { links: 2, clicks: 7 });
    }

    #[tokio::test]
    async fn test_readiness_reports_totals() {
        let mut mock_store = store_with(sample_state());
        mock_store.expect_check().times(1).returning(|| Ok(()));

        let service = StatsService::new(Arc::new(mock_store));

        let summary = service.readiness().await.unwrap();

        assert_eq!(summary, StoreSummary { links: 2, clicks: 7 });
    }

    #[tokio::test]
    async fn test_readiness_fails_when_store_is_unreachable() {
        let mut mock_store = store_with(sample_state());
        mock_store
            .expect_check()
            .times(1)
            .returning(|| Err(AppError::internal("gone", json!({}))));

        let service = StatsService::new(Arc::new(mock_store));

        let result = service.readiness().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
