//! Link resolution and click accounting.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::LinkState;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;

/// Service resolving a `qr_id` to its redirect target.
///
/// Every successful resolution increments the link's counter by exactly one
/// inside a single store transaction, so concurrent resolutions never lose
/// updates.
pub struct ResolutionService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> ResolutionService<S> {
    /// Creates a new resolution service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Records a click and returns the `long_url` to redirect to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if `qr_id` is not registered (no counter changes).
    /// Returns [`AppError::Unavailable`] if the store lock times out.
    /// Returns [`AppError::Internal`] on persistence failures.
    pub async fn resolve(&self, qr_id: &str) -> Result<String, AppError> {
        // Links are never removed, so a miss in the snapshot is final and
        // unknown ids never queue on the writer lock.
        if self.store.load().await?.link(qr_id).is_none() {
            return Err(not_found(qr_id));
        }

        let key = qr_id.to_string();

        let committed = self
            .store
            .with_lock(Box::new(move |mut state: LinkState| {
                state
                    .record_click(&key)
                    .ok_or_else(|| not_found(&key))?;
                Ok(state)
            }))
            .await?;

        let link = committed.link(qr_id).ok_or_else(|| not_found(qr_id))?;

        tracing::debug!(qr_id, clicks = committed.clicks(qr_id), "Link resolved");

        Ok(link.long_url.clone())
    }
}

fn not_found(qr_id: &str) -> AppError {
    AppError::not_found("QR code not found", json!({ "qr_id": qr_id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewLink;
    use crate::domain::repositories::MockLinkStore;

    fn registered(qr_id: &str, clicks: u64) -> LinkState {
        let mut state = LinkState::default();
        state.upsert(NewLink::new(
            qr_id.to_string(),
            "Home".to_string(),
            "https://example.com".to_string(),
            format!("https://s.ly/{qr_id}"),
        ));
        state.counters.insert(qr_id.to_string(), clicks);
        state
    }

    fn snapshot(mock_store: &mut MockLinkStore, state: LinkState) {
        let state = Arc::new(state);
        mock_store
            .expect_load()
            .returning(move || Ok(state.clone()));
    }

    #[tokio::test]
    async fn test_resolve_increments_by_one() {
        let initial = registered("x1", 41);

        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, initial.clone());
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(move |transition| {
                let next = transition(initial.clone())?;
                assert_eq!(next.clicks("x1"), 42);
                Ok(Arc::new(next))
            });

        let service = ResolutionService::new(Arc::new(mock_store));

        let result = service.resolve("x1").await;

        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_skips_writer_lock() {
        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, registered("x1", 3));
        mock_store.expect_with_lock().times(0);

        let service = ResolutionService::new(Arc::new(mock_store));

        let result = service.resolve("missing").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_error_info().details["qr_id"], "missing");
    }

    #[tokio::test]
    async fn test_resolve_rechecks_inside_transaction() {
        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, registered("x1", 3));
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(|transition| transition(LinkState::default()).map(Arc::new));

        let service = ResolutionService::new(Arc::new(mock_store));

        let result = service.resolve("x1").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_propagates_busy() {
        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, registered("x1", 3));
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(|_| Err(AppError::unavailable("busy", json!({}))));

        let service = ResolutionService::new(Arc::new(mock_store));

        let result = service.resolve("x1").await;

        assert!(matches!(result.unwrap_err(), AppError::Unavailable { .. }));
    }
}
