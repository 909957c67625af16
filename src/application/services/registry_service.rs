//! Link registration service.

use std::sync::Arc;

use crate::domain::entities::{LinkState, NewLink, Registration};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::validation::validate_new_link;

/// Service for registering links.
///
/// Registration is an upsert: metadata is replaced on every call, while the
/// click counter is created at 0 only the first time a `qr_id` is seen.
pub struct RegistryService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> RegistryService<S> {
    /// Creates a new registry service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Registers or updates a link.
    ///
    /// Input is trimmed and validated before the store is touched, so invalid
    /// input never creates a link.
    ///
    /// The returned outcome is read from the snapshot before the write; two
    /// racing first registrations of one `qr_id` may both report `Created`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is missing or malformed.
    /// Returns [`AppError::Unavailable`] if the store lock times out.
    /// Returns [`AppError::Internal`] on persistence failures.
    pub async fn register(&self, new_link: NewLink) -> Result<Registration, AppError> {
        let new_link = new_link.trimmed();
        validate_new_link(&new_link)?;

        let qr_id = new_link.qr_id.clone();
        let outcome = if self.store.load().await?.link(&qr_id).is_some() {
            Registration::Updated
        } else {
            Registration::Created
        };

        self.store
            .with_lock(Box::new(move |mut state: LinkState| {
                state.upsert(new_link);
                Ok(state)
            }))
            .await?;

        tracing::info!(qr_id = %qr_id, ?outcome, "Link registered");

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Link;
    use crate::domain::repositories::MockLinkStore;
    use serde_json::json;

    fn new_link(qr_id: &str, title: &str) -> NewLink {
        NewLink::new(
            qr_id.to_string(),
            title.to_string(),
            "https://example.com".to_string(),
            format!("https://s.ly/{qr_id}"),
        )
    }

    fn snapshot(mock_store: &mut MockLinkStore, state: LinkState) {
        let state = Arc::new(state);
        mock_store
            .expect_load()
            .returning(move || Ok(state.clone()));
    }

    /// Mock store whose transaction runs against `initial` and returns the result.
    fn store_with(initial: LinkState) -> MockLinkStore {
        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, initial.clone());
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(move |transition| transition(initial.clone()).map(Arc::new));
        mock_store
    }

    #[tokio::test]
    async fn test_register_new_link() {
        let service = RegistryService::new(Arc::new(store_with(LinkState::default())));

        let result = service.register(new_link("x1", "Home")).await;

        assert_eq!(result.unwrap(), Registration::Created);
    }

    #[tokio::test]
    async fn test_register_existing_link_is_update() {
        let mut initial = LinkState::default();
        initial.upsert(new_link("abc", "Old"));
        initial.counters.insert("abc".to_string(), 5);

        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, initial.clone());
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(move |transition| {
                let next = transition(initial.clone())?;
                assert_eq!(next.clicks("abc"), 5);
                assert_eq!(next.link("abc").unwrap().title, "New");
                Ok(Arc::new(next))
            });

        let service = RegistryService::new(Arc::new(mock_store));

        let result = service.register(new_link("abc", "New")).await;

        assert_eq!(result.unwrap(), Registration::Updated);
    }

    #[tokio::test]
    async fn test_register_trims_input() {
        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, LinkState::default());
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(|transition| {
                let next = transition(LinkState::default())?;
                assert_eq!(
                    next.link("x1"),
                    Some(&Link::new(
                        "Home".to_string(),
                        "https://example.com".to_string(),
                        "https://s.ly/x1".to_string(),
                    ))
                );
                Ok(Arc::new(next))
            });

        let service = RegistryService::new(Arc::new(mock_store));

        let result = service
            .register(NewLink::new(
                " x1 ".to_string(),
                " Home ".to_string(),
                " https://example.com".to_string(),
                "https://s.ly/x1 ".to_string(),
            ))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_register_empty_title_touches_nothing() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_with_lock().times(0);

        let service = RegistryService::new(Arc::new(mock_store));

        let result = service.register(new_link("x1", "   ")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_invalid_qr_id() {
        let mut mock_store = MockLinkStore::new();
        mock_store.expect_with_lock().times(0);

        let service = RegistryService::new(Arc::new(mock_store));

        let result = service.register(new_link("a/b", "Home")).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_register_propagates_store_errors() {
        let mut mock_store = MockLinkStore::new();
        snapshot(&mut mock_store, LinkState::default());
        mock_store
            .expect_with_lock()
            .times(1)
            .returning(|_| Err(AppError::unavailable("busy", json!({}))));

        let service = RegistryService::new(Arc::new(mock_store));

        let result = service.register(new_link("x1", "Home")).await;

        assert!(matches!(result.unwrap_err(), AppError::Unavailable { .. }));
    }
}
