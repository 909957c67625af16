//! Store trait for the link registry and its click counters.

use std::sync::Arc;

use crate::domain::entities::LinkState;
use crate::error::AppError;
use async_trait::async_trait;

/// A state-to-state function applied under the store's exclusive lock.
///
/// Returning an error aborts the transaction: nothing is persisted and the
/// error is handed back to the caller of [`LinkStore::with_lock`].
pub type StateTransition = Box<dyn FnOnce(LinkState) -> Result<LinkState, AppError> + Send>;

/// Durable, consistent storage for links and click counters.
///
/// All mutations go through [`LinkStore::with_lock`], which serializes
/// load-modify-save cycles so concurrent increments are never lost. Reads use
/// [`LinkStore::load`] and only ever see fully committed states.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileLinkStore`] - JSON file with atomic replace
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Returns the last committed state.
    ///
    /// An empty state is returned when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the persisted state cannot be read.
    async fn load(&self) -> Result<Arc<LinkState>, AppError>;

    /// Verifies that the backing storage can still accept commits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage location is unreachable.
    async fn check(&self) -> Result<(), AppError>;

    /// Replaces the whole persisted state atomically.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the lock cannot be acquired in time.
    /// Returns [`AppError::Internal`] on write failures; the previous state stays intact.
    async fn save(&self, state: LinkState) -> Result<(), AppError>;

    /// Runs `transition` on the current state and persists its result as one
    /// indivisible step with respect to every other writer.
    ///
    /// Returns the newly committed state.
    ///
    /// # Errors
    ///
    /// - Any error returned by `transition` (nothing is persisted)
    /// - [`AppError::Unavailable`] if the lock cannot be acquired in time
    /// - [`AppError::Internal`] on write failures
    async fn with_lock(&self, transition: StateTransition) -> Result<Arc<LinkState>, AppError>;
}
