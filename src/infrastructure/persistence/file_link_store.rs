//! JSON file implementation of the link store.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "links": {
//!     "x1": { "title": "Home", "long_url": "https://example.com", "short_url": "https://s.ly/x1" }
//!   },
//!   "counters": { "x1": 3 }
//! }
//! ```
//!
//! ## Consistency
//!
//! - Writers serialize on one async mutex, acquired with a bounded wait
//! - Every commit writes a uniquely named temp file next to the target, fsyncs
//!   it and renames it over the target, so the file on disk is always a
//!   complete state; the directory is synced after the rename
//! - The committed state is kept in memory as an `Arc` snapshot; readers clone
//!   the `Arc` and never wait for disk I/O
//! - A commit runs on the blocking pool and owns the writer guard, so dropping
//!   the request future cannot leave disk and snapshot out of sync

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::json;
use tempfile::NamedTempFile;
use tokio::sync::{Mutex, OwnedMutexGuard};

use super::error::StoreError;
use crate::domain::entities::LinkState;
use crate::domain::repositories::{LinkStore, StateTransition};
use crate::error::AppError;

/// File-backed link store.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use qr_tracker::infrastructure::persistence::FileLinkStore;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let store = FileLinkStore::open("data.json", Duration::from_secs(5)).await?;
/// println!("state file: {}", store.path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FileLinkStore {
    path: PathBuf,
    snapshot: Arc<RwLock<Arc<LinkState>>>,
    write_lock: Arc<Mutex<()>>,
    lock_timeout: Duration,
}

impl FileLinkStore {
    /// Opens the store, loading any previously persisted state.
    ///
    /// Parent directories are created if needed. A missing file yields an
    /// empty store; nothing is written until the first mutation.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Io`] if the directory or file cannot be accessed
    /// - [`StoreError::Corrupt`] if the file is not a valid link state
    pub async fn open(path: impl AsRef<Path>, lock_timeout: Duration) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io("create directory", parent, e))?;
        }

        let state = Self::read_state(&path).await?;

        tracing::info!(
            path = %path.display(),
            links = state.links.len(),
            clicks = state.total_clicks(),
            "Link store opened"
        );

        Ok(Self {
            path,
            snapshot: Arc::new(RwLock::new(Arc::new(state))),
            write_lock: Arc::new(Mutex::new(())),
            lock_timeout,
        })
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Verifies that the directory holding the state file is still there.
    ///
    /// Reads are served from memory, so this is the only way to notice that
    /// the next commit is bound to fail.
    pub async fn check_access(&self) -> Result<(), StoreError> {
        let dir = parent_dir(&self.path);
        let metadata = tokio::fs::metadata(dir)
            .await
            .map_err(|e| StoreError::io("access", dir, e))?;

        if !metadata.is_dir() {
            return Err(StoreError::io(
                "access",
                dir,
                io::Error::other("not a directory"),
            ));
        }

        Ok(())
    }

    /// Reads and validates a state file.
    ///
    /// Returns an empty state if the file does not exist. Unparsable content
    /// and counters without a link are reported as [`StoreError::Corrupt`];
    /// the file is never silently reset.
    pub async fn read_state(path: &Path) -> Result<LinkState, StoreError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "State file does not exist, starting empty");
                return Ok(LinkState::default());
            }
            Err(e) => return Err(StoreError::io("read", path, e)),
        };

        let state: LinkState = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(path = %path.display(), error = %e, "State file is corrupt");
            StoreError::Corrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        if let Some(reason) = orphan_reason(&state) {
            tracing::error!(path = %path.display(), "{}", reason);
            return Err(StoreError::Corrupt {
                path: path.to_path_buf(),
                reason,
            });
        }

        Ok(state)
    }

    fn current(&self) -> LinkState {
        let snapshot = self.snapshot.read().clone();
        LinkState::clone(&snapshot)
    }

    async fn acquire(&self) -> Result<OwnedMutexGuard<()>, StoreError> {
        tokio::time::timeout(self.lock_timeout, self.write_lock.clone().lock_owned())
            .await
            .map_err(|_| {
                tracing::warn!(
                    timeout_ms = self.lock_timeout.as_millis() as u64,
                    "Timed out waiting for the link store lock"
                );
                StoreError::LockTimeout(self.lock_timeout)
            })
    }

    /// Persists `state` and publishes it as the new snapshot.
    ///
    /// Takes ownership of the writer guard; it is released only after the
    /// snapshot has been swapped.
    async fn commit(
        &self,
        guard: OwnedMutexGuard<()>,
        state: LinkState,
    ) -> Result<Arc<LinkState>, AppError> {
        if let Some(reason) = orphan_reason(&state) {
            return Err(AppError::internal(
                "Refusing to persist an inconsistent link state",
                json!({ "reason": reason }),
            ));
        }

        let path = self.path.clone();
        let snapshot = self.snapshot.clone();

        let committed = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            let state = Arc::new(state);

            if let Err(e) = write_state_file(&path, &state) {
                tracing::error!(path = %path.display(), error = %e, "Failed to persist link state");
                return Err(e);
            }

            *snapshot.write() = state.clone();
            tracing::debug!(
                path = %path.display(),
                links = state.links.len(),
                "Link state persisted"
            );
            Ok(state)
        })
        .await
        .map_err(|e| {
            AppError::internal(
                "Link store write task failed",
                json!({ "reason": e.to_string() }),
            )
        })??;

        Ok(committed)
    }
}

#[async_trait]
impl LinkStore for FileLinkStore {
    async fn load(&self) -> Result<Arc<LinkState>, AppError> {
        Ok(self.snapshot.read().clone())
    }

    async fn check(&self) -> Result<(), AppError> {
        Ok(self.check_access().await?)
    }

    async fn save(&self, state: LinkState) -> Result<(), AppError> {
        let guard = self.acquire().await?;
        self.commit(guard, state).await?;
        Ok(())
    }

    async fn with_lock(&self, transition: StateTransition) -> Result<Arc<LinkState>, AppError> {
        let guard = self.acquire().await?;
        let next = transition(self.current())?;
        self.commit(guard, next).await
    }
}

fn orphan_reason(state: &LinkState) -> Option<String> {
    let orphans = state.orphan_counters();
    if orphans.is_empty() {
        None
    } else {
        Some(format!(
            "counters without a registered link: {}",
            orphans.join(", ")
        ))
    }
}

/// Writes `state` to `path` via a synced temp file and an atomic rename.
///
/// The temp file gets a unique name in the target directory, so concurrent
/// writers never share it. On failure it is removed and `path` keeps its
/// previous content.
fn write_state_file(path: &Path, state: &LinkState) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(state)?;
    let dir = parent_dir(path);

    let mut temp =
        NamedTempFile::new_in(dir).map_err(|e| StoreError::io("create temp file in", dir, e))?;
    temp.write_all(&json)
        .map_err(|e| StoreError::io("write", temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io("sync", temp.path(), e))?;
    temp.persist(path)
        .map_err(|e| StoreError::io("replace", path, e.error))?;

    // The rename is done; a failed directory sync only weakens durability.
    if let Err(e) = sync_dir(dir) {
        tracing::warn!(dir = %dir.display(), error = %e, "Failed to sync data directory");
    }

    Ok(())
}

/// Directory holding `path`; `.` for a bare file name.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
