#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use qr_tracker::domain::entities::NewLink;
use qr_tracker::infrastructure::imaging::QrPngEncoder;
use qr_tracker::infrastructure::persistence::FileLinkStore;
use qr_tracker::state::AppState;
use tempfile::TempDir;

/// State backed by a fresh data file in a temp directory.
///
/// Keep the returned [`TempDir`] alive for the duration of the test.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<FileLinkStore>,
    pub dir: TempDir,
}

impl TestContext {
    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }
}

pub async fn create_test_state() -> TestContext {
    let dir = tempfile::tempdir().unwrap();
    let store = FileLinkStore::open(dir.path().join("data.json"), Duration::from_secs(5))
        .await
        .unwrap();
    let store = Arc::new(store);

    let state = AppState::new(store.clone(), Arc::new(QrPngEncoder::default()));

    TestContext { state, store, dir }
}

pub async fn create_test_link(state: &AppState, qr_id: &str, long_url: &str) {
    state
        .registry_service
        .register(NewLink::new(
            qr_id.to_string(),
            format!("Title {qr_id}"),
            long_url.to_string(),
            format!("https://s.ly/{qr_id}"),
        ))
        .await
        .unwrap();
}

pub async fn create_test_clicks(state: &AppState, qr_id: &str, clicks: u64) {
    for _ in 0..clicks {
        state.resolution_service.resolve(qr_id).await.unwrap();
    }
}

/// Reads the persisted data file as raw JSON.
pub async fn read_data_file(ctx: &TestContext) -> serde_json::Value {
    let raw = tokio::fs::read_to_string(ctx.data_file()).await.unwrap();
    serde_json::from_str(&raw).unwrap()
}
