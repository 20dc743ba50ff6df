//! Test utilities for API server integration tests

use axum_test::TestServer;
use sigbridge::config::Config;
use sigbridge::core::http::{create_router, AppState};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Test helper wiring a full server against a scratch signal directory.
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub state: AppState,
    pub signal_dir: PathBuf,
}

impl TestApiServer {
    pub async fn new() -> Self {
        let app = Self::build(Self::scratch_path()).await;
        app.state.store.ensure_dir().await.expect("create signal dir");
        app
    }

    /// Server whose signal directory path is occupied by a regular file,
    /// so every signal write fails with an I/O error.
    pub async fn with_unwritable_store() -> Self {
        let signal_dir = Self::scratch_path();
        tokio::fs::write(&signal_dir, "not a directory")
            .await
            .expect("create blocking file");
        Self::build(signal_dir).await
    }

    fn scratch_path() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .subsec_nanos();
        std::env::temp_dir().join(format!(
            "sigbridge-it-{}-{}",
            std::process::id(),
            nanos
        ))
    }

    async fn build(signal_dir: PathBuf) -> Self {
        let config = Config {
            port: 0,
            signal_files_dir: signal_dir.clone(),
            symbols: vec!["xauusd".to_string(), "us100".to_string()],
        };

        let state = AppState::new(&config);

        let app = create_router(state.clone());
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            state,
            signal_dir,
        }
    }

    /// Content of the persisted signal file for a symbol, if any.
    pub async fn signal_file(&self, symbol: &str) -> Option<String> {
        tokio::fs::read_to_string(self.signal_dir.join(format!("{}-signal.txt", symbol)))
            .await
            .ok()
    }
}

impl Drop for TestApiServer {
    fn drop(&mut self) {
        // The path is a directory normally, a plain file for the
        // unwritable-store variant.
        let _ = std::fs::remove_dir_all(&self.signal_dir);
        let _ = std::fs::remove_file(&self.signal_dir);
    }
}
