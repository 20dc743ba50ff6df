//! Signal persistence for the MT5 file consumer.

use crate::models::SignalRecord;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persistence seam for signal records.
///
/// The terminal-side contract is one resource per symbol, named
/// `{symbol}-signal.txt`, content `payload|timestamp`, overwritten on each
/// write.
#[async_trait]
pub trait SignalStore: Send + Sync {
    /// Write the record for its symbol, replacing any prior record.
    /// Failures are surfaced to the caller, not retried.
    async fn persist(&self, record: &SignalRecord) -> io::Result<()>;
}

/// File-backed store writing into the terminal's MQL5/Files directory.
pub struct FileSignalStore {
    dir: PathBuf,
}

impl FileSignalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the signal directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Destination file for a symbol's signal record.
    pub fn file_path(&self, symbol: &str) -> PathBuf {
        self.dir.join(format!("{}-signal.txt", symbol))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SignalStore for FileSignalStore {
    async fn persist(&self, record: &SignalRecord) -> io::Result<()> {
        let path = self.file_path(&record.symbol);
        info!(symbol = %record.symbol, path = %path.display(), "Writing signal file");
        tokio::fs::write(&path, record.encode()).await
    }
}
