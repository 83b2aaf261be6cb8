use std::{future::Future, io, path::PathBuf, sync::Arc};

use anyhow::Context;
use portfolio_models::contact::ContactSubmission;
use portfolio_persistence_contracts::message_log::MessageLogRepository;
use tokio::{
    fs::{File, OpenOptions},
    io::{AsyncWrite, AsyncWriteExt},
    sync::Mutex,
};
use tracing::{error, trace};

pub mod record;

/// Message log backed by a plain text file, one tab separated record per
/// line.
#[derive(Debug, Clone)]
pub struct FileMessageLogRepository {
    path: Arc<PathBuf>,
    gate: Arc<Mutex<()>>,
}

impl FileMessageLogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            gate: Default::default(),
        }
    }
}

impl MessageLogRepository for FileMessageLogRepository {
    async fn append(&self, submission: &ContactSubmission) -> anyhow::Result<()> {
        let line = record::format(submission);

        // Held until the file is closed again, so lines of concurrent
        // submissions are written one after another.
        let _guard = self.gate.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path.as_path())
            .await
            .with_context(|| format!("could not open {}", self.path.display()))?;

        append_line(&mut file, line.as_bytes())
            .await
            .with_context(|| format!("could not append to {}", self.path.display()))?;

        trace!(path = %self.path.display(), bytes = line.len(), "appended message");

        Ok(())
    }
}

/// An append-only file that can be cut back to a previous length.
trait LogFile: AsyncWrite + Unpin + Send {
    fn len(&self) -> impl Future<Output = io::Result<u64>> + Send;
    fn truncate(&self, len: u64) -> impl Future<Output = io::Result<()>> + Send;
}

impl LogFile for File {
    async fn len(&self) -> io::Result<u64> {
        Ok(self.metadata().await?.len())
    }

    async fn truncate(&self, len: u64) -> io::Result<()> {
        self.set_len(len).await
    }
}

/// Writes `line` at the end of `file`. If the write fails, the file is cut
/// back to its previous length so no fragment of the line stays behind.
async fn append_line(file: &mut impl LogFile, line: &[u8]) -> io::Result<()> {
    let len = file.len().await?;

    let result = async {
        file.write_all(line).await?;
        file.flush().await
    }
    .await;

    if let Err(err) = &result {
        if let Err(truncate_err) = file.truncate(len).await {
            error!(
                "could not remove partial record after failed write ({err}): {truncate_err}"
            );
        }
    }

    result
}
