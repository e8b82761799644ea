//! File-based result storage implementation
//!
//! Results are appended as JSON lines and cached in memory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;
use tracing::warn;

use super::model::TaskResult;
use super::repository::{DateRange, ResultRepository};
use crate::{Error, ObjectId, Result};

/// Append-only result store backed by a JSONL file
pub struct FileResultStore {
    path: PathBuf,
    results: RwLock<Vec<TaskResult>>,
}

impl FileResultStore {
    /// Open the store, loading any results already on disk
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let results = if fs::metadata(&path).await.is_ok() {
            Self::load_results(&path).await?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            results: RwLock::new(results),
        })
    }

    async fn load_results(path: &Path) -> Result<Vec<TaskResult>> {
        let file = fs::File::open(path).await?;
        let mut reader = BufReader::new(file).lines();
        let mut results = Vec::new();

        while let Some(line) = reader.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<TaskResult>(&line) {
                Ok(result) => results.push(result),
                Err(err) => warn!(
                    "Ignoring malformed result record in {}: {}",
                    path.display(),
                    err
                ),
            }
        }

        Ok(results)
    }

    /// Number of stored results
    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }
}

#[async_trait]
impl ResultRepository for FileResultStore {
    async fn append(&self, result: TaskResult) -> Result<TaskResult> {
        let mut state = self.results.write().await;
        if state.iter().any(|r| r.id == result.id) {
            return Err(Error::InvalidInput(format!(
                "Result with ID {} already exists",
                result.id
            )));
        }

        let encoded = serde_json::to_string(&result)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(encoded.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;

        state.push(result.clone());
        Ok(result)
    }

    async fn find_by_task_id(
        &self,
        task_id: ObjectId,
        range: DateRange,
    ) -> Result<Vec<TaskResult>> {
        let state = self.results.read().await;
        Ok(state
            .iter()
            .filter(|r| r.task_id == task_id && range.contains(r.date))
            .cloned()
            .collect())
    }
}
