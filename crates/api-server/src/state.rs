//! Application state

use std::path::{Path, PathBuf};
use std::sync::Arc;

use a11y_core::query::{QueryConfig, ResultQueryEngine};
use a11y_core::result::FileResultStore;
use a11y_core::task::FileTaskStore;

use crate::config::ServiceConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    data_dir: PathBuf,
    task_store: Arc<FileTaskStore>,
    result_store: Arc<FileResultStore>,
    engine: ResultQueryEngine,
}

impl AppState {
    /// Create a new AppState backed by files in the configured data directory
    pub async fn new(config: &ServiceConfig) -> a11y_core::Result<Self> {
        let task_store = Arc::new(FileTaskStore::new(config.tasks_path()).await?);
        let result_store = Arc::new(FileResultStore::new(config.results_path()).await?);
        Ok(Self::with_stores(
            config.data_dir.clone(),
            task_store,
            result_store,
            config.query,
        ))
    }

    pub fn with_stores(
        data_dir: PathBuf,
        task_store: Arc<FileTaskStore>,
        result_store: Arc<FileResultStore>,
        query: QueryConfig,
    ) -> Self {
        let engine = ResultQueryEngine::new(task_store.clone(), result_store.clone(), query);
        Self {
            inner: Arc::new(AppStateInner {
                data_dir,
                task_store,
                result_store,
                engine,
            }),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.inner.data_dir
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &FileTaskStore {
        &self.inner.task_store
    }

    /// Get reference to the result store
    pub fn result_store(&self) -> &FileResultStore {
        &self.inner.result_store
    }

    pub fn engine(&self) -> &ResultQueryEngine {
        &self.inner.engine
    }

    /// Same stores, but results are looked up through `results`
    #[cfg(test)]
    pub fn with_result_repository(
        &self,
        results: Arc<dyn a11y_core::result::ResultRepository>,
    ) -> Self {
        let engine = ResultQueryEngine::new(
            self.inner.task_store.clone(),
            results,
            *self.inner.engine.config(),
        );
        Self {
            inner: Arc::new(AppStateInner {
                data_dir: self.inner.data_dir.clone(),
                task_store: Arc::clone(&self.inner.task_store),
                result_store: Arc::clone(&self.inner.result_store),
                engine,
            }),
        }
    }
}
