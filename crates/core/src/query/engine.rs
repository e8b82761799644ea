//! Result query engine
//!
//! Resolves the results of one task: identifier shape check, existence
//! check, window resolution, fetch, chronological sort and response shape.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::config::QueryConfig;
use super::params::FilterSpec;
use crate::result::{DateRange, ResultRepository, ResultView};
use crate::task::TaskRepository;
use crate::{Error, ObjectId, Result};

/// Stateless query engine over the task and result stores
#[derive(Clone)]
pub struct ResultQueryEngine {
    tasks: Arc<dyn TaskRepository>,
    results: Arc<dyn ResultRepository>,
    config: QueryConfig,
}

impl ResultQueryEngine {
    pub fn new(
        tasks: Arc<dyn TaskRepository>,
        results: Arc<dyn ResultRepository>,
        config: QueryConfig,
    ) -> Self {
        Self {
            tasks,
            results,
            config,
        }
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Get the results of a task, using the current time for the default window
    pub async fn get_results_for_task(
        &self,
        task_id: &str,
        filter: &FilterSpec,
    ) -> Result<Vec<ResultView>> {
        self.get_results_for_task_at(task_id, filter, Utc::now()).await
    }

    /// Get the results of a task as of `now`
    ///
    /// A malformed `task_id` is reported as [`Error::TaskNotFound`], the same
    /// as an id that matches no task.
    pub async fn get_results_for_task_at(
        &self,
        task_id: &str,
        filter: &FilterSpec,
        now: DateTime<Utc>,
    ) -> Result<Vec<ResultView>> {
        let id = ObjectId::parse(task_id)
            .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))?;

        if self.tasks.get(id).await?.is_none() {
            return Err(Error::TaskNotFound(task_id.to_string()));
        }

        let range = self.resolve_window(filter, now);
        debug!(
            task_id = %id,
            from = ?range.from,
            to = ?range.to,
            full = filter.full,
            "Resolved results window"
        );

        let mut results = self.results.find_by_task_id(id, range).await?;
        results.retain(|r| r.task_id == id);
        results.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));

        let views = if filter.full {
            results
                .into_iter()
                .map(|r| ResultView::Full(r.into_full()))
                .collect()
        } else {
            results
                .into_iter()
                .map(|r| ResultView::Summary(r.into_summary()))
                .collect()
        };

        Ok(views)
    }

    /// Missing bounds fall back to the default window ending at `now`
    fn resolve_window(&self, filter: &FilterSpec, now: DateTime<Utc>) -> DateRange {
        let from = filter.date_from.unwrap_or_else(|| {
            now.checked_sub_signed(self.config.default_window)
                .unwrap_or(DateTime::<Utc>::MIN_UTC)
        });
        let to = filter.date_to.unwrap_or(now);
        DateRange::new(from, to)
    }
}
