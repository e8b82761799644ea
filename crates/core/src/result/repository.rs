//! Result repository trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::TaskResult;
use crate::{ObjectId, Result};

/// Inclusive date window; a missing bound is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| from <= date) && self.to.map_or(true, |to| date <= to)
    }
}

/// Repository interface for recorded results
///
/// Results are append-only. Implementations filter by owning task and
/// window; callers own ordering.
#[async_trait]
pub trait ResultRepository: Send + Sync {
    /// Record a new result
    async fn append(&self, result: TaskResult) -> Result<TaskResult>;

    /// Find results belonging to a task whose date falls inside `range`
    async fn find_by_task_id(
        &self,
        task_id: ObjectId,
        range: DateRange,
    ) -> Result<Vec<TaskResult>>;
}
