//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::Task;
use crate::{ObjectId, Result};

/// Repository interface for task lookups
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Record a new task
    async fn create(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: ObjectId) -> Result<Option<Task>>;

    /// Get all tasks
    async fn list(&self) -> Result<Vec<Task>>;
}
