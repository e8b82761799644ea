//! File-based task storage implementation
//!
//! Stores tasks as JSON in a file on disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, ObjectId, Result};

/// File-based task store using JSON
pub struct FileTaskStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks
    cache: RwLock<HashMap<ObjectId, Task>>,
}

impl FileTaskStore {
    /// Create a new FileTaskStore
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let tasks: Vec<Task> = serde_json::from_str(&content)?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<&Task> = cache.values().collect();
        tasks.sort_by_key(|t| t.id);
        let content = serde_json::to_string_pretty(&tasks)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for FileTaskStore {
    async fn create(&self, task: Task) -> Result<Task> {
        {
            let mut cache = self.cache.write().await;
            if cache.contains_key(&task.id) {
                return Err(Error::InvalidInput(format!(
                    "Task with ID {} already exists",
                    task.id
                )));
            }
            cache.insert(task.id, task.clone());
        }
        if let Err(err) = self.persist().await {
            self.cache.write().await.remove(&task.id);
            return Err(err);
        }
        Ok(task)
    }

    async fn get(&self, id: ObjectId) -> Result<Option<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache.values().cloned().collect();
        tasks.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Standard;
    use tempfile::TempDir;

    async fn create_test_store() -> (FileTaskStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        let store = FileTaskStore::new(&path).await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_create_and_get_task() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Home page", "http://example.com/");
        let id = task.id;
        store.create(task).await.unwrap();

        let retrieved = store.get(id).await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().name, "Home page");

        let missing = store.get(ObjectId::generate()).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_tasks_sorted_by_name() {
        let (store, _temp) = create_test_store().await;

        store.create(Task::new("Zeta", "http://z/")).await.unwrap();
        store.create(Task::new("Alpha", "http://a/")).await.unwrap();
        store.create(Task::new("Mid", "http://m/")).await.unwrap();

        let tasks = store.list().await.unwrap();
        let names: Vec<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");

        let task_id;

        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = Task::new("Persistent task", "http://example.com/")
                .with_standard(Standard::WCAG2AAA);
            task_id = task.id;
            store.create(task).await.unwrap();
        }

        {
            let store = FileTaskStore::new(&path).await.unwrap();
            let task = store.get(task_id).await.unwrap().unwrap();
            assert_eq!(task.name, "Persistent task");
            assert_eq!(task.standard, Standard::WCAG2AAA);
        }
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_cached_task() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = FileTaskStore::new(blocker.join("tasks.json")).await.unwrap();

        let task = Task::new("Unwritable", "http://example.com/");
        let id = task.id;
        assert!(store.create(task).await.is_err());

        assert!(store.get(id).await.unwrap().is_none());
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_task_error() {
        let (store, _temp) = create_test_store().await;

        let task = Task::new("Test task", "http://example.com/");
        store.create(task.clone()).await.unwrap();

        let result = store.create(task).await;
        match result.unwrap_err() {
            Error::InvalidInput(msg) => {
                assert!(msg.contains("already exists"));
            }
            e => panic!("Expected InvalidInput error, got: {:?}", e),
        }
    }
}
