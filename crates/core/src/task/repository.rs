//! Task repository trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;

use super::model::{Task, TaskDraft, TaskPatch};
use crate::Result;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Load the whole collection in insertion order
    async fn load(&self) -> Result<Vec<Task>>;

    /// Get a task by ID
    async fn get(&self, id: &str) -> Result<Option<Task>>;

    /// Create a new task with a freshly generated ID
    async fn create(&self, draft: TaskDraft) -> Result<Task>;

    /// Replace the supplied fields of an existing task
    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task>;

    /// Delete a task by ID, returning whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Load for display: failures are logged and yield an empty list
    async fn load_or_empty(&self) -> Vec<Task> {
        match self.load().await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!("Failed to load tasks, showing none: {}", err);
                Vec::new()
            }
        }
    }
}
