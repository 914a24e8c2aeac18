//! Key/value backed task store
//!
//! Stores the whole task collection as one JSON array under a single storage
//! key. Every mutation reads the entire collection, changes it in memory and
//! writes it back.
//!
//! There is no locking. Two mutations running concurrently against the same
//! key can interleave their read and write halves, in which case the later
//! write silently discards the earlier one. A `TaskStore` must only ever have
//! one writer at a time.

use async_trait::async_trait;
use std::collections::HashSet;

use super::model::{Task, TaskDraft, TaskPatch};
use super::repository::TaskRepository;
use crate::config::{CorruptStorePolicy, RepositoryConfig};
use crate::id::{IdGenerator, UuidGenerator};
use crate::storage::StorageAdapter;
use crate::{Error, Result};

/// Task repository persisting through a [`StorageAdapter`]
pub struct TaskStore<S, G = UuidGenerator> {
    storage: S,
    ids: G,
    config: RepositoryConfig,
}

impl<S: StorageAdapter> TaskStore<S> {
    /// Create a new TaskStore with the default configuration
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, RepositoryConfig::default())
    }

    /// Create a new TaskStore with the given configuration
    pub fn with_config(storage: S, config: RepositoryConfig) -> Self {
        Self {
            storage,
            ids: UuidGenerator,
            config,
        }
    }
}

impl<S, G> TaskStore<S, G> {
    /// Replace the identifier generator
    pub fn with_id_generator<H: IdGenerator>(self, ids: H) -> TaskStore<S, H> {
        TaskStore {
            storage: self.storage,
            ids,
            config: self.config,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: StorageAdapter, G: IdGenerator> TaskStore<S, G> {
    /// Read the collection, applying the corrupt store policy
    async fn read_collection(&self) -> Result<Vec<Task>> {
        let key = &self.config.storage_key;
        let Some(raw) = self.storage.get(key).await? else {
            tracing::debug!("No value under '{}', starting empty", key);
            return Ok(Vec::new());
        };

        match parse_collection(key, &raw) {
            Ok(tasks) => {
                tracing::debug!("Loaded {} tasks from '{}'", tasks.len(), key);
                Ok(tasks)
            }
            Err(err) => match self.config.corrupt_store {
                CorruptStorePolicy::Fail => Err(err),
                CorruptStorePolicy::TreatAsEmpty => {
                    tracing::warn!("Treating corrupt store as empty: {}", err);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Overwrite the stored collection
    async fn persist(&self, tasks: &[Task]) -> Result<()> {
        let key = &self.config.storage_key;
        let content = serde_json::to_string_pretty(tasks)?;
        self.storage.set(key, &content).await?;
        tracing::debug!("Persisted {} tasks to '{}'", tasks.len(), key);
        Ok(())
    }
}

fn parse_collection(key: &str, raw: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(raw).map_err(|e| Error::corrupt(key, e))?;

    let mut seen = HashSet::with_capacity(tasks.len());
    if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.id.as_str())) {
        return Err(Error::corrupt(key, format!("duplicate task id {}", dup.id)));
    }
    Ok(tasks)
}

#[async_trait]
impl<S: StorageAdapter, G: IdGenerator> TaskRepository for TaskStore<S, G> {
    async fn load(&self) -> Result<Vec<Task>> {
        self.read_collection().await
    }

    async fn get(&self, id: &str) -> Result<Option<Task>> {
        let tasks = self.read_collection().await?;
        Ok(tasks.into_iter().find(|t| t.id == id))
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let task = draft.into_task(self.ids.generate(), &self.config)?;

        let mut tasks = self.read_collection().await?;
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(Error::DuplicateId(task.id));
        }
        tasks.push(task.clone());
        self.persist(&tasks).await?;

        tracing::info!("Created task {} ({})", task.id, task.category);
        Ok(task)
    }

    async fn update(&self, id: &str, patch: TaskPatch) -> Result<Task> {
        let mut tasks = self.read_collection().await?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

        patch.apply(task, &self.config)?;
        let updated = task.clone();
        self.persist(&tasks).await?;

        tracing::info!("Updated task {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut tasks = self.read_collection().await?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);

        let removed = tasks.len() != before;
        if removed {
            self.persist(&tasks).await?;
            tracing::info!("Deleted task {}", id);
        }
        Ok(removed)
    }
}
