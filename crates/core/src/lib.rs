//! Core library for Tasklet
//!
//! This crate contains the task persistence and query layer:
//! - Task records and their validation rules
//! - A repository persisting the whole collection through a key/value store
//! - Search and completion filters over loaded tasks

pub mod config;
pub mod error;
pub mod filter;
pub mod id;
pub mod storage;
pub mod task;

pub use config::{CorruptStorePolicy, RepositoryConfig};
pub use error::Error;
pub use filter::TaskFilter;
pub use storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use task::{Task, TaskDraft, TaskPatch, TaskRepository, TaskStore};

pub type Result<T> = std::result::Result<T, Error>;
