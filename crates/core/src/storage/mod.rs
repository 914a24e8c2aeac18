//! Durable key/value storage
//!
//! The task repository only needs two primitives from its medium: read the
//! whole value under a key, and overwrite it.

mod file;
mod memory;

use async_trait::async_trait;
use std::sync::Arc;

use crate::Result;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Raw key/value storage primitive
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Read the raw value stored under `key`, or `None` if it was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl<T: StorageAdapter + ?Sized> StorageAdapter for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value).await
    }
}
