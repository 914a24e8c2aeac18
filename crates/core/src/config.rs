//! Repository configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::Result;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Category labels offered when creating a task
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Meeting", "Review", "Marketing", "Design Project"];

/// What to do when the stored collection cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptStorePolicy {
    /// Surface a `CorruptStore` error and leave the stored value untouched
    Fail,
    /// Log the condition and treat the collection as empty.
    /// The next mutation overwrites the corrupt value.
    TreatAsEmpty,
}

impl Default for CorruptStorePolicy {
    fn default() -> Self {
        Self::Fail
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryConfig {
    pub storage_key: String,
    /// Allowed category labels. Empty accepts any non-empty category.
    pub categories: Vec<String>,
    pub corrupt_store: CorruptStorePolicy,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            corrupt_store: CorruptStorePolicy::default(),
        }
    }
}

impl RepositoryConfig {
    /// Load configuration from a JSON file
    ///
    /// A missing file yields the defaults; fields absent from the file keep
    /// their default values.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the allowed categories
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Set the corrupt store policy
    pub fn with_corrupt_store(mut self, policy: CorruptStorePolicy) -> Self {
        self.corrupt_store = policy;
        self
    }

    /// Whether `category` may be stored on a task
    pub fn allows_category(&self, category: &str) -> bool {
        if category.trim().is_empty() {
            return false;
        }
        self.categories.is_empty() || self.categories.iter().any(|c| c == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RepositoryConfig::default();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.categories.len(), 4);
        assert_eq!(config.corrupt_store, CorruptStorePolicy::Fail);
    }

    #[test]
    fn test_allows_category() {
        let config = RepositoryConfig::default();
        assert!(config.allows_category("Meeting"));
        assert!(config.allows_category("Design Project"));
        assert!(!config.allows_category("meeting"));
        assert!(!config.allows_category(""));

        let open = config.with_categories(Vec::<String>::new());
        assert!(open.allows_category("Anything"));
        assert!(!open.allows_category("   "));
    }

    #[tokio::test]
    async fn test_from_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = RepositoryConfig::from_file(temp_dir.path().join("config.json"))
            .await
            .unwrap();
        assert_eq!(config, RepositoryConfig::default());
    }

    #[tokio::test]
    async fn test_from_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"corrupt_store": "treat_as_empty"}"#).unwrap();

        let config = RepositoryConfig::from_file(&path).await.unwrap();
        assert_eq!(config.corrupt_store, CorruptStorePolicy::TreatAsEmpty);
        assert_eq!(config.storage_key, "tasks");
    }
}
