//! Task model definitions

use serde::{Deserialize, Serialize};

use crate::config::RepositoryConfig;
use crate::{Error, Result};

/// A stored task record
///
/// Serialized with exactly the fields `id`, `category`, `title`,
/// `description` and `completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Input for creating a task; the id is assigned by the repository
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub category: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskDraft {
    /// Create a new draft with the given category and title
    pub fn new(category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Validate against `config` and turn the draft into a task with `id`
    pub(crate) fn into_task(self, id: String, config: &RepositoryConfig) -> Result<Task> {
        let title = validate_title(&self.title)?;
        validate_category(&self.category, config)?;
        Ok(Task {
            id,
            category: self.category,
            title,
            description: self.description.trim().to_string(),
            completed: self.completed,
        })
    }
}

/// Partial update of a task; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
    }

    /// Apply the patch to `task`
    ///
    /// Every supplied field is validated before any field is written, so a
    /// rejected patch leaves `task` unchanged.
    pub(crate) fn apply(self, task: &mut Task, config: &RepositoryConfig) -> Result<()> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        if let Some(category) = &self.category {
            validate_category(category, config)?;
        }

        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description.trim().to_string();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("title must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn validate_category(category: &str, config: &RepositoryConfig) -> Result<()> {
    if category.trim().is_empty() {
        return Err(Error::validation("a category must be selected"));
    }
    if !config.allows_category(category) {
        return Err(Error::validation(format!("unknown category: {}", category)));
    }
    Ok(())
}
