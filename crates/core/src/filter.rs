//! Derived task views
//!
//! Pure functions selecting the visible subset of a task collection. Input
//! order is always preserved and nothing is mutated.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Tasks whose title contains `query`, ignoring case
///
/// An empty query matches every task.
pub fn search<'a, I>(tasks: I, query: &str) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    if query.is_empty() {
        return tasks.into_iter().collect();
    }
    let needle = query.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .collect()
}

/// Tasks whose completion flag equals `completed`
pub fn by_completion<'a, I>(tasks: I, completed: bool) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|task| task.completed == completed)
        .collect()
}

/// Search text plus the completed/pending toggle of the task list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    pub query: String,
    pub completed: bool,
}

impl TaskFilter {
    pub fn new(query: impl Into<String>, completed: bool) -> Self {
        Self {
            query: query.into(),
            completed,
        }
    }

    /// The visible tasks for this filter
    pub fn apply<'a, I>(&self, tasks: I) -> Vec<&'a Task>
    where
        I: IntoIterator<Item = &'a Task>,
    {
        by_completion(search(tasks, &self.query), self.completed)
    }
}
