//! Task record and its creation/update inputs.
//!
//! A task with a `parent_id` is a subtask; a task without one is a main
//! task. Nesting is one level deep: subtasks do not themselves have
//! children. Snapshots serialize in the camelCase JSON layout the web app
//! used, so an existing data directory keeps working.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, StatusTag};

/// A single work item, either a main task or a subtask of one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub category: String,
    #[serde(default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub parent_id: Option<u64>,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Kanban column tag; tracked separately from `completed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusTag>,
}

/// Input for [`TaskStore::create`](crate::store::TaskStore::create).
///
/// Unset fields take the store defaults: empty description, medium
/// priority, category "Personal".
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub project_id: Option<u64>,
    pub parent_id: Option<u64>,
    pub status: Option<StatusTag>,
}

/// Partial update applied over an existing task.
///
/// Only the fields listed here are mutable. `id`, `created_at` and
/// `completed_at` are not representable in a patch, so a caller cannot
/// tamper with identity or timestamps; `completed_at` is managed by the
/// store when `completed` changes. Nullable fields use a double `Option`:
/// the outer level distinguishes "leave alone" from "set", the inner one
/// carries the new value or clears it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<Option<NaiveDate>>,
    pub category: Option<String>,
    pub project_id: Option<Option<u64>>,
    pub parent_id: Option<Option<u64>>,
    pub completed: Option<bool>,
    pub status: Option<Option<StatusTag>>,
}

impl TaskPatch {
    /// Merge this patch into `task`, leaving unset fields untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(category) = &self.category {
            task.category = category.clone();
        }
        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }
        if let Some(parent_id) = self.parent_id {
            task.parent_id = parent_id;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }

    /// Patch that only toggles the completion flag.
    pub fn completion(done: bool) -> Self {
        TaskPatch {
            completed: Some(done),
            ..TaskPatch::default()
        }
    }
}
