//! Project record and its creation/update inputs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{Priority, ProjectStatus};

/// Default display colour for new projects.
pub const DEFAULT_PROJECT_COLOR: &str = "#4F46E5";

/// A project grouping tasks, with its own lifecycle status and progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub priority: Priority,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Display colour, hex string.
    pub color: String,
    /// Manual progress figure, 0-100. Not derived from task state.
    #[serde(default)]
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for [`ProjectStore::create`](crate::store::ProjectStore::create).
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub color: Option<String>,
}

/// Partial update applied over an existing project.
///
/// `id`, `created_at` and `updated_at` are not representable; the store
/// re-stamps `updated_at` on every update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<Priority>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<Option<NaiveDate>>,
    pub color: Option<String>,
    pub progress: Option<u8>,
}

impl ProjectPatch {
    /// Merge this patch into `project`, leaving unset fields untouched.
    pub fn apply(&self, project: &mut Project) {
        if let Some(name) = &self.name {
            project.name = name.clone();
        }
        if let Some(description) = &self.description {
            project.description = description.clone();
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(start_date) = self.start_date {
            project.start_date = start_date;
        }
        if let Some(due_date) = self.due_date {
            project.due_date = due_date;
        }
        if let Some(color) = &self.color {
            project.color = color.clone();
        }
        if let Some(progress) = self.progress {
            project.progress = progress.min(100);
        }
    }
}
