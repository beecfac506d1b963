//! Enumerations shared by tasks and projects.
//!
//! These are the structured field types the stores and the CLI agree on:
//! task/project priority, project lifecycle status, and the board status
//! tag used by the kanban view.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Task and project priority.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Planning,
    #[default]
    Active,
    Paused,
    Completed,
}

/// Board column tag used by the kanban view.
///
/// Independent of the `completed` flag on purpose: a task can sit in the
/// "completed" column without being checked off, and vice versa. Only the
/// `completed` flag participates in subtask roll-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusTag {
    NotStarted,
    InProgress,
    Completed,
}

/// Format a priority for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Low => "low",
        Priority::Medium => "medium",
        Priority::High => "high",
    }
}

/// Format a project status for display.
pub fn format_project_status(s: ProjectStatus) -> &'static str {
    match s {
        ProjectStatus::Planning => "planning",
        ProjectStatus::Active => "active",
        ProjectStatus::Paused => "paused",
        ProjectStatus::Completed => "completed",
    }
}

/// Format a board status tag for display.
pub fn format_status_tag(s: Option<StatusTag>) -> &'static str {
    match s {
        Some(StatusTag::NotStarted) => "not-started",
        Some(StatusTag::InProgress) => "in-progress",
        Some(StatusTag::Completed) => "completed",
        None => "-",
    }
}
