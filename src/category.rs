//! Category record and its creation/update inputs.

use serde::{Deserialize, Serialize};

/// Default display colour for new categories.
pub const DEFAULT_CATEGORY_COLOR: &str = "#7C3AED";

/// A task category label with a display colour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub color: String,
    /// Denormalized count, maintained by callers rather than the store.
    #[serde(default)]
    pub task_count: u32,
}

/// Input for [`CategoryStore::create`](crate::store::CategoryStore::create).
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub color: Option<String>,
}

/// Partial update applied over an existing category.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub task_count: Option<u32>,
}

impl CategoryPatch {
    /// Merge this patch into `category`, leaving unset fields untouched.
    pub fn apply(&self, category: &mut Category) {
        if let Some(name) = &self.name {
            category.name = name.clone();
        }
        if let Some(color) = &self.color {
            category.color = color.clone();
        }
        if let Some(task_count) = self.task_count {
            category.task_count = task_count;
        }
    }
}
