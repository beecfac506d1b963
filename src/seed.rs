//! Bundled seed datasets.
//!
//! Each collection starts from one of these arrays on first run; a
//! persisted snapshot from a previous session replaces the seed wholesale.

use serde::de::DeserializeOwned;

use crate::category::Category;
use crate::project::Project;
use crate::task::Task;

pub fn tasks() -> Vec<Task> {
    parse(include_str!("../data/tasks.json"), "task")
}

pub fn projects() -> Vec<Project> {
    parse(include_str!("../data/projects.json"), "project")
}

pub fn categories() -> Vec<Category> {
    parse(include_str!("../data/categories.json"), "category")
}

fn parse<T: DeserializeOwned>(raw: &str, what: &str) -> Vec<T> {
    match serde_json::from_str(raw) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Invalid bundled {what} seed data, starting empty: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_seeds_parse() {
        assert!(!tasks().is_empty());
        assert!(!projects().is_empty());
        assert!(!categories().is_empty());
    }

    #[test]
    fn seed_ids_are_unique_per_collection() {
        let tasks = tasks();
        let mut ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn seed_subtasks_reference_existing_parents() {
        let tasks = tasks();
        for t in &tasks {
            if let Some(parent_id) = t.parent_id {
                assert!(
                    tasks.iter().any(|p| p.id == parent_id),
                    "task {} has dangling parent {}",
                    t.id,
                    parent_id
                );
            }
        }
    }
}
