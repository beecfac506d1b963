//! Collection stores and shared query/date utilities.
//!
//! Each store owns one canonical in-memory collection, loaded once at
//! construction (persisted snapshot if present, bundled seed otherwise)
//! and written back as a full snapshot after every mutation. Reads hand
//! out owned clones, never references into the collection, so callers
//! cannot corrupt store state through a returned value.
//!
//! Memory is the source of truth: a failed snapshot write propagates as
//! an error but leaves the collection intact for the rest of the process.

use std::io;

use chrono::{Datelike, Duration, Local, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::category::{Category, CategoryPatch, NewCategory, DEFAULT_CATEGORY_COLOR};
use crate::fields::ProjectStatus;
use crate::project::{NewProject, Project, ProjectPatch, DEFAULT_PROJECT_COLOR};
use crate::reconcile::reconcile_parent;
use crate::storage::SnapshotStore;
use crate::task::{NewTask, Task, TaskPatch};

/// Snapshot slot names, one per collection.
pub const TASKS_SLOT: &str = "taskflow_tasks";
pub const PROJECTS_SLOT: &str = "taskflow_projects";
pub const CATEGORIES_SLOT: &str = "taskflow_categories";

/// Load a collection: snapshot if present and readable, seed otherwise.
fn load_slot<T: DeserializeOwned>(storage: &dyn SnapshotStore, slot: &str, seed: Vec<T>) -> Vec<T> {
    match storage.read(slot) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                eprintln!("Error parsing {slot} snapshot, using seed data: {e}");
                seed
            }
        },
        Ok(None) => seed,
        Err(e) => {
            eprintln!("Error reading {slot} snapshot, using seed data: {e}");
            seed
        }
    }
}

fn persist_slot<T: Serialize>(storage: &dyn SnapshotStore, slot: &str, records: &[T]) -> io::Result<()> {
    let payload = serde_json::to_string_pretty(records).unwrap();
    storage.write(slot, &payload)
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().unwrap_or(0) + 1
}

/// Canonical store for tasks and subtasks.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn SnapshotStore>,
}

impl TaskStore {
    /// Construct from an injected storage collaborator and seed data. A
    /// snapshot under [`TASKS_SLOT`] fully replaces the seed.
    pub fn load(storage: Box<dyn SnapshotStore>, seed: Vec<Task>) -> Self {
        let tasks = load_slot(storage.as_ref(), TASKS_SLOT, seed);
        TaskStore { tasks, storage }
    }

    fn persist(&self) -> io::Result<()> {
        persist_slot(self.storage.as_ref(), TASKS_SLOT, &self.tasks)
    }

    /// Every task, main and sub, as owned copies.
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn get(&self, id: u64) -> Option<Task> {
        self.tasks.iter().find(|t| t.id == id).cloned()
    }

    /// Tasks attached to the given project.
    pub fn by_project(&self, project_id: u64) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.project_id == Some(project_id))
            .cloned()
            .collect()
    }

    /// Tasks filtered on the completion flag.
    pub fn by_completion(&self, completed: bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.completed == completed)
            .cloned()
            .collect()
    }

    /// Main tasks (no parent), newest first.
    pub fn main_tasks(&self) -> Vec<Task> {
        let mut out: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.parent_id.is_none())
            .cloned()
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    /// Subtasks of the given parent, oldest first (work-breakdown order,
    /// deliberately the opposite of `main_tasks`).
    pub fn subtasks(&self, parent_id: u64) -> Vec<Task> {
        let mut out: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| t.parent_id == Some(parent_id))
            .cloned()
            .collect();
        out.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        out
    }

    /// Case-insensitive substring match over title or description.
    pub fn search(&self, query: &str) -> Vec<Task> {
        let query = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&query)
                    || t.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Append a new task with the next free id and persist.
    ///
    /// The store does not validate `parent_id` or `project_id`
    /// references; that is the caller's job.
    pub fn create(&mut self, data: NewTask) -> io::Result<Task> {
        let task = Task {
            id: next_id(self.tasks.iter().map(|t| t.id)),
            title: data.title,
            description: data.description.unwrap_or_default(),
            priority: data.priority.unwrap_or_default(),
            due_date: data.due_date,
            category: data.category.unwrap_or_else(|| "Personal".to_string()),
            project_id: data.project_id,
            parent_id: data.parent_id,
            completed: false,
            created_at: Utc::now(),
            completed_at: None,
            status: data.status,
        };
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Merge a patch over the task, manage `completed_at`, reconcile the
    /// parent if the completion flag was touched, persist. Returns the
    /// updated copy, or `None` if the id is unknown.
    pub fn update(&mut self, id: u64, patch: TaskPatch) -> io::Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        patch.apply(task);
        let mut parent_to_reconcile = None;
        if let Some(done) = patch.completed {
            task.completed_at = if done { Some(Utc::now()) } else { None };
            parent_to_reconcile = task.parent_id;
        }
        if let Some(parent_id) = parent_to_reconcile {
            reconcile_parent(&mut self.tasks, parent_id, Utc::now());
        }
        self.persist()?;
        Ok(self.get(id))
    }

    /// Delete a task and its direct subtasks, then reconcile the deleted
    /// task's own parent if it had one.
    ///
    /// The cascade is one level deep by design, matching the one-level
    /// nesting model; grandchildren are not chased.
    pub fn delete(&mut self, id: u64) -> io::Result<bool> {
        if !self.tasks.iter().any(|t| t.id == id) {
            return Ok(false);
        }
        let parent_id = self.tasks.iter().find(|t| t.id == id).and_then(|t| t.parent_id);
        self.tasks.retain(|t| t.id != id && t.parent_id != Some(id));
        if let Some(parent_id) = parent_id {
            reconcile_parent(&mut self.tasks, parent_id, Utc::now());
        }
        self.persist()?;
        Ok(true)
    }
}

/// Canonical store for projects. Plain CRUD, no hierarchy.
pub struct ProjectStore {
    projects: Vec<Project>,
    storage: Box<dyn SnapshotStore>,
}

impl ProjectStore {
    pub fn load(storage: Box<dyn SnapshotStore>, seed: Vec<Project>) -> Self {
        let projects = load_slot(storage.as_ref(), PROJECTS_SLOT, seed);
        ProjectStore { projects, storage }
    }

    fn persist(&self) -> io::Result<()> {
        persist_slot(self.storage.as_ref(), PROJECTS_SLOT, &self.projects)
    }

    pub fn all(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn get(&self, id: u64) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn by_status(&self, status: ProjectStatus) -> Vec<Project> {
        self.projects
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match over name or description.
    pub fn search(&self, query: &str) -> Vec<Project> {
        let query = query.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }

    pub fn create(&mut self, data: NewProject) -> io::Result<Project> {
        let now = Utc::now();
        let project = Project {
            id: next_id(self.projects.iter().map(|p| p.id)),
            name: data.name,
            description: data.description.unwrap_or_default(),
            status: data.status.unwrap_or_default(),
            priority: data.priority.unwrap_or_default(),
            start_date: data.start_date.unwrap_or_else(|| Local::now().date_naive()),
            due_date: data.due_date,
            color: data.color.unwrap_or_else(|| DEFAULT_PROJECT_COLOR.to_string()),
            progress: 0,
            created_at: now,
            updated_at: now,
        };
        self.projects.push(project.clone());
        self.persist()?;
        Ok(project)
    }

    /// Merge a patch over the project, re-stamp `updated_at`, persist.
    pub fn update(&mut self, id: u64, patch: ProjectPatch) -> io::Result<Option<Project>> {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        patch.apply(project);
        project.updated_at = Utc::now();
        let updated = project.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    pub fn delete(&mut self, id: u64) -> io::Result<bool> {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.projects.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}

/// Canonical store for categories. Plain CRUD.
pub struct CategoryStore {
    categories: Vec<Category>,
    storage: Box<dyn SnapshotStore>,
}

impl CategoryStore {
    pub fn load(storage: Box<dyn SnapshotStore>, seed: Vec<Category>) -> Self {
        let categories = load_slot(storage.as_ref(), CATEGORIES_SLOT, seed);
        CategoryStore { categories, storage }
    }

    fn persist(&self) -> io::Result<()> {
        persist_slot(self.storage.as_ref(), CATEGORIES_SLOT, &self.categories)
    }

    pub fn all(&self) -> Vec<Category> {
        self.categories.clone()
    }

    pub fn get(&self, id: u64) -> Option<Category> {
        self.categories.iter().find(|c| c.id == id).cloned()
    }

    pub fn create(&mut self, data: NewCategory) -> io::Result<Category> {
        let category = Category {
            id: next_id(self.categories.iter().map(|c| c.id)),
            name: data.name,
            color: data.color.unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            task_count: 0,
        };
        self.categories.push(category.clone());
        self.persist()?;
        Ok(category)
    }

    pub fn update(&mut self, id: u64, patch: CategoryPatch) -> io::Result<Option<Category>> {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        patch.apply(category);
        let updated = category.clone();
        self.persist()?;
        Ok(Some(updated))
    }

    pub fn delete(&mut self, id: u64) -> io::Result<bool> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }
}

/// Parse human-readable due date input.
///
/// Supports "today", "tomorrow", "in 3d", "in 2w", bare or "next"-prefixed
/// weekday names, and "YYYY-MM-DD".
pub fn parse_due_input(s: &str) -> Option<NaiveDate> {
    let s = s.trim().to_lowercase();
    let today = Local::now().date_naive();

    match s.as_str() {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {}
    }

    if let Some(rest) = s.strip_prefix("in ") {
        if let Some(nd) = rest.strip_suffix('d') {
            if let Ok(days) = nd.trim().parse::<i64>() {
                return Some(today + Duration::days(days));
            }
        }
        if let Some(nw) = rest.strip_suffix('w') {
            if let Ok(weeks) = nw.trim().parse::<i64>() {
                return Some(today + Duration::weeks(weeks));
            }
        }
    }

    let weekdays = [
        ("monday", 0), ("tuesday", 1), ("wednesday", 2), ("thursday", 3),
        ("friday", 4), ("saturday", 5), ("sunday", 6),
        ("mon", 0), ("tue", 1), ("wed", 2), ("thu", 3),
        ("fri", 4), ("sat", 5), ("sun", 6),
    ];
    for (day_name, target_day) in weekdays {
        let current_day = today.weekday().num_days_from_monday() as i32;
        let days_ahead = (target_day + 7 - current_day) % 7;
        if s == day_name {
            return Some(today + Duration::days(days_ahead as i64));
        }
        if s == format!("next {day_name}") {
            let days_to_add = if days_ahead == 0 { 7 } else { days_ahead + 7 };
            return Some(today + Duration::days(days_to_add as i64));
        }
    }

    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()
}

/// Format a due date relative to today ("today", "tomorrow", "in 3d", "2d late").
pub fn format_due_relative(due: Option<NaiveDate>, today: NaiveDate) -> String {
    match due {
        None => "-".into(),
        Some(d) => {
            let delta = (d - today).num_days();
            if delta == 0 {
                "today".into()
            } else if delta == 1 {
                "tomorrow".into()
            } else if delta > 1 {
                format!("in {delta}d")
            } else {
                format!("{}d late", -delta)
            }
        }
    }
}

/// Truncate a string to a maximum width, adding ellipsis if needed.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out = String::new();
        for (i, ch) in s.chars().enumerate() {
            if i + 1 >= width {
                out.push('…');
                break;
            }
            out.push(ch);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;
    use chrono::DateTime;

    fn empty_store() -> TaskStore {
        TaskStore::load(Box::new(MemoryStore::new()), Vec::new())
    }

    fn titled(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            ..NewTask::default()
        }
    }

    fn stamp(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, day, hour, 0, 0).unwrap()
    }

    fn seeded(id: u64, title: &str, created_at: DateTime<Utc>, parent_id: Option<u64>) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            priority: Default::default(),
            due_date: None,
            category: "Personal".into(),
            project_id: None,
            parent_id,
            completed: false,
            created_at,
            completed_at: None,
            status: None,
        }
    }

    #[test]
    fn ids_stay_monotonic_after_deletes() {
        let mut store = empty_store();
        let a = store.create(titled("a")).unwrap();
        let b = store.create(titled("b")).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // Freeing the lower id must not make it reusable.
        assert!(store.delete(a.id).unwrap());
        let c = store.create(titled("c")).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn returned_copies_are_isolated_from_the_store() {
        let mut store = empty_store();
        store.create(titled("keep me intact")).unwrap();

        let mut leaked = store.all();
        leaked[0].title = "mutated".into();
        leaked[0].completed = true;

        let fresh = store.get(1).unwrap();
        assert_eq!(fresh.title, "keep me intact");
        assert!(!fresh.completed);
    }

    #[test]
    fn delete_cascades_to_direct_subtasks() {
        let mut store = empty_store();
        let parent = store.create(titled("parent")).unwrap();
        store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s1") })
            .unwrap();
        store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s2") })
            .unwrap();

        assert!(store.delete(parent.id).unwrap());
        assert!(store.subtasks(parent.id).is_empty());
        assert!(store.all().is_empty());
    }

    #[test]
    fn delete_of_unknown_id_reports_false() {
        let mut store = empty_store();
        assert!(!store.delete(42).unwrap());
    }

    #[test]
    fn completing_the_last_subtask_completes_the_parent() {
        let mut store = empty_store();
        let parent = store.create(titled("parent")).unwrap();
        let s1 = store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s1") })
            .unwrap();
        let s2 = store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s2") })
            .unwrap();

        store.update(s1.id, TaskPatch::completion(true)).unwrap();
        assert!(!store.get(parent.id).unwrap().completed);

        store.update(s2.id, TaskPatch::completion(true)).unwrap();
        let parent = store.get(parent.id).unwrap();
        assert!(parent.completed);
        assert!(parent.completed_at.is_some());
    }

    #[test]
    fn reopening_one_subtask_reopens_the_parent_but_reopening_all_stops_there() {
        let mut store = empty_store();
        let parent = store.create(titled("parent")).unwrap();
        let s1 = store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s1") })
            .unwrap();
        let s2 = store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s2") })
            .unwrap();
        store.update(s1.id, TaskPatch::completion(true)).unwrap();
        store.update(s2.id, TaskPatch::completion(true)).unwrap();
        assert!(store.get(parent.id).unwrap().completed);

        // One sibling still done: the parent reopens.
        store.update(s1.id, TaskPatch::completion(false)).unwrap();
        assert!(!store.get(parent.id).unwrap().completed);

        // No sibling done any more: nothing further happens to the parent.
        store.update(s2.id, TaskPatch::completion(false)).unwrap();
        let parent = store.get(parent.id).unwrap();
        assert!(!parent.completed);
        assert!(parent.completed_at.is_none());
    }

    #[test]
    fn deleting_the_open_subtask_can_complete_the_parent() {
        let mut store = empty_store();
        let parent = store.create(titled("parent")).unwrap();
        let s1 = store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s1") })
            .unwrap();
        let s2 = store
            .create(NewTask { parent_id: Some(parent.id), ..titled("s2") })
            .unwrap();
        store.update(s1.id, TaskPatch::completion(true)).unwrap();

        // The only open subtask goes away, so the remainder is all done.
        assert!(store.delete(s2.id).unwrap());
        assert!(store.get(parent.id).unwrap().completed);
    }

    #[test]
    fn completed_at_tracks_the_completed_flag() {
        let mut store = empty_store();
        let t = store.create(titled("t")).unwrap();
        assert!(t.completed_at.is_none());

        let t = store.update(t.id, TaskPatch::completion(true)).unwrap().unwrap();
        assert!(t.completed && t.completed_at.is_some());

        let t = store.update(t.id, TaskPatch::completion(false)).unwrap().unwrap();
        assert!(!t.completed && t.completed_at.is_none());
    }

    #[test]
    fn update_cannot_change_id_or_created_at() {
        let mut store = empty_store();
        let t = store.create(titled("pinned")).unwrap();
        let updated = store
            .update(
                t.id,
                TaskPatch { title: Some("renamed".into()), ..TaskPatch::default() },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, t.id);
        assert_eq!(updated.created_at, t.created_at);
        assert_eq!(updated.title, "renamed");
    }

    #[test]
    fn update_of_unknown_id_reports_none() {
        let mut store = empty_store();
        assert!(store.update(7, TaskPatch::completion(true)).unwrap().is_none());
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let mut store = empty_store();
        store.create(titled("Deep Work block")).unwrap();
        store
            .create(NewTask {
                description: Some("prepare WORKshop slides".into()),
                ..titled("slides")
            })
            .unwrap();
        store.create(titled("groceries")).unwrap();

        let hits = store.search("wOrK");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|t| t.title != "groceries"));
    }

    #[test]
    fn main_tasks_newest_first_subtasks_oldest_first() {
        let seed = vec![
            seeded(1, "old main", stamp(1, 9), None),
            seeded(2, "new main", stamp(2, 9), None),
            seeded(3, "first step", stamp(2, 10), Some(2)),
            seeded(4, "second step", stamp(2, 11), Some(2)),
        ];
        let store = TaskStore::load(Box::new(MemoryStore::new()), seed);

        let mains: Vec<u64> = store.main_tasks().iter().map(|t| t.id).collect();
        assert_eq!(mains, vec![2, 1]);

        let subs: Vec<u64> = store.subtasks(2).iter().map(|t| t.id).collect();
        assert_eq!(subs, vec![3, 4]);
    }

    #[test]
    fn by_project_and_by_completion_filter() {
        let mut store = empty_store();
        let a = store
            .create(NewTask { project_id: Some(10), ..titled("a") })
            .unwrap();
        store.create(NewTask { project_id: Some(11), ..titled("b") }).unwrap();
        store.update(a.id, TaskPatch::completion(true)).unwrap();

        let in_ten = store.by_project(10);
        assert_eq!(in_ten.len(), 1);
        assert_eq!(in_ten[0].id, a.id);

        assert_eq!(store.by_completion(true).len(), 1);
        assert_eq!(store.by_completion(false).len(), 1);
    }

    #[test]
    fn snapshot_replaces_seed_and_corrupt_snapshot_falls_back() {
        let storage = MemoryStore::new();
        let mut store = TaskStore::load(Box::new(storage.clone()), Vec::new());
        store.create(titled("persisted")).unwrap();

        // Same slots, fresh store: the snapshot wins over the seed.
        let revived = TaskStore::load(
            Box::new(storage.clone()),
            vec![seeded(9, "seed only", stamp(1, 1), None)],
        );
        assert_eq!(revived.all().len(), 1);
        assert_eq!(revived.get(1).unwrap().title, "persisted");

        // Corrupt payload: back to the seed.
        storage.write(TASKS_SLOT, "{ not json").unwrap();
        let fallback = TaskStore::load(
            Box::new(storage),
            vec![seeded(9, "seed only", stamp(1, 1), None)],
        );
        assert_eq!(fallback.get(9).unwrap().title, "seed only");
    }

    #[test]
    fn project_update_restamps_updated_at_and_pins_created_at() {
        let storage = MemoryStore::new();
        let mut store = ProjectStore::load(Box::new(storage), Vec::new());
        let p = store
            .create(NewProject { name: "Launch".into(), ..NewProject::default() })
            .unwrap();
        assert_eq!(p.status, ProjectStatus::Active);
        assert_eq!(p.color, DEFAULT_PROJECT_COLOR);
        assert_eq!(p.progress, 0);

        let updated = store
            .update(
                p.id,
                ProjectPatch { progress: Some(40), ..ProjectPatch::default() },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.progress, 40);
        assert_eq!(updated.created_at, p.created_at);
        assert!(updated.updated_at >= p.updated_at);
    }

    #[test]
    fn project_progress_is_clamped_to_100() {
        let mut store = ProjectStore::load(Box::new(MemoryStore::new()), Vec::new());
        let p = store
            .create(NewProject { name: "Clamp".into(), ..NewProject::default() })
            .unwrap();
        let updated = store
            .update(
                p.id,
                ProjectPatch { progress: Some(250), ..ProjectPatch::default() },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.progress, 100);
    }

    #[test]
    fn project_queries_filter_by_status_and_search() {
        let mut store = ProjectStore::load(Box::new(MemoryStore::new()), Vec::new());
        store
            .create(NewProject {
                name: "Website redesign".into(),
                status: Some(ProjectStatus::Paused),
                ..NewProject::default()
            })
            .unwrap();
        store
            .create(NewProject { name: "Mobile app".into(), ..NewProject::default() })
            .unwrap();

        assert_eq!(store.by_status(ProjectStatus::Paused).len(), 1);
        assert_eq!(store.search("REDESIGN").len(), 1);
        assert!(store.search("nothing").is_empty());
    }

    #[test]
    fn category_defaults_and_crud() {
        let mut store = CategoryStore::load(Box::new(MemoryStore::new()), Vec::new());
        let c = store
            .create(NewCategory { name: "Errands".into(), color: None })
            .unwrap();
        assert_eq!(c.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(c.task_count, 0);

        let updated = store
            .update(
                c.id,
                CategoryPatch { name: Some("Chores".into()), ..CategoryPatch::default() },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.name, "Chores");

        assert!(store.delete(c.id).unwrap());
        assert!(store.get(c.id).is_none());
        assert!(!store.delete(c.id).unwrap());
    }

    #[test]
    fn due_parsing_and_relative_formatting() {
        let today = Local::now().date_naive();
        assert_eq!(parse_due_input("today"), Some(today));
        assert_eq!(parse_due_input(" Tomorrow "), Some(today + Duration::days(1)));
        assert_eq!(parse_due_input("in 3d"), Some(today + Duration::days(3)));
        assert_eq!(parse_due_input("in 2w"), Some(today + Duration::weeks(2)));
        assert_eq!(
            parse_due_input("2026-01-15"),
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );
        assert_eq!(parse_due_input("not a date"), None);

        assert_eq!(format_due_relative(None, today), "-");
        assert_eq!(format_due_relative(Some(today), today), "today");
        assert_eq!(
            format_due_relative(Some(today + Duration::days(5)), today),
            "in 5d"
        );
        assert_eq!(
            format_due_relative(Some(today - Duration::days(2)), today),
            "2d late"
        );
    }
}
