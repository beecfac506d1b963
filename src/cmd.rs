//! Command implementations for the CLI interface.
//!
//! One handler per subcommand. Handlers drive the stores and report to
//! stdout; persistence failures go to stderr and exit non-zero, since the
//! stores treat a failed snapshot write as fatal for the invoking command
//! while the in-memory state stays correct.

use std::io;
use std::process::exit;

use chrono::Local;
use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::category::{CategoryPatch, NewCategory};
use crate::fields::*;
use crate::project::{NewProject, ProjectPatch};
use crate::store::{
    format_due_relative, parse_due_input, truncate, CategoryStore, ProjectStore, TaskStore,
};
use crate::task::{NewTask, Task, TaskPatch};

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task (use --parent to add a subtask).
    Add {
        /// Short title for the task.
        title: String,
        /// Optional longer description.
        #[arg(long)]
        desc: Option<String>,
        /// Priority: low | medium | high.
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Due date: YYYY-MM-DD, "today", "tomorrow", or "in Nd".
        #[arg(long)]
        due: Option<String>,
        /// Category label.
        #[arg(long)]
        category: Option<String>,
        /// Project ID to attach the task to.
        #[arg(long)]
        project: Option<u64>,
        /// Parent task ID; makes this a subtask.
        #[arg(long)]
        parent: Option<u64>,
        /// Board status tag: not-started | in-progress | completed.
        #[arg(long, value_enum)]
        status: Option<StatusTag>,
    },

    /// List main tasks with optional filters.
    List {
        /// Only tasks not yet completed.
        #[arg(long)]
        active: bool,
        /// Only completed tasks.
        #[arg(long)]
        completed: bool,
        /// Filter by project ID.
        #[arg(long)]
        project: Option<u64>,
        /// Substring filter over title and description.
        #[arg(long)]
        search: Option<String>,
        /// Show subtasks indented under their parents.
        #[arg(long)]
        tree: bool,
    },

    /// View a single task and its subtasks.
    View {
        /// Task ID to view.
        id: u64,
    },

    /// Update fields on a task.
    Update {
        /// Task ID to update.
        id: u64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long)]
        due: Option<String>,
        /// Clear the due date.
        #[arg(long)]
        clear_due: bool,
        #[arg(long)]
        category: Option<String>,
        /// Attach to a project by ID.
        #[arg(long)]
        project: Option<u64>,
        /// Detach from its project.
        #[arg(long)]
        clear_project: bool,
        #[arg(long, value_enum)]
        status: Option<StatusTag>,
        /// Remove the board status tag.
        #[arg(long)]
        clear_status: bool,
    },

    /// Mark a task completed. Completing the last open subtask of a
    /// parent completes the parent as well.
    Complete {
        /// Task ID to complete.
        id: u64,
    },

    /// Reopen a completed task.
    Reopen {
        /// Task ID to reopen.
        id: u64,
    },

    /// Delete a task together with its direct subtasks.
    Delete {
        /// Task ID to delete.
        id: u64,
    },

    /// Search tasks by title or description, case-insensitive.
    Search {
        /// Substring to look for.
        query: String,
    },

    /// Manage projects.
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage categories.
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a new project.
    Add {
        /// Project name.
        name: String,
        #[arg(long)]
        desc: Option<String>,
        /// Status: planning | active | paused | completed.
        #[arg(long, value_enum)]
        status: Option<ProjectStatus>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        /// Start date, defaults to today.
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        due: Option<String>,
        /// Display colour, hex string.
        #[arg(long)]
        color: Option<String>,
    },

    /// List projects with optional filters.
    List {
        #[arg(long, value_enum)]
        status: Option<ProjectStatus>,
        /// Substring filter over name and description.
        #[arg(long)]
        search: Option<String>,
    },

    /// View a project and the tasks attached to it.
    View {
        /// Project ID to view.
        id: u64,
    },

    /// Update fields on a project.
    Update {
        /// Project ID to update.
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        desc: Option<String>,
        #[arg(long, value_enum)]
        status: Option<ProjectStatus>,
        #[arg(long, value_enum)]
        priority: Option<Priority>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        clear_due: bool,
        #[arg(long)]
        color: Option<String>,
        /// Progress, 0-100.
        #[arg(long)]
        progress: Option<u8>,
    },

    /// Delete a project. Tasks keep their project reference.
    Delete {
        /// Project ID to delete.
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// Add a new category.
    Add {
        /// Category name.
        name: String,
        /// Display colour, hex string.
        #[arg(long)]
        color: Option<String>,
    },

    /// List categories.
    List,

    /// Update fields on a category.
    Update {
        /// Category ID to update.
        id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category.
    Delete {
        /// Category ID to delete.
        id: u64,
    },
}

fn parse_due_or_exit(input: &str) -> chrono::NaiveDate {
    match parse_due_input(input) {
        Some(d) => d,
        None => {
            eprintln!("Unrecognised date: '{input}'");
            exit(1);
        }
    }
}

fn save_failed(e: io::Error) -> ! {
    eprintln!("Failed to save snapshot: {e}");
    exit(1);
}

fn print_task_header() {
    println!(
        "{:<5} {:<4} {:<7} {:<12} {:<10} {:<12} {}",
        "ID", "Done", "Pri", "Status", "Due", "Category", "Title"
    );
}

fn print_task_row(t: &Task, depth: usize) {
    let today = Local::now().date_naive();
    println!(
        "{:<5} {:<4} {:<7} {:<12} {:<10} {:<12} {}{}",
        t.id,
        if t.completed { "[x]" } else { "[ ]" },
        format_priority(t.priority),
        format_status_tag(t.status),
        format_due_relative(t.due_date, today),
        truncate(&t.category, 12),
        "  ".repeat(depth),
        t.title
    );
}

pub fn cmd_add(
    tasks: &mut TaskStore,
    title: String,
    desc: Option<String>,
    priority: Option<Priority>,
    due: Option<String>,
    category: Option<String>,
    project: Option<u64>,
    parent: Option<u64>,
    status: Option<StatusTag>,
) {
    if title.trim().is_empty() {
        eprintln!("Title cannot be empty.");
        exit(1);
    }
    if let Some(parent_id) = parent {
        let Some(parent_task) = tasks.get(parent_id) else {
            eprintln!("Parent task {parent_id} not found.");
            exit(1);
        };
        // One level of nesting only.
        if parent_task.parent_id.is_some() {
            eprintln!("Task {parent_id} is itself a subtask and cannot have children.");
            exit(1);
        }
    }
    let due_date = due.as_deref().map(parse_due_or_exit);
    let new = NewTask {
        title,
        description: desc,
        priority,
        due_date,
        category,
        project_id: project,
        parent_id: parent,
        status,
    };
    match tasks.create(new) {
        Ok(task) => println!("Added task {}", task.id),
        Err(e) => save_failed(e),
    }
}

pub fn cmd_list(
    tasks: &TaskStore,
    active: bool,
    completed: bool,
    project: Option<u64>,
    search: Option<String>,
    tree: bool,
) {
    let mut rows = tasks.main_tasks();
    if active {
        rows.retain(|t| !t.completed);
    } else if completed {
        rows.retain(|t| t.completed);
    }
    if let Some(project_id) = project {
        rows.retain(|t| t.project_id == Some(project_id));
    }
    if let Some(query) = search {
        let query = query.to_lowercase();
        rows.retain(|t| {
            t.title.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
        });
    }

    let mains = tasks.main_tasks();
    let open = mains.iter().filter(|t| !t.completed).count();
    let done = mains.len() - open;
    println!("{open} active, {done} completed");

    print_task_header();
    for t in &rows {
        print_task_row(t, 0);
        if tree {
            for sub in tasks.subtasks(t.id) {
                print_task_row(&sub, 1);
            }
        }
    }
}

pub fn cmd_view(tasks: &TaskStore, id: u64) {
    let Some(t) = tasks.get(id) else {
        eprintln!("Task {id} not found.");
        exit(1);
    };
    let today = Local::now().date_naive();
    println!("ID:        {}", t.id);
    println!("Title:     {}", t.title);
    if !t.description.is_empty() {
        println!("Desc:      {}", t.description);
    }
    println!("Priority:  {}", format_priority(t.priority));
    println!("Status:    {}", format_status_tag(t.status));
    println!("Due:       {}", format_due_relative(t.due_date, today));
    println!("Category:  {}", t.category);
    if let Some(project_id) = t.project_id {
        println!("Project:   {project_id}");
    }
    if let Some(parent_id) = t.parent_id {
        println!("Parent:    {parent_id}");
    }
    println!("Done:      {}", if t.completed { "yes" } else { "no" });
    println!("Created:   {}", t.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(completed_at) = t.completed_at {
        println!("Completed: {}", completed_at.format("%Y-%m-%d %H:%M"));
    }

    let subtasks = tasks.subtasks(t.id);
    if !subtasks.is_empty() {
        println!("\nSubtasks:");
        print_task_header();
        for sub in &subtasks {
            print_task_row(sub, 1);
        }
    }
}

pub fn cmd_update(
    tasks: &mut TaskStore,
    id: u64,
    title: Option<String>,
    desc: Option<String>,
    priority: Option<Priority>,
    due: Option<String>,
    clear_due: bool,
    category: Option<String>,
    project: Option<u64>,
    clear_project: bool,
    status: Option<StatusTag>,
    clear_status: bool,
) {
    let due_date = if clear_due {
        Some(None)
    } else {
        due.as_deref().map(|s| Some(parse_due_or_exit(s)))
    };
    let project_id = if clear_project {
        Some(None)
    } else {
        project.map(Some)
    };
    let status = if clear_status {
        Some(None)
    } else {
        status.map(Some)
    };
    let patch = TaskPatch {
        title,
        description: desc,
        priority,
        due_date,
        category,
        project_id,
        parent_id: None,
        completed: None,
        status,
    };
    match tasks.update(id, patch) {
        Ok(Some(_)) => println!("Updated task {id}"),
        Ok(None) => {
            eprintln!("Task {id} not found.");
            exit(1);
        }
        Err(e) => save_failed(e),
    }
}

pub fn cmd_complete(tasks: &mut TaskStore, id: u64) {
    match tasks.update(id, TaskPatch::completion(true)) {
        Ok(Some(_)) => {
            println!("Completed task {id}");
            if let Some(parent_id) = tasks.get(id).and_then(|t| t.parent_id) {
                if tasks.get(parent_id).is_some_and(|p| p.completed) {
                    println!("All subtasks done; completed parent {parent_id}");
                }
            }
        }
        Ok(None) => {
            eprintln!("Task {id} not found.");
            exit(1);
        }
        Err(e) => save_failed(e),
    }
}

pub fn cmd_reopen(tasks: &mut TaskStore, id: u64) {
    match tasks.update(id, TaskPatch::completion(false)) {
        Ok(Some(_)) => println!("Reopened task {id}"),
        Ok(None) => {
            eprintln!("Task {id} not found.");
            exit(1);
        }
        Err(e) => save_failed(e),
    }
}

pub fn cmd_delete(tasks: &mut TaskStore, id: u64) {
    let subtask_count = tasks.subtasks(id).len();
    match tasks.delete(id) {
        Ok(true) => {
            if subtask_count > 0 {
                println!("Deleted task {id} and {subtask_count} subtask(s)");
            } else {
                println!("Deleted task {id}");
            }
        }
        Ok(false) => {
            eprintln!("Task {id} not found.");
            exit(1);
        }
        Err(e) => save_failed(e),
    }
}

pub fn cmd_search(tasks: &TaskStore, query: String) {
    let hits = tasks.search(&query);
    if hits.is_empty() {
        println!("No tasks match '{query}'.");
        return;
    }
    print_task_header();
    for t in &hits {
        print_task_row(t, 0);
    }
}

pub fn cmd_project(tasks: &TaskStore, projects: &mut ProjectStore, action: ProjectAction) {
    match action {
        ProjectAction::Add { name, desc, status, priority, start, due, color } => {
            if name.trim().is_empty() {
                eprintln!("Project name cannot be empty.");
                exit(1);
            }
            let new = NewProject {
                name,
                description: desc,
                status,
                priority,
                start_date: start.as_deref().map(parse_due_or_exit),
                due_date: due.as_deref().map(parse_due_or_exit),
                color,
            };
            match projects.create(new) {
                Ok(p) => println!("Added project {}", p.id),
                Err(e) => save_failed(e),
            }
        }

        ProjectAction::List { status, search } => {
            let rows = match (status, search) {
                (Some(status), _) => projects.by_status(status),
                (None, Some(query)) => projects.search(&query),
                (None, None) => projects.all(),
            };
            let today = Local::now().date_naive();
            println!(
                "{:<5} {:<10} {:<7} {:<10} {:<9} {}",
                "ID", "Status", "Pri", "Due", "Progress", "Name"
            );
            for p in &rows {
                println!(
                    "{:<5} {:<10} {:<7} {:<10} {:<9} {}",
                    p.id,
                    format_project_status(p.status),
                    format_priority(p.priority),
                    format_due_relative(p.due_date, today),
                    format!("{}%", p.progress),
                    p.name
                );
            }
        }

        ProjectAction::View { id } => {
            let Some(p) = projects.get(id) else {
                eprintln!("Project {id} not found.");
                exit(1);
            };
            println!("ID:       {}", p.id);
            println!("Name:     {}", p.name);
            if !p.description.is_empty() {
                println!("Desc:     {}", p.description);
            }
            println!("Status:   {}", format_project_status(p.status));
            println!("Priority: {}", format_priority(p.priority));
            println!("Start:    {}", p.start_date);
            if let Some(due) = p.due_date {
                println!("Due:      {due}");
            }
            println!("Progress: {}%", p.progress);

            let attached = tasks.by_project(p.id);
            if !attached.is_empty() {
                println!("\nTasks:");
                print_task_header();
                for t in &attached {
                    print_task_row(t, 0);
                }
            }
        }

        ProjectAction::Update {
            id, name, desc, status, priority, start, due, clear_due, color, progress,
        } => {
            let due_date = if clear_due {
                Some(None)
            } else {
                due.as_deref().map(|s| Some(parse_due_or_exit(s)))
            };
            let patch = ProjectPatch {
                name,
                description: desc,
                status,
                priority,
                start_date: start.as_deref().map(parse_due_or_exit),
                due_date,
                color,
                progress,
            };
            match projects.update(id, patch) {
                Ok(Some(_)) => println!("Updated project {id}"),
                Ok(None) => {
                    eprintln!("Project {id} not found.");
                    exit(1);
                }
                Err(e) => save_failed(e),
            }
        }

        ProjectAction::Delete { id } => match projects.delete(id) {
            Ok(true) => println!("Deleted project {id}"),
            Ok(false) => {
                eprintln!("Project {id} not found.");
                exit(1);
            }
            Err(e) => save_failed(e),
        },
    }
}

pub fn cmd_category(categories: &mut CategoryStore, action: CategoryAction) {
    match action {
        CategoryAction::Add { name, color } => {
            if name.trim().is_empty() {
                eprintln!("Category name cannot be empty.");
                exit(1);
            }
            match categories.create(NewCategory { name, color }) {
                Ok(c) => println!("Added category {}", c.id),
                Err(e) => save_failed(e),
            }
        }

        CategoryAction::List => {
            println!("{:<5} {:<9} {}", "ID", "Colour", "Name");
            for c in &categories.all() {
                println!("{:<5} {:<9} {}", c.id, c.color, c.name);
            }
        }

        CategoryAction::Update { id, name, color } => {
            let patch = CategoryPatch { name, color, task_count: None };
            match categories.update(id, patch) {
                Ok(Some(_)) => println!("Updated category {id}"),
                Ok(None) => {
                    eprintln!("Category {id} not found.");
                    exit(1);
                }
                Err(e) => save_failed(e),
            }
        }

        CategoryAction::Delete { id } => match categories.delete(id) {
            Ok(true) => println!("Deleted category {id}"),
            Ok(false) => {
                eprintln!("Category {id} not found.");
                exit(1);
            }
            Err(e) => save_failed(e),
        },
    }
}

pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "taskflow", &mut io::stdout());
}
