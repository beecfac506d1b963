//! # TaskFlow - task and project management CLI
//!
//! ## Key behaviours
//!
//! - **Subtask roll-up**: completing the last open subtask completes the
//!   parent; reopening a subtask while a sibling is still done reopens it.
//! - **Cascading delete**: deleting a task removes its direct subtasks.
//! - **Snapshot persistence**: each collection is written whole to a JSON
//!   file under the data directory after every mutation; on startup a
//!   snapshot replaces the bundled seed data.
//!
//! ## Quick start
//!
//! ```bash
//! # Add a task, then break it down
//! taskflow add "Ship the release" --priority high --due friday
//! taskflow add "Write changelog" --parent 1
//! taskflow add "Tag the build" --parent 1
//!
//! # Completing both subtasks completes task 1 as well
//! taskflow complete 2
//! taskflow complete 3
//!
//! # Lists and projects
//! taskflow list --tree
//! taskflow project add "Spring release" --status active
//! taskflow project view 1
//! ```
//!
//! Data lives in `~/.taskflow/` as one JSON file per collection; point
//! `--data-dir` somewhere else to keep separate sets of tasks.

use std::path::PathBuf;

use clap::Parser;

use taskflow::cli::Cli;
use taskflow::cmd::{self, Commands};
use taskflow::seed;
use taskflow::storage::JsonFileStore;
use taskflow::store::{CategoryStore, ProjectStore, TaskStore};

fn main() {
    let cli = Cli::parse();

    // Completions need no data directory.
    if let Commands::Completions { shell } = &cli.command {
        cmd::cmd_completions(*shell);
        return;
    }

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".taskflow")
    });
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("Failed to create data directory {}: {}", data_dir.display(), e);
        std::process::exit(1);
    }

    let storage = JsonFileStore::new(&data_dir);
    let mut tasks = TaskStore::load(Box::new(storage.clone()), seed::tasks());
    let mut projects = ProjectStore::load(Box::new(storage.clone()), seed::projects());
    let mut categories = CategoryStore::load(Box::new(storage), seed::categories());

    match cli.command {
        Commands::Completions { .. } => unreachable!("handled above"),

        Commands::Add { title, desc, priority, due, category, project, parent, status } =>
            cmd::cmd_add(&mut tasks, title, desc, priority, due, category, project, parent, status),

        Commands::List { active, completed, project, search, tree } =>
            cmd::cmd_list(&tasks, active, completed, project, search, tree),

        Commands::View { id } => cmd::cmd_view(&tasks, id),

        Commands::Update {
            id, title, desc, priority, due, clear_due, category,
            project, clear_project, status, clear_status,
        } => cmd::cmd_update(
            &mut tasks, id, title, desc, priority, due, clear_due, category,
            project, clear_project, status, clear_status,
        ),

        Commands::Complete { id } => cmd::cmd_complete(&mut tasks, id),

        Commands::Reopen { id } => cmd::cmd_reopen(&mut tasks, id),

        Commands::Delete { id } => cmd::cmd_delete(&mut tasks, id),

        Commands::Search { query } => cmd::cmd_search(&tasks, query),

        Commands::Project { action } => cmd::cmd_project(&tasks, &mut projects, action),

        Commands::Category { action } => cmd::cmd_category(&mut categories, action),
    }
}
