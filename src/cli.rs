use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Local-first task and project manager.
/// State persists as JSON snapshots under ~/.taskflow or a directory
/// passed via --data-dir.
#[derive(Parser)]
#[command(name = "taskflow", version, about = "Task and project management CLI")]
pub struct Cli {
    /// Directory holding the persisted snapshots.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}
