//! # TaskFlow - task and project management core
//!
//! A local-first task manager with projects, categories, and one level of
//! subtasks whose completion rolls up into the parent task.
//!
//! The stores in [`store`] own the canonical in-memory collections and
//! persist full snapshots through the [`storage::SnapshotStore`]
//! collaborator after every mutation. [`reconcile`] keeps a parent task's
//! completion flag consistent with its subtasks. The binary in
//! `main.rs` wires the stores to a file-backed data directory and the
//! CLI surface in [`cmd`].

pub mod category;
pub mod cli;
pub mod cmd;
pub mod fields;
pub mod project;
pub mod reconcile;
pub mod seed;
pub mod storage;
pub mod store;
pub mod task;
