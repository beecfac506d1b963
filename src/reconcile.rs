//! Parent completion reconciliation.
//!
//! Invoked by the task store after any mutation that changes a completion
//! flag or removes a subtask. Propagation is strictly one level: a parent
//! is recomputed from its direct subtasks, never a grandparent from the
//! parent.

use chrono::{DateTime, Utc};

use crate::task::Task;

/// Recompute the completion flag of `parent_id` from its subtasks.
///
/// Rules, in order:
/// 1. No such parent, or the parent has no subtasks: leave it alone. A
///    task without subtasks is never auto-toggled.
/// 2. Every subtask completed and the parent open: complete the parent
///    and stamp `completed_at`.
/// 3. Parent completed, some but not all subtasks completed: reopen the
///    parent and clear `completed_at`.
///
/// The reopen rule requires at least one still-completed subtask. A bulk
/// action that reopens every subtask therefore leaves a completed parent
/// untouched; that narrow trigger is intentional.
///
/// Returns whether the parent changed. The caller persists.
pub fn reconcile_parent(tasks: &mut [Task], parent_id: u64, now: DateTime<Utc>) -> bool {
    let mut has_subtasks = false;
    let mut all_done = true;
    let mut any_done = false;
    for t in tasks.iter() {
        if t.parent_id == Some(parent_id) {
            has_subtasks = true;
            if t.completed {
                any_done = true;
            } else {
                all_done = false;
            }
        }
    }
    if !has_subtasks {
        return false;
    }

    let Some(parent) = tasks.iter_mut().find(|t| t.id == parent_id) else {
        return false;
    };

    if all_done && !parent.completed {
        parent.completed = true;
        parent.completed_at = Some(now);
        true
    } else if !all_done && parent.completed && any_done {
        parent.completed = false;
        parent.completed_at = None;
        true
    } else {
        false
    }
}
