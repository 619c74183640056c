//! Read-only task views.
//!
//! # Responsibility
//! - Filter, search and sort task snapshots for list screens.
//! - Answer project-reference questions the presentation layer asks before
//!   destructive calls.
//!
//! # Invariants
//! - Inputs are borrowed snapshots; outputs are new owned sequences.
//! - Sorting is stable: ties keep their snapshot order.

pub mod task_view;

use crate::model::project::ProjectId;
use crate::model::task::Task;

/// Whether any task in `tasks` still references `project_id`.
///
/// Callers check this before deleting a project; the store does not.
pub fn project_has_tasks(project_id: ProjectId, tasks: &[Task]) -> bool {
    tasks.iter().any(|task| task.project_id == project_id)
}
