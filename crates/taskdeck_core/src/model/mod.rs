//! Domain model for tracked tasks and the projects that group them.
//!
//! # Responsibility
//! - Define canonical records shared by store, query and stats layers.
//! - Keep field-level lifecycle helpers (completion, notes, subtasks) next to
//!   the data they protect.
//!
//! # Invariants
//! - Every record is identified by a stable UUID assigned at creation.
//! - `Task::completed_at` is `Some` iff `Task::completed` is `true`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod project;
pub mod task;
