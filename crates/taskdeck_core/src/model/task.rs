//! Task domain model.
//!
//! # Responsibility
//! - Define the task record with its ordered notes and subtasks.
//! - Provide create/patch request shapes consumed by the task repository.
//! - Keep the completion invariant in one place (`set_completed`).
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed_at.is_some() == completed` at all times.
//! - Notes and subtasks keep insertion order; removal never reorders the rest.

use crate::model::project::ProjectId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;
/// Stable identifier of a note inside one task.
pub type NoteId = Uuid;
/// Stable identifier of a subtask inside one task.
pub type SubtaskId = Uuid;

/// Task severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Fixed sort weight: high=3, medium=2, low=1.
    pub fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parses the lowercase wire name (`low|medium|high`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

/// Free-form note attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub created_at: NaiveDateTime,
}

/// Checklist item attached to a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: NaiveDateTime,
}

/// Canonical task record.
///
/// Field-level validation (non-empty title, existing project) belongs to the
/// caller; the store keeps whatever well-typed shape it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub priority: Priority,
    /// Soft reference; may dangle after its project is deleted.
    pub project_id: ProjectId,
    pub deadline: NaiveDateTime,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Task {
    /// Sets the completion flag and keeps `completed_at` consistent with it.
    ///
    /// Returns `true` when the flag actually changed. A no-op transition keeps
    /// the existing `completed_at` untouched.
    pub fn set_completed(&mut self, completed: bool, at: NaiveDateTime) -> bool {
        if self.completed == completed {
            return false;
        }
        self.completed = completed;
        self.completed_at = if completed { Some(at) } else { None };
        true
    }

    /// Whether this task is incomplete with a deadline strictly before `now`.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && self.deadline < now
    }

    /// Returns `(completed, total)` subtask counts.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|st| st.completed).count();
        (done, self.subtasks.len())
    }

    /// Repairs a `completed_at` that disagrees with `completed`.
    ///
    /// Used on import paths where records were produced outside the store.
    pub(crate) fn normalize_completion(&mut self) {
        if !self.completed {
            self.completed_at = None;
        } else if self.completed_at.is_none() {
            self.completed_at = Some(self.updated_at);
        }
    }
}

/// Request model for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub project_id: ProjectId,
    pub deadline: NaiveDateTime,
    /// Initial notes; empty unless supplied.
    pub notes: Vec<Note>,
    /// Initial subtasks; empty unless supplied.
    pub subtasks: Vec<Subtask>,
}

impl NewTask {
    /// Creates a request with empty description, notes and subtasks.
    pub fn new(
        title: impl Into<String>,
        project_id: ProjectId,
        priority: Priority,
        deadline: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority,
            project_id,
            deadline,
            notes: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Partial update for a task. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub project_id: Option<ProjectId>,
    pub deadline: Option<NaiveDateTime>,
    /// Goes through [`Task::set_completed`], so `completed_at` follows it.
    pub completed: Option<bool>,
    pub notes: Option<Vec<Note>>,
    pub subtasks: Option<Vec<Subtask>>,
}

impl TaskPatch {
    /// Merges this patch into `task`. Does not touch timestamps other than
    /// `completed_at`; the caller stamps `updated_at`.
    pub fn apply(self, task: &mut Task, now: NaiveDateTime) {
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(project_id) = self.project_id {
            task.project_id = project_id;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        if let Some(completed) = self.completed {
            task.set_completed(completed, now);
        }
        if let Some(notes) = self.notes {
            task.notes = notes;
        }
        if let Some(subtasks) = self.subtasks {
            task.subtasks = subtasks;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NewTask, Priority, Task, TaskPatch};
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn sample_task() -> Task {
        let request = NewTask::new("write report", Uuid::new_v4(), Priority::Medium, at(18));
        Task {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            priority: request.priority,
            project_id: request.project_id,
            deadline: request.deadline,
            completed: false,
            completed_at: None,
            created_at: at(8),
            updated_at: at(8),
            notes: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    #[test]
    fn priority_weights_are_ordered_by_severity() {
        assert!(Priority::High.weight() > Priority::Medium.weight());
        assert!(Priority::Medium.weight() > Priority::Low.weight());
        assert_eq!(Priority::parse(" HIGH "), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn set_completed_keeps_completed_at_in_sync() {
        let mut task = sample_task();
        assert!(task.set_completed(true, at(9)));
        assert_eq!(task.completed_at, Some(at(9)));

        assert!(!task.set_completed(true, at(10)));
        assert_eq!(task.completed_at, Some(at(9)));

        assert!(task.set_completed(false, at(11)));
        assert_eq!(task.completed_at, None);
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut task = sample_task();
        let before = task.clone();
        TaskPatch::default().apply(&mut task, at(12));
        assert_eq!(task, before);
    }

    #[test]
    fn overdue_requires_incomplete_and_past_deadline() {
        let mut task = sample_task();
        assert!(task.is_overdue(at(19)));
        assert!(!task.is_overdue(at(18)));
        task.set_completed(true, at(19));
        assert!(!task.is_overdue(at(20)));
    }

    #[test]
    fn normalize_completion_repairs_imported_records() {
        let mut task = sample_task();
        task.completed_at = Some(at(9));
        task.normalize_completion();
        assert_eq!(task.completed_at, None);

        task.completed = true;
        task.normalize_completion();
        assert_eq!(task.completed_at, Some(task.updated_at));
    }
}
