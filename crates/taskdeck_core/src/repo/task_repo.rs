//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD, completion toggling and note/subtask editing over tasks.
//! - Stamp `created_at`/`updated_at`/`completed_at` on every mutation.
//!
//! # Invariants
//! - Task ids are unique for the repository lifetime.
//! - Every successful mutation refreshes the task's `updated_at`.
//! - Unknown task ids fail with `RepoError::TaskNotFound`; unknown note or
//!   subtask ids inside an existing task are a no-op that still returns the
//!   current task.

use crate::clock::Clock;
use crate::model::task::{NewTask, Note, NoteId, Subtask, SubtaskId, Task, TaskId, TaskPatch};
use crate::repo::{RepoError, RepoResult, Stamper};
use std::sync::Arc;
use uuid::Uuid;

/// Repository interface for task storage.
pub trait TaskRepository {
    /// All tasks in insertion order.
    fn list_tasks(&self) -> Vec<Task>;
    fn get_task(&self, id: TaskId) -> Option<Task>;
    fn create_task(&mut self, request: NewTask) -> Task;
    fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> RepoResult<Task>;
    fn delete_task(&mut self, id: TaskId) -> RepoResult<()>;
    fn toggle_complete(&mut self, id: TaskId) -> RepoResult<Task>;
    fn add_note(&mut self, id: TaskId, text: &str) -> RepoResult<Task>;
    fn delete_note(&mut self, id: TaskId, note_id: NoteId) -> RepoResult<Task>;
    fn add_subtask(&mut self, id: TaskId, title: &str) -> RepoResult<Task>;
    fn toggle_subtask(&mut self, id: TaskId, subtask_id: SubtaskId) -> RepoResult<Task>;
    fn delete_subtask(&mut self, id: TaskId, subtask_id: SubtaskId) -> RepoResult<Task>;
}

/// Insertion-ordered task collection.
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
    stamper: Stamper,
}

impl InMemoryTaskRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            tasks: Vec::new(),
            stamper: Stamper::new(clock),
        }
    }

    /// Builds a repository holding already-identified tasks.
    ///
    /// Callers are responsible for id uniqueness (see `seed`). Completion
    /// fields are normalized so `completed_at` follows `completed`.
    pub fn with_tasks(clock: Arc<dyn Clock>, tasks: Vec<Task>) -> Self {
        let mut repo = Self::new(clock);
        for mut task in tasks {
            task.normalize_completion();
            repo.stamper.observe(task.updated_at);
            repo.tasks.push(task);
        }
        repo
    }

    fn position(&self, id: TaskId) -> RepoResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(RepoError::TaskNotFound(id))
    }

    /// Runs `edit` against the stored task and stamps `updated_at`.
    fn mutate<F>(&mut self, id: TaskId, edit: F) -> RepoResult<Task>
    where
        F: FnOnce(&mut Task, chrono::NaiveDateTime),
    {
        let index = self.position(id)?;
        let now = self.stamper.next();
        let task = &mut self.tasks[index];
        edit(task, now);
        task.updated_at = now;
        Ok(task.clone())
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn create_task(&mut self, request: NewTask) -> Task {
        let now = self.stamper.next();
        let task = Task {
            id: Uuid::new_v4(),
            title: request.title,
            description: request.description,
            priority: request.priority,
            project_id: request.project_id,
            deadline: request.deadline,
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
            notes: request.notes,
            subtasks: request.subtasks,
        };
        self.tasks.push(task.clone());
        task
    }

    fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> RepoResult<Task> {
        self.mutate(id, |task, now| patch.apply(task, now))
    }

    fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        let index = self.position(id)?;
        self.tasks.remove(index);
        Ok(())
    }

    fn toggle_complete(&mut self, id: TaskId) -> RepoResult<Task> {
        self.mutate(id, |task, now| {
            let target = !task.completed;
            task.set_completed(target, now);
        })
    }

    fn add_note(&mut self, id: TaskId, text: &str) -> RepoResult<Task> {
        self.mutate(id, |task, now| {
            task.notes.push(Note {
                id: Uuid::new_v4(),
                text: text.to_string(),
                created_at: now,
            });
        })
    }

    fn delete_note(&mut self, id: TaskId, note_id: NoteId) -> RepoResult<Task> {
        self.mutate(id, |task, _| task.notes.retain(|note| note.id != note_id))
    }

    fn add_subtask(&mut self, id: TaskId, title: &str) -> RepoResult<Task> {
        self.mutate(id, |task, now| {
            task.subtasks.push(Subtask {
                id: Uuid::new_v4(),
                title: title.to_string(),
                completed: false,
                created_at: now,
            });
        })
    }

    fn toggle_subtask(&mut self, id: TaskId, subtask_id: SubtaskId) -> RepoResult<Task> {
        self.mutate(id, |task, _| {
            if let Some(subtask) = task.subtasks.iter_mut().find(|st| st.id == subtask_id) {
                subtask.completed = !subtask.completed;
            }
        })
    }

    fn delete_subtask(&mut self, id: TaskId, subtask_id: SubtaskId) -> RepoResult<Task> {
        self.mutate(id, |task, _| task.subtasks.retain(|st| st.id != subtask_id))
    }
}
