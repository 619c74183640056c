//! Task use-case service.
//!
//! # Responsibility
//! - Expose task CRUD, completion and note/subtask editing.
//! - Provide the filtered list shortcuts the UI asks for (by project,
//!   by priority, pending, completed, overdue, due today) and keyword search.
//! - Produce autocomplete suggestions against a project snapshot.
//!
//! # Invariants
//! - Every returned task is an owned copy.
//! - `RepoError` surfaces unchanged; nothing is retried.

use crate::clock::day_bounds;
use crate::latency::{LatencyHook, NoLatency, Operation};
use crate::model::project::{Project, ProjectId};
use crate::model::task::{NewTask, NoteId, Priority, SubtaskId, Task, TaskId, TaskPatch};
use crate::repo::task_repo::TaskRepository;
use crate::repo::{RepoError, RepoResult};
use crate::search::search_tasks;
use crate::search::suggest::{suggest, Suggestion};
use chrono::NaiveDateTime;
use log::{debug, warn};
use std::sync::Arc;

/// Task service facade over a repository implementation.
pub struct TaskService<R: TaskRepository> {
    repo: R,
    latency: Arc<dyn LatencyHook>,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service without simulated latency.
    pub fn new(repo: R) -> Self {
        Self::with_latency(repo, Arc::new(NoLatency))
    }

    pub fn with_latency(repo: R, latency: Arc<dyn LatencyHook>) -> Self {
        Self { repo, latency }
    }

    /// All tasks, insertion order.
    pub fn list_tasks(&self) -> Vec<Task> {
        let tasks = self.repo.list_tasks();
        self.finish(Operation::TaskList, tasks)
    }

    /// One task, or `None` for an unknown id.
    pub fn get_task(&self, id: TaskId) -> Option<Task> {
        let task = self.repo.get_task(id);
        self.finish(Operation::TaskGet, task)
    }

    pub fn list_by_project(&self, project_id: ProjectId) -> Vec<Task> {
        self.list_where(|task| task.project_id == project_id)
    }

    pub fn list_by_priority(&self, priority: Priority) -> Vec<Task> {
        self.list_where(|task| task.priority == priority)
    }

    pub fn list_completed(&self) -> Vec<Task> {
        self.list_where(|task| task.completed)
    }

    pub fn list_pending(&self) -> Vec<Task> {
        self.list_where(|task| !task.completed)
    }

    /// Incomplete tasks whose deadline is before `now`.
    pub fn list_overdue(&self, now: NaiveDateTime) -> Vec<Task> {
        self.list_where(|task| task.is_overdue(now))
    }

    /// Tasks due on the calendar day of `now`, completed or not.
    pub fn list_due_today(&self, now: NaiveDateTime) -> Vec<Task> {
        let (start, end) = day_bounds(now);
        self.list_where(|task| task.deadline >= start && task.deadline < end)
    }

    /// Keyword search over titles and descriptions.
    pub fn search(&self, query: &str) -> Vec<Task> {
        let hits = search_tasks(&self.repo.list_tasks(), query);
        debug!(
            "event=task_search module=task_service status=ok hits={}",
            hits.len()
        );
        self.finish(Operation::TaskSearch, hits)
    }

    /// Autocomplete suggestions for `query` using `projects` for names.
    pub fn suggestions(&self, query: &str, projects: &[Project]) -> Vec<Suggestion> {
        let suggestions = suggest(query, &self.repo.list_tasks(), projects);
        self.finish(Operation::TaskSuggest, suggestions)
    }

    pub fn create_task(&mut self, request: NewTask) -> Task {
        let task = self.repo.create_task(request);
        debug!(
            "event=task_create module=task_service status=ok task_id={}",
            task.id
        );
        self.finish(Operation::TaskCreate, task)
    }

    /// Merges `patch` into the task; `TaskPatch::default()` only refreshes
    /// `updated_at`.
    pub fn update_task(&mut self, id: TaskId, patch: TaskPatch) -> RepoResult<Task> {
        let result = self.repo.update_task(id, patch);
        self.report("task_update", id, &result);
        self.finish(Operation::TaskUpdate, result)
    }

    pub fn delete_task(&mut self, id: TaskId) -> RepoResult<()> {
        let result = self.repo.delete_task(id);
        self.report("task_delete", id, &result);
        self.finish(Operation::TaskDelete, result)
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> RepoResult<Task> {
        let result = self.repo.toggle_complete(id);
        self.report("task_toggle", id, &result);
        self.finish(Operation::TaskToggle, result)
    }

    pub fn add_note(&mut self, id: TaskId, text: &str) -> RepoResult<Task> {
        let result = self.repo.add_note(id, text);
        self.report("task_note_add", id, &result);
        self.finish(Operation::TaskChildEdit, result)
    }

    /// Unknown `note_id` leaves the notes as they are.
    pub fn delete_note(&mut self, id: TaskId, note_id: NoteId) -> RepoResult<Task> {
        let result = self.repo.delete_note(id, note_id);
        self.report("task_note_delete", id, &result);
        self.finish(Operation::TaskChildEdit, result)
    }

    pub fn add_subtask(&mut self, id: TaskId, title: &str) -> RepoResult<Task> {
        let result = self.repo.add_subtask(id, title);
        self.report("task_subtask_add", id, &result);
        self.finish(Operation::TaskChildEdit, result)
    }

    /// Unknown `subtask_id` leaves the subtasks as they are.
    pub fn toggle_subtask(&mut self, id: TaskId, subtask_id: SubtaskId) -> RepoResult<Task> {
        let result = self.repo.toggle_subtask(id, subtask_id);
        self.report("task_subtask_toggle", id, &result);
        self.finish(Operation::TaskChildEdit, result)
    }

    /// Unknown `subtask_id` leaves the subtasks as they are.
    pub fn delete_subtask(&mut self, id: TaskId, subtask_id: SubtaskId) -> RepoResult<Task> {
        let result = self.repo.delete_subtask(id, subtask_id);
        self.report("task_subtask_delete", id, &result);
        self.finish(Operation::TaskChildEdit, result)
    }

    fn list_where<P>(&self, predicate: P) -> Vec<Task>
    where
        P: Fn(&Task) -> bool,
    {
        let tasks = self
            .repo
            .list_tasks()
            .into_iter()
            .filter(|task| predicate(task))
            .collect();
        self.finish(Operation::TaskList, tasks)
    }

    fn report<T>(&self, event: &str, id: TaskId, result: &Result<T, RepoError>) {
        match result {
            Ok(_) => debug!("event={event} module=task_service status=ok task_id={id}"),
            Err(err) => warn!("event={event} module=task_service status=error error={err}"),
        }
    }

    fn finish<T>(&self, operation: Operation, value: T) -> T {
        self.latency.before_return(operation);
        value
    }
}
