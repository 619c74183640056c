//! Filtered and sorted task list projection.
//!
//! Predicates, each applied only when active:
//! 1. search term: title, description or resolved project name contains the
//!    term (case-insensitive substring). A missing project resolves to
//!    `Unknown`, the same label the project sort uses;
//! 2. project equality;
//! 3. priority equality;
//! 4. completion status.

use crate::model::project::{Project, ProjectId};
use crate::model::task::{Priority, Task};
use crate::search::contains_ignore_case;
use icu_collator::{Collator, CollatorOptions, Strength};
use log::warn;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Label used when a task's project no longer exists.
pub const UNKNOWN_PROJECT_LABEL: &str = "Unknown";

/// Project predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectId),
}

/// Priority predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

/// Completion predicate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Parses `all|pending|completed`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Combined filter criteria. The default matches every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub project: ProjectFilter,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
}

/// Sort order for task views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Earliest deadline first.
    #[default]
    Deadline,
    /// High, then medium, then low.
    Priority,
    /// Most recently created first.
    Created,
    /// Title, alphabetical.
    Title,
    /// Resolved project name, alphabetical.
    Project,
}

impl SortKey {
    /// Parses `deadline|priority|created|title|project`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deadline" => Some(Self::Deadline),
            "priority" => Some(Self::Priority),
            "created" => Some(Self::Created),
            "title" => Some(Self::Title),
            "project" => Some(Self::Project),
            _ => None,
        }
    }
}

/// Full view request: filters, free-text term and sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskViewQuery {
    pub filter: TaskFilter,
    /// Empty means "no search".
    pub search: String,
    pub sort: SortKey,
}

/// Produces the filtered and sorted view. `tasks` and `projects` are untouched.
pub fn task_view(tasks: &[Task], projects: &[Project], query: &TaskViewQuery) -> Vec<Task> {
    let names = project_names(projects);
    let mut view: Vec<Task> = tasks
        .iter()
        .filter(|task| matches_view(task, &names, query))
        .cloned()
        .collect();
    sort_tasks(&mut view, &names, query.sort);
    view
}

fn project_label<'a>(names: &HashMap<ProjectId, &'a str>, task: &Task) -> &'a str {
    names
        .get(&task.project_id)
        .copied()
        .unwrap_or(UNKNOWN_PROJECT_LABEL)
}

fn matches_view(task: &Task, names: &HashMap<ProjectId, &str>, query: &TaskViewQuery) -> bool {
    if !query.search.is_empty() {
        let term = query.search.as_str();
        if !contains_ignore_case(&task.title, term)
            && !contains_ignore_case(&task.description, term)
            && !contains_ignore_case(project_label(names, task), term)
        {
            return false;
        }
    }

    matches_filter(task, &query.filter)
}

/// Applies the structured predicates only (no search term).
pub fn matches_filter(task: &Task, filter: &TaskFilter) -> bool {
    if let ProjectFilter::Only(project_id) = filter.project {
        if task.project_id != project_id {
            return false;
        }
    }
    if let PriorityFilter::Only(priority) = filter.priority {
        if task.priority != priority {
            return false;
        }
    }
    match filter.status {
        StatusFilter::All => true,
        StatusFilter::Pending => !task.completed,
        StatusFilter::Completed => task.completed,
    }
}

fn sort_tasks(view: &mut [Task], names: &HashMap<ProjectId, &str>, key: SortKey) {
    match key {
        SortKey::Deadline => view.sort_by(|a, b| a.deadline.cmp(&b.deadline)),
        SortKey::Priority => view.sort_by(|a, b| b.priority.weight().cmp(&a.priority.weight())),
        SortKey::Created => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Title => {
            let order = LocaleOrder::new();
            view.sort_by(|a, b| order.compare(&a.title, &b.title));
        }
        SortKey::Project => {
            let order = LocaleOrder::new();
            view.sort_by(|a, b| order.compare(project_label(names, a), project_label(names, b)));
        }
    }
}

fn project_names(projects: &[Project]) -> HashMap<ProjectId, &str> {
    projects
        .iter()
        .map(|project| (project.id, project.name.as_str()))
        .collect()
}

/// Root-locale collation used for title and project-name sorting.
///
/// Accents and case are secondary and tertiary differences: `éclair` sorts
/// before `fig`, and `report` before `Report`.
pub struct LocaleOrder {
    collator: Option<Collator>,
}

impl LocaleOrder {
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!("event=collator_init module=query status=error error={err:?}");
                None
            }
        };
        Self { collator }
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => fold_compare(left, right),
        }
    }
}

impl Default for LocaleOrder {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off locale comparison. Build a [`LocaleOrder`] when sorting.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    LocaleOrder::new().compare(left, right)
}

// Case-insensitive first, lowercase before uppercase on ties.
fn fold_compare(left: &str, right: &str) -> Ordering {
    let folded = left
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase));
    if folded != Ordering::Equal {
        return folded;
    }
    right.cmp(left)
}
