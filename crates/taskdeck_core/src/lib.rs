//! Core data layer for the TaskDeck tracker.
//! This crate is the single source of truth for task/project invariants.

pub mod clock;
pub mod config;
pub mod latency;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;
pub mod stats;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use latency::{LatencyHook, NoLatency, Operation, SimulatedLatency};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::project::{NewProject, Project, ProjectId, ProjectPatch};
pub use model::task::{
    NewTask, Note, NoteId, Priority, Subtask, SubtaskId, Task, TaskId, TaskPatch,
};
pub use query::project_has_tasks;
pub use query::task_view::{
    locale_compare, task_view, LocaleOrder, PriorityFilter, ProjectFilter, SortKey, StatusFilter,
    TaskFilter, TaskViewQuery,
};
pub use repo::project_repo::{InMemoryProjectRepository, ProjectRepository};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use search::search_tasks;
pub use search::suggest::{suggest, Suggestion, SuggestionKind};
pub use seed::{Seed, SeedError};
pub use service::dashboard_service::DashboardService;
pub use service::project_service::ProjectService;
pub use service::task_service::TaskService;
pub use service::tracker::Tracker;
pub use stats::dashboard::{
    chart_data, compute_stats, project_progress, ChartData, ChartSeries, DashboardStats,
    PriorityCounts, ProjectProgress, ProjectTaskCount,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
