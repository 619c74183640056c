//! Demo harness for `taskdeck_core`.
//!
//! # Responsibility
//! - Wire a seeded in-memory tracker with configured latency and logging.
//! - Print dashboard counters, the pending task list and suggestions for the
//!   query given as first argument (defaults to `mee`).
//!
//! The clock is pinned to the seed's reference day so output is stable.

use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::sync::Arc;
use taskdeck_core::{
    init_logging, CoreConfig, FixedClock, Seed, SortKey, StatusFilter, TaskFilter, TaskViewQuery,
    Tracker,
};

const DEMO_SEED: &str = include_str!("../data/seed.json");
const DEFAULT_QUERY: &str = "mee";

fn main() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    if let Some(dir) = config.log_dir.as_ref() {
        init_logging(&config.log_level, &dir.to_string_lossy())?;
    }

    let demo_now = NaiveDate::from_ymd_opt(2024, 6, 3)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .ok_or("invalid demo date")?;
    let clock = Arc::new(FixedClock::new(demo_now));
    let tracker = Tracker::with_seed(
        Seed::from_json_str(DEMO_SEED)?,
        clock,
        config.latency_hook(),
    )?;
    info!("event=demo_start module=cli status=ok version={}", taskdeck_core::core_version());

    let dashboard = tracker.dashboard();
    let stats = dashboard.stats();
    println!("taskdeck {} @ {demo_now}", taskdeck_core::core_version());
    println!(
        "tasks total={} completed={} pending={} overdue={} completed_today={} due_today={}",
        stats.total_tasks,
        stats.completed_tasks,
        stats.pending_tasks,
        stats.overdue_tasks,
        stats.completed_today,
        stats.due_today
    );
    println!(
        "priority high={} medium={} low={}",
        stats.by_priority.high, stats.by_priority.medium, stats.by_priority.low
    );
    for entry in &stats.by_project {
        println!("project {:<12} tasks={}", entry.name, entry.count);
    }

    let charts = dashboard.chart_data();
    println!(
        "chart completion {:?} {:?}",
        charts.completion_chart.labels, charts.completion_chart.series
    );

    println!("pending by priority:");
    let pending = tracker.task_view(&TaskViewQuery {
        filter: TaskFilter {
            status: StatusFilter::Pending,
            ..TaskFilter::default()
        },
        sort: SortKey::Priority,
        ..TaskViewQuery::default()
    });
    for task in &pending {
        let (done, total) = task.subtask_progress();
        let marker = if task.is_overdue(demo_now) { "!" } else { " " };
        println!(
            "{marker} [{:<6}] {} (due {}, subtasks {done}/{total})",
            task.priority.as_str(),
            task.title,
            task.deadline
        );
    }

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_QUERY.to_string());
    println!("suggestions for `{query}`:");
    for suggestion in tracker.suggestions(&query) {
        println!(
            "  {:?}: {} ({})",
            suggestion.kind, suggestion.text, suggestion.subtitle
        );
    }

    Ok(())
}
