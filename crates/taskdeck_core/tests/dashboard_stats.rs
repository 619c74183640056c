use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use taskdeck_core::{
    chart_data, compute_stats, Clock, FixedClock, NewProject, NewTask, NoLatency, Priority,
    ProjectId, Task, Tracker,
};
use uuid::Uuid;

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn setup() -> (Arc<FixedClock>, Tracker) {
    let clock = Arc::new(FixedClock::new(noon()));
    let tracker = Tracker::new(clock.clone(), Arc::new(NoLatency));
    (clock, tracker)
}

fn add(
    tracker: &mut Tracker,
    project: ProjectId,
    priority: Priority,
    deadline: NaiveDateTime,
) -> Task {
    tracker
        .tasks_mut()
        .create_task(NewTask::new("task", project, priority, deadline))
}

#[test]
fn overdue_counts_only_incomplete_past_deadline() {
    let (_, mut tracker) = setup();
    let project = Uuid::new_v4();
    let yesterday = noon() - Duration::days(1);
    let tomorrow = noon() + Duration::days(1);

    let done = add(&mut tracker, project, Priority::Low, yesterday);
    tracker.tasks_mut().toggle_complete(done.id).unwrap();
    add(&mut tracker, project, Priority::Low, yesterday);
    add(&mut tracker, project, Priority::Low, tomorrow);

    let stats = tracker.dashboard().stats();
    assert_eq!(stats.overdue_tasks, 1);
    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.pending_tasks, 2);
}

#[test]
fn completed_today_uses_calendar_day_of_now() {
    let (clock, mut tracker) = setup();
    let project = Uuid::new_v4();
    let deadline = noon() + Duration::days(3);

    clock.set(noon() - Duration::days(1));
    let yesterday_done = add(&mut tracker, project, Priority::Low, deadline);
    let today_done = add(&mut tracker, project, Priority::Low, deadline);
    tracker.tasks_mut().toggle_complete(yesterday_done.id).unwrap();
    clock.set(noon() + Duration::hours(2));
    tracker.tasks_mut().toggle_complete(today_done.id).unwrap();

    let stats = tracker.dashboard().stats();
    assert_eq!(stats.completed_tasks, 2);
    assert_eq!(stats.completed_today, 1);

    clock.set(noon() + Duration::days(1));
    assert_eq!(tracker.dashboard().stats().completed_today, 0);
}

#[test]
fn due_today_ignores_completion_and_excludes_next_midnight() {
    let (_, mut tracker) = setup();
    let project = Uuid::new_v4();
    let midnight = noon().date().and_hms_opt(0, 0, 0).unwrap();

    add(&mut tracker, project, Priority::Low, midnight);
    let done = add(&mut tracker, project, Priority::Low, noon() + Duration::hours(11));
    tracker.tasks_mut().toggle_complete(done.id).unwrap();
    add(&mut tracker, project, Priority::Low, midnight + Duration::days(1));
    add(&mut tracker, project, Priority::Low, midnight - Duration::seconds(1));

    assert_eq!(tracker.dashboard().stats().due_today, 2);

    let now = tracker.clock().now();
    assert_eq!(tracker.tasks().list_due_today(now).len(), 2);
}

#[test]
fn priority_and_project_breakdowns() {
    let (_, mut tracker) = setup();
    let work = tracker
        .projects_mut()
        .create_project(NewProject::new("Work", "", ""));
    let idle = tracker
        .projects_mut()
        .create_project(NewProject::new("Idle", "", ""));
    let later = noon() + Duration::days(2);

    add(&mut tracker, work.id, Priority::High, later);
    add(&mut tracker, work.id, Priority::High, later);
    add(&mut tracker, work.id, Priority::Medium, later);
    add(&mut tracker, Uuid::new_v4(), Priority::Low, later);

    let stats = tracker.dashboard().stats();
    assert_eq!(stats.by_priority.high, 2);
    assert_eq!(stats.by_priority.get(Priority::Medium), 1);
    assert_eq!(stats.by_priority.low, 1);

    assert_eq!(stats.by_project.len(), 2);
    assert_eq!(stats.project_count("Work"), Some(3));
    assert_eq!(stats.project_count("Idle"), Some(0));
    assert_eq!(stats.by_project[1].project_id, idle.id);
    let counted: usize = stats.by_project.iter().map(|entry| entry.count).sum();
    assert_eq!(counted, 3);
}

#[test]
fn chart_series_follow_fixed_label_order() {
    let (_, mut tracker) = setup();
    let project = Uuid::new_v4();
    let later = noon() + Duration::days(2);
    let done = add(&mut tracker, project, Priority::Low, later);
    add(&mut tracker, project, Priority::High, later);
    add(&mut tracker, project, Priority::Medium, later);
    tracker.tasks_mut().toggle_complete(done.id).unwrap();

    let charts = tracker.dashboard().chart_data();
    assert_eq!(charts.completion_chart.series, vec![1, 2]);
    assert_eq!(charts.completion_chart.labels, vec!["Completed", "Pending"]);
    assert_eq!(charts.priority_chart.series, vec![1, 1, 1]);
    assert_eq!(charts.priority_chart.labels, vec!["High", "Medium", "Low"]);
}

#[test]
fn stats_recompute_after_every_mutation() {
    let (_, mut tracker) = setup();
    let project = Uuid::new_v4();
    let task = add(&mut tracker, project, Priority::Low, noon() - Duration::hours(1));

    assert_eq!(tracker.dashboard().stats().overdue_tasks, 1);
    tracker.tasks_mut().toggle_complete(task.id).unwrap();
    assert_eq!(tracker.dashboard().stats().overdue_tasks, 0);
    tracker.tasks_mut().delete_task(task.id).unwrap();
    assert_eq!(tracker.dashboard().stats().total_tasks, 0);
}

#[test]
fn project_progress_rounds_percentages() {
    let (_, mut tracker) = setup();
    let work = tracker
        .projects_mut()
        .create_project(NewProject::new("Work", "", ""));
    let empty = tracker
        .projects_mut()
        .create_project(NewProject::new("Empty", "", ""));
    let later = noon() + Duration::days(2);
    let first = add(&mut tracker, work.id, Priority::Low, later);
    let second = add(&mut tracker, work.id, Priority::Low, later);
    add(&mut tracker, work.id, Priority::Low, later);
    tracker.tasks_mut().toggle_complete(first.id).unwrap();
    tracker.tasks_mut().toggle_complete(second.id).unwrap();

    let progress = tracker.dashboard().project_progress();
    assert_eq!(progress.len(), 2);
    assert_eq!(progress[0].project_id, work.id);
    assert_eq!(progress[0].task_count, 3);
    assert_eq!(progress[0].completed_count, 2);
    assert_eq!(progress[0].completion_percent, 67);
    assert_eq!(progress[1].project_id, empty.id);
    assert_eq!(progress[1].completion_percent, 0);
}

#[test]
fn release_scenario_with_dangling_project() {
    let (_, mut tracker) = setup();
    let work = tracker
        .projects_mut()
        .create_project(NewProject::new("Work", "#2563EB", "Briefcase"));
    let task = tracker.tasks_mut().create_task(NewTask::new(
        "Ship release",
        work.id,
        Priority::High,
        noon() + Duration::days(1),
    ));
    assert!(!task.completed);

    let toggled = tracker.tasks_mut().toggle_complete(task.id).unwrap();
    assert!(toggled.completed);
    assert!(toggled.completed_at.is_some());

    tracker.projects_mut().delete_project(work.id).unwrap();
    assert_eq!(tracker.tasks().get_task(task.id).unwrap().project_id, work.id);

    let stats = tracker.dashboard().stats();
    assert!(stats.by_project.is_empty());
    assert_eq!(stats.total_tasks, 1);
    assert_eq!(stats.completed_today, 1);
}

#[test]
fn pure_functions_agree_with_dashboard_service() {
    let (clock, mut tracker) = setup();
    let project = Uuid::new_v4();
    add(&mut tracker, project, Priority::High, noon() - Duration::hours(3));

    let tasks = tracker.tasks().list_tasks();
    let projects = tracker.projects().list_projects();
    let stats = compute_stats(&tasks, &projects, clock.now());
    assert_eq!(stats, tracker.dashboard().stats());
    assert_eq!(chart_data(&stats), tracker.dashboard().chart_data());
}
