use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use taskdeck_core::{
    project_has_tasks, FixedClock, InMemoryProjectRepository, NewProject, NewTask, NoLatency,
    Priority, ProjectPatch, ProjectService, RepoError, Tracker,
};
use uuid::Uuid;

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

fn setup() -> ProjectService<InMemoryProjectRepository> {
    let clock = Arc::new(FixedClock::new(base_time()));
    ProjectService::new(InMemoryProjectRepository::new(clock))
}

#[test]
fn create_passes_presentation_fields_through() {
    let mut service = setup();
    let project = service.create_project(NewProject::new("Work", "#3B82F6", "Briefcase"));

    assert_eq!(project.name, "Work");
    assert_eq!(project.color, "#3B82F6");
    assert_eq!(project.icon, "Briefcase");
    assert_eq!(project.created_at, base_time());
    assert_eq!(service.get_project(project.id).unwrap(), project);
}

#[test]
fn list_keeps_insertion_order_and_unique_ids() {
    let mut service = setup();
    let a = service.create_project(NewProject::new("A", "", ""));
    let b = service.create_project(NewProject::new("B", "", ""));

    assert_ne!(a.id, b.id);
    let ids: Vec<_> = service.list_projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);
}

#[test]
fn update_merges_supplied_fields() {
    let mut service = setup();
    let project = service.create_project(NewProject::new("Home", "#10B981", "Home"));

    let updated = service
        .update_project(
            project.id,
            ProjectPatch {
                name: Some("House".to_string()),
                ..ProjectPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "House");
    assert_eq!(updated.color, "#10B981");
    assert_eq!(updated.icon, "Home");
    assert_eq!(updated.created_at, project.created_at);
}

#[test]
fn update_and_delete_unknown_id_return_not_found() {
    let mut service = setup();
    let missing = Uuid::new_v4();

    let err = service
        .update_project(missing, ProjectPatch::default())
        .unwrap_err();
    assert_eq!(err, RepoError::ProjectNotFound(missing));

    let err = service.delete_project(missing).unwrap_err();
    assert_eq!(err, RepoError::ProjectNotFound(missing));
}

#[test]
fn delete_then_get_is_absent_and_second_delete_fails() {
    let mut service = setup();
    let project = service.create_project(NewProject::new("Temp", "", ""));

    service.delete_project(project.id).unwrap();
    assert!(service.get_project(project.id).is_none());
    assert_eq!(
        service.delete_project(project.id).unwrap_err(),
        RepoError::ProjectNotFound(project.id)
    );
}

#[test]
fn store_deletes_referenced_project_and_guard_reports_it() {
    let clock = Arc::new(FixedClock::new(base_time()));
    let mut tracker = Tracker::new(clock, Arc::new(NoLatency));

    let work = tracker
        .projects_mut()
        .create_project(NewProject::new("Work", "#000", "Briefcase"));
    let empty = tracker
        .projects_mut()
        .create_project(NewProject::new("Empty", "#fff", "Box"));
    let task = tracker.tasks_mut().create_task(NewTask::new(
        "Ship release",
        work.id,
        Priority::High,
        base_time() + Duration::days(1),
    ));

    assert!(!tracker.can_delete_project(work.id));
    assert!(tracker.can_delete_project(empty.id));
    assert!(project_has_tasks(work.id, &tracker.tasks().list_tasks()));

    tracker.projects_mut().delete_project(work.id).unwrap();
    let dangling = tracker.tasks().get_task(task.id).unwrap();
    assert_eq!(dangling.project_id, work.id);
    assert!(tracker.projects().get_project(work.id).is_none());
}
