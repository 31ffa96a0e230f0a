//! Integration tests for the task service against tempfile-backed storage

use chrono::{NaiveDate, NaiveTime};
use tasktrack::{Priority, SortKey, Status, Storage, TaskService};
use tempfile::TempDir;

fn test_service(dir: &TempDir) -> TaskService {
    TaskService::new(Storage::new(dir.path().join("tasks.json"), false))
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

// On a fresh store, N adds assign ids 1..N in call order
#[test]
fn test_add_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    for i in 1..=5u32 {
        let task = service
            .add(format!("Task {}", i), None, Priority::Medium)
            .unwrap();
        assert_eq!(task.id, i);
        assert_eq!(task.status, Status::Pending);
    }

    let all = service.list(None, None).unwrap();
    assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

// Each operation reloads from the file; a second service over the same
// path sees everything the first one wrote
#[test]
fn test_state_persists_across_service_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");

    let service = TaskService::new(Storage::new(&path, false));
    service
        .add("Write report".to_string(), Some(date("2024-06-01")), Priority::High)
        .unwrap();
    service.add("No deadline".to_string(), None, Priority::Low).unwrap();
    drop(service);

    let reopened = TaskService::new(Storage::new(&path, false));
    let tasks = reopened.list(None, None).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "Write report");
    assert_eq!(tasks[0].deadline, Some(date("2024-06-01")));
    assert_eq!(tasks[1].deadline, None);
}

// Filtering returns exactly the subset with the given status
#[test]
fn test_list_filters_by_status() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service.add("a".to_string(), None, Priority::Medium).unwrap();
    service.add("b".to_string(), None, Priority::Medium).unwrap();
    service.add("c".to_string(), None, Priority::Medium).unwrap();
    service.update(2, None, Some(Status::Completed), None).unwrap();

    let pending = service.list(Some(Status::Pending), None).unwrap();
    assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);

    let completed = service.list(Some(Status::Completed), None).unwrap();
    assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
}

// Sorting is a display view only; the stored order stays insertion order
#[test]
fn test_sort_does_not_mutate_storage_order() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service.add("late".to_string(), Some(date("2030-01-01")), Priority::Low).unwrap();
    service.add("early".to_string(), Some(date("2020-01-01")), Priority::High).unwrap();

    let by_deadline = service.list(None, Some(SortKey::Deadline)).unwrap();
    assert_eq!(by_deadline.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2, 1]);

    let unsorted = service.list(None, None).unwrap();
    assert_eq!(unsorted.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
}

// Update overwrites only the supplied fields
#[test]
fn test_update_partial_fields() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service
        .add("Original".to_string(), Some(date("2024-05-01")), Priority::High)
        .unwrap();

    assert!(service.update(1, None, Some(Status::Completed), None).unwrap());

    let task = &service.list(None, None).unwrap()[0];
    assert_eq!(task.status, Status::Completed);
    assert_eq!(task.description, "Original");
    assert_eq!(task.deadline, Some(date("2024-05-01")));
    assert_eq!(task.priority, Priority::High);
}

// After a successful delete, the id no longer resolves
#[test]
fn test_delete_then_update_not_found() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service.add("a".to_string(), None, Priority::Medium).unwrap();
    service.add("b".to_string(), None, Priority::Medium).unwrap();

    assert!(service.delete(1).unwrap());
    assert!(!service.update(1, Some("x".to_string()), None, None).unwrap());

    let remaining = service.list(None, None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 2);
}

// A freed id is not re-issued while another task still exists
#[test]
fn test_id_not_reused_after_delete() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service.add("a".to_string(), None, Priority::Medium).unwrap();
    service.add("b".to_string(), None, Priority::Medium).unwrap();
    service.delete(1).unwrap();

    let task = service.add("c".to_string(), None, Priority::Medium).unwrap();
    assert_eq!(task.id, 3);
}

// Not-found on an empty store: no error, no file written
#[test]
fn test_not_found_on_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    let service = TaskService::new(Storage::new(&path, false));

    assert!(!service.update(1, Some("x".to_string()), None, None).unwrap());
    assert!(!service.delete(1).unwrap());
    assert!(!path.exists());
}

// Search matches case-insensitively on the description
#[test]
fn test_search_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service.add("Team Meeting prep".to_string(), None, Priority::Medium).unwrap();
    service.add("Buy groceries".to_string(), None, Priority::Medium).unwrap();

    let found = service.search("meeting").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].description, "Team Meeting prep");

    assert!(service.search("zzz").unwrap().is_empty());
}

// Due-soon horizon: inclusive at reference + 1 day, overdue included,
// null deadline excluded
#[test]
fn test_due_soon_boundary() {
    let dir = TempDir::new().unwrap();
    let service = test_service(&dir);

    service.add("boundary".to_string(), Some(date("2024-01-02")), Priority::Medium).unwrap();
    service.add("beyond".to_string(), Some(date("2024-01-03")), Priority::Medium).unwrap();
    service.add("overdue".to_string(), Some(date("2023-12-20")), Priority::Medium).unwrap();
    service.add("undated".to_string(), None, Priority::Medium).unwrap();

    let reference = date("2024-01-01").and_time(NaiveTime::MIN);
    let due = service.due_soon_at(reference).unwrap();
    assert_eq!(
        due.iter().map(|t| t.description.as_str()).collect::<Vec<_>>(),
        vec!["boundary", "overdue"]
    );
}
