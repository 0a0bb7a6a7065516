use taskdeck_core::{
    SharedTaskStore, TaskService, TaskServiceError, TaskValidationError, TaskView,
};
use uuid::Uuid;

#[test]
fn add_task_trims_text() {
    let service = TaskService::default();
    let id = service.add_task("  Buy milk  ").unwrap();

    let task = service.get_task(id).unwrap();
    assert_eq!(task.text, "Buy milk");
    assert_eq!(service.active_tasks(), vec![task]);
}

#[test]
fn blank_text_is_rejected_without_touching_store() {
    let service = TaskService::default();
    let id = service.add_task("keep").unwrap();
    let before = service.all_tasks();

    let add_err = service.add_task("   ").unwrap_err();
    assert_eq!(
        add_err,
        TaskServiceError::InvalidText(TaskValidationError::BlankText)
    );

    let edit_err = service.edit_task(id, "\n\t").unwrap_err();
    assert!(matches!(edit_err, TaskServiceError::InvalidText(_)));
    assert_eq!(service.all_tasks(), before);
}

#[test]
fn edit_task_reports_change_and_ignores_unknown_ids() {
    let service = TaskService::default();
    let id = service.add_task("draft").unwrap();

    assert!(service.edit_task(id, " final ").unwrap());
    assert_eq!(service.get_task(id).unwrap().text, "final");
    assert!(!service.edit_task(id, "final").unwrap());
    assert!(!service.edit_task(Uuid::new_v4(), "ghost").unwrap());
}

#[test]
fn lifecycle_through_service() {
    let service = TaskService::default();
    let a = service.add_task("a").unwrap();
    let b = service.add_task("b").unwrap();
    let c = service.add_task("c").unwrap();

    assert!(service.toggle_task(a));
    assert!(service.toggle_task(b));
    assert!(service.archive_task(b));
    assert_eq!(service.completed_tasks().len(), 1);
    assert_eq!(service.archived_tasks().len(), 1);

    assert_eq!(service.clear_completed(), 1);
    assert!(service.get_task(a).is_none());

    assert!(service.restore_task(b));
    assert_eq!(service.list(TaskView::Completed)[0].id, b);

    assert!(service.delete_task(c));
    assert!(!service.delete_task(c));
    assert!(!service.toggle_task(c));
    assert!(!service.archive_task(c));
    assert!(!service.restore_task(c));
}

#[test]
fn stats_follow_mutations() {
    let service = TaskService::default();
    let a = service.add_task("a").unwrap();
    let b = service.add_task("b").unwrap();
    service.add_task("c").unwrap();
    service.toggle_task(a);
    service.toggle_task(b);
    service.archive_task(b);

    let stats = service.stats();
    assert_eq!(
        (stats.total, stats.active, stats.completed, stats.archived),
        (3, 1, 1, 1)
    );
}

#[test]
fn services_over_one_store_share_state() {
    let store = SharedTaskStore::new();
    let writer = TaskService::new(store.clone());
    let reader = TaskService::new(store);

    let id = writer.add_task("shared").unwrap();
    assert_eq!(reader.get_task(id).unwrap().text, "shared");
    assert_eq!(reader.store().len(), 1);
}
