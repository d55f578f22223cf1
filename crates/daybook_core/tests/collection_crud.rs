use daybook_core::{
    Assignment, Collection, JsonFileStore, Priority, Record, RecordStatus, ServiceError, Todo,
};
use daybook_core::{parse_datetime, CollectionStore};
use uuid::Uuid;

fn clock() -> chrono::NaiveDateTime {
    parse_datetime("2024-01-08 09:00").unwrap()
}

fn assignment(title: &str, course: &str) -> Assignment {
    Assignment {
        record: Record::new(title, clock()),
        course: course.to_string(),
        notes: String::new(),
    }
}

#[test]
fn add_and_get_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    let item = assignment("problem set 4", "Linear Algebra");
    let id = assignments.add(item.clone()).unwrap();

    let loaded = assignments.get(id).unwrap().unwrap();
    assert_eq!(loaded, item);
}

#[test]
fn get_unknown_id_is_none_not_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    assert!(assignments.get(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn update_replaces_stored_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    let mut item = assignment("draft", "History");
    assignments.add(item.clone()).unwrap();

    item.record.title = "final essay".to_string();
    item.record.priority = Priority::High;
    item.notes = "cite three sources".to_string();
    assignments.update(&item).unwrap();

    let loaded = assignments.get(item.record.id).unwrap().unwrap();
    assert_eq!(loaded.record.title, "final essay");
    assert_eq!(loaded.record.priority, Priority::High);
    assert_eq!(loaded.notes, "cite three sources");
}

#[test]
fn update_missing_record_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    let item = assignment("ghost", "None");
    let err = assignments.update(&item).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(id) if id == item.record.id));
}

#[test]
fn complete_then_reopen_round_trips_status() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let todos = Collection::<Todo, _>::new(&store);

    let todo = Todo {
        record: Record::new("water plants", clock()),
    };
    let id = todos.add(todo).unwrap();

    todos.complete(id).unwrap();
    assert_eq!(
        todos.get(id).unwrap().unwrap().record.status,
        RecordStatus::Completed
    );

    todos.reopen(id).unwrap();
    assert_eq!(
        todos.get(id).unwrap().unwrap().record.status,
        RecordStatus::Pending
    );
}

#[test]
fn delete_returns_removed_record_and_drops_it() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    let keep = assignment("keep", "A");
    let drop = assignment("drop", "B");
    assignments.add(keep.clone()).unwrap();
    assignments.add(drop.clone()).unwrap();

    let removed = assignments.delete(drop.record.id).unwrap();
    assert_eq!(removed.record.title, "drop");

    let remaining = assignments.list().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].record.id, keep.record.id);
}

#[test]
fn delete_unknown_id_is_not_found_and_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    assignments.add(assignment("stays", "A")).unwrap();
    let err = assignments.delete(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
    assert_eq!(assignments.list().unwrap().len(), 1);
}

#[test]
fn clear_empties_the_collection() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    assignments.add(assignment("one", "A")).unwrap();
    assignments.add(assignment("two", "B")).unwrap();
    assignments.clear().unwrap();
    assert!(assignments.list().unwrap().is_empty());
}

#[test]
fn mutations_reload_before_overwriting() {
    // An external edit between two menu actions must survive the next
    // mutation, because every mutation reloads the file first.
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path());
    let assignments = Collection::<Assignment, _>::new(&store);

    let first = assignment("added via service", "A");
    assignments.add(first.clone()).unwrap();

    let external = assignment("added externally", "B");
    let mut on_disk: Vec<Assignment> = store.load("assignments").unwrap();
    on_disk.push(external.clone());
    store.save("assignments", &on_disk).unwrap();

    assignments.complete(first.record.id).unwrap();

    let titles: Vec<String> = assignments
        .list()
        .unwrap()
        .into_iter()
        .map(|a| a.record.title)
        .collect();
    assert!(titles.contains(&"added externally".to_string()));
    assert!(titles.contains(&"added via service".to_string()));
}
