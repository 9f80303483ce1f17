//! Tests for MemoryStore
//!
//! The volatile store follows the same contract as the table store.

use studentdb::storage::{MemoryStore, RecordStore};
use studentdb::{ErrorKind, StudentError, StudentRecord};

fn seeded() -> MemoryStore {
    let store = MemoryStore::new();
    store.initialize().unwrap();
    store.add(&StudentRecord::new(1, "Ann", 20, 3.5)).unwrap();
    store.add(&StudentRecord::new(2, "Bo", 22, 3.9)).unwrap();
    store
}

#[test]
fn test_starts_empty() {
    let store = MemoryStore::new();

    assert!(store.is_empty().unwrap());
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_exists_and_get() {
    let store = seeded();

    assert!(store.exists(1).unwrap());
    assert!(!store.exists(3).unwrap());
    assert_eq!(store.get(2).unwrap().map(|r| r.name), Some("Bo".to_string()));
    assert_eq!(store.get(3).unwrap(), None);
}

#[test]
fn test_duplicate_add_rejected() {
    let store = seeded();

    let err = store.add(&StudentRecord::new(2, "Other", 30, 1.0)).unwrap_err();

    assert!(matches!(err, StudentError::DuplicateKey(2)));
    assert_eq!(store.get(2).unwrap().unwrap().name, "Bo");
}

#[test]
fn test_update_and_delete() {
    let store = seeded();

    store.update(1, "Ann B", 21, 3.6).unwrap();
    store.delete(2).unwrap();

    assert_eq!(
        store.list_all().unwrap(),
        vec![StudentRecord::new(1, "Ann B", 21, 3.6)]
    );
}

#[test]
fn test_missing_ids_not_found() {
    let store = seeded();

    assert_eq!(
        store.update(9, "X", 20, 1.0).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(store.delete(9).unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(store.len().unwrap(), 2);
}

#[test]
fn test_invalid_record_rejected() {
    let store = MemoryStore::new();

    let err = store.add(&StudentRecord::new(1, "Ann", 0, 3.5)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(store.is_empty().unwrap());
}
