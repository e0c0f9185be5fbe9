use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn unknown_phone_has_zero_count() {
    let store = MemoryStore::new();
    assert_eq!(count(&store, "5551234"), 0);
    assert!(!is_exhausted(&store, "5551234"));
}

#[test]
fn record_increments_and_persists() {
    let store = MemoryStore::new();
    assert_eq!(record(&store, "5551234"), 1);
    assert_eq!(record(&store, "5551234"), 2);
    assert_eq!(store.get(STORAGE_KEY).as_deref(), Some(r#"{"5551234":2}"#));
}

#[test]
fn record_keeps_other_numbers() {
    let store = MemoryStore::with_entry(STORAGE_KEY, r#"{"111":3}"#);
    record(&store, "222");
    let counts = load(&store);
    assert_eq!(counts.get("111"), Some(&3));
    assert_eq!(counts.get("222"), Some(&1));
}

#[test]
fn malformed_map_reads_as_empty_and_is_replaced_on_write() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "not json");
    assert!(load(&store).is_empty());
    assert_eq!(record(&store, "555"), 1);
    assert_eq!(load(&store).get("555"), Some(&1));
}

#[test]
fn exhausted_at_five() {
    let store = MemoryStore::with_entry(STORAGE_KEY, r#"{"555":4}"#);
    assert!(!is_exhausted(&store, "555"));
    record(&store, "555");
    assert!(is_exhausted(&store, "555"));
}

#[test]
fn counts_are_keyed_by_raw_phone_text() {
    let store = MemoryStore::new();
    record(&store, "555 1234");
    assert_eq!(count(&store, "5551234"), 0);
    assert_eq!(count(&store, "555 1234"), 1);
}
