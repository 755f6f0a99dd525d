//! Tests for RecordStore
//!
//! These tests verify:
//! - A missing store file behaves as an empty store
//! - Sequential id assignment and id exhaustion
//! - Append/scan/find round trips in file order
//! - In-place updates touch only the changed record and fields
//! - Truncated or corrupt data surfaces as an error without hiding earlier records

use std::fs::{self, OpenOptions};
use std::io::Write;

use studentdb::config::Config;
use studentdb::record::{encode_record, Age, Student, StudentId, StudentName, RECORD_SIZE};
use studentdb::{RecordStore, StudentDbError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_store() -> (TempDir, RecordStore) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .store_path(temp_dir.path().join("Students.bin"))
        .sync_writes(false)
        .build();
    let store = RecordStore::open(&config).unwrap();
    (temp_dir, store)
}

fn age(years: u8) -> Age {
    Age::new(years).unwrap()
}

fn name(text: &str) -> StudentName {
    StudentName::new(text).unwrap()
}

fn id(raw: u32) -> StudentId {
    StudentId::new(raw).unwrap()
}

fn student(raw_id: u32, years: u8, text: &str) -> Student {
    Student::new(id(raw_id), age(years), name(text))
}

fn populate(store: &RecordStore, entries: &[(u8, &str)]) -> Vec<Student> {
    entries
        .iter()
        .map(|(years, text)| store.create(age(*years), name(text)).unwrap())
        .collect()
}

fn read_bytes(store: &RecordStore) -> Vec<u8> {
    fs::read(store.path()).unwrap()
}

// =============================================================================
// Empty Store Tests
// =============================================================================

#[test]
fn test_missing_store_is_empty() {
    let (_temp, store) = setup_temp_store();

    assert!(!store.path().exists());
    assert_eq!(store.scan_all().unwrap().count(), 0);
    assert_eq!(store.find_by_id(id(1)).unwrap(), None);
    assert_eq!(store.len().unwrap(), 0);
    assert!(store.is_empty().unwrap());
}

#[test]
fn test_missing_store_next_id_is_one() {
    let (_temp, store) = setup_temp_store();

    assert_eq!(store.next_id().unwrap(), StudentId::FIRST);
}

#[test]
fn test_update_on_missing_store_returns_none() {
    let (_temp, store) = setup_temp_store();

    let result = store.update_in_place(id(1), |s| s.age = age(40)).unwrap();

    assert_eq!(result, None);
    assert!(!store.path().exists());
}

#[test]
fn test_empty_file_is_empty_store() {
    let (_temp, store) = setup_temp_store();
    fs::File::create(store.path()).unwrap();

    assert_eq!(store.scan_all().unwrap().count(), 0);
    assert_eq!(store.next_id().unwrap(), StudentId::FIRST);
}

#[test]
fn test_open_rejects_directory_path() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder().store_path(temp_dir.path()).build();

    assert!(matches!(RecordStore::open(&config), Err(StudentDbError::Config(_))));
}

// =============================================================================
// Append / Scan Tests
// =============================================================================

#[test]
fn test_append_creates_file() {
    let (_temp, store) = setup_temp_store();

    store.append(&student(1, 20, "Ada")).unwrap();

    assert!(store.path().exists());
    assert_eq!(fs::metadata(store.path()).unwrap().len(), RECORD_SIZE as u64);
}

#[test]
fn test_file_length_is_count_times_record_size() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob"), (40, "Cy")]);

    assert_eq!(fs::metadata(store.path()).unwrap().len(), 3 * RECORD_SIZE as u64);
    assert_eq!(store.len().unwrap(), 3);
}

#[test]
fn test_scan_returns_file_order() {
    let (_temp, store) = setup_temp_store();
    // Ids deliberately out of numeric order
    store.append(&student(9, 20, "Nine")).unwrap();
    store.append(&student(2, 21, "Two")).unwrap();
    store.append(&student(5, 22, "Five")).unwrap();

    let ids: Vec<u32> = store
        .scan_all()
        .unwrap()
        .map(|s| s.unwrap().id().get())
        .collect();

    assert_eq!(ids, vec![9, 2, 5]);
}

#[test]
fn test_scan_matches_appended_bytes() {
    let (_temp, store) = setup_temp_store();
    let ada = student(1, 20, "Ada");
    store.append(&ada).unwrap();

    assert_eq!(read_bytes(&store), encode_record(&ada).to_vec());
}

// =============================================================================
// Id Assignment Tests
// =============================================================================

#[test]
fn test_sequential_ids_from_one() {
    let (_temp, store) = setup_temp_store();

    let created = populate(
        &store,
        &[(20, "Ada"), (75, "Bob"), (5, "Cy"), (33, "Di"), (41, "Ed")],
    );

    let ids: Vec<u32> = created.iter().map(|s| s.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_next_id_follows_largest_id() {
    let (_temp, store) = setup_temp_store();
    store.append(&student(7, 20, "Seven")).unwrap();
    store.append(&student(3, 20, "Three")).unwrap();

    assert_eq!(store.next_id().unwrap().get(), 8);
}

#[test]
fn test_next_id_exhausted() {
    let (_temp, store) = setup_temp_store();
    store.append(&student(u32::MAX, 20, "Last")).unwrap();

    assert!(matches!(store.next_id(), Err(StudentDbError::IdSpaceExhausted)));
}

#[test]
fn test_create_refused_when_exhausted_leaves_store_unchanged() {
    let (_temp, store) = setup_temp_store();
    store.append(&student(u32::MAX, 20, "Last")).unwrap();
    let before = read_bytes(&store);

    let result = store.create(age(30), name("Extra"));

    assert!(matches!(result, Err(StudentDbError::IdSpaceExhausted)));
    assert_eq!(read_bytes(&store), before);
}

// =============================================================================
// Find Tests
// =============================================================================

#[test]
fn test_find_after_append() {
    let (_temp, store) = setup_temp_store();
    let created = populate(&store, &[(20, "Ada"), (30, "Bob")]);

    for expected in &created {
        let found = store.find_by_id(expected.id()).unwrap().unwrap();
        assert_eq!(&found, expected);
    }
}

#[test]
fn test_find_missing_id() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);

    assert_eq!(store.find_by_id(id(99)).unwrap(), None);
}

#[test]
fn test_find_returns_first_match() {
    let (_temp, store) = setup_temp_store();
    store.append(&student(4, 20, "First")).unwrap();
    store.append(&student(4, 21, "Second")).unwrap();

    let found = store.find_by_id(id(4)).unwrap().unwrap();
    assert_eq!(found.name.as_str(), "First");
}

// =============================================================================
// Update Tests
// =============================================================================

#[test]
fn test_update_age_only_keeps_name_bytes() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob"), (40, "Cy")]);
    let before = read_bytes(&store);

    let updated = store.update_in_place(id(2), |s| s.age = age(31)).unwrap().unwrap();

    assert_eq!(updated, student(2, 31, "Bob"));
    let after = read_bytes(&store);
    assert_eq!(after.len(), before.len());

    let start = RECORD_SIZE;
    let end = 2 * RECORD_SIZE;
    // Only the age byte of the second record differs
    for (i, (a, b)) in before.iter().zip(after.iter()).enumerate() {
        if i == start + 4 {
            assert_eq!((*a, *b), (30, 31));
        } else {
            assert_eq!(a, b, "byte {} changed", i);
        }
    }
    assert_eq!(&after[start + 5..end], &before[start + 5..end]);
}

#[test]
fn test_update_name_only_keeps_age() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob")]);

    store
        .update_in_place(id(2), |s| s.name = name("Robert"))
        .unwrap()
        .unwrap();

    let found = store.find_by_id(id(2)).unwrap().unwrap();
    assert_eq!(found, student(2, 30, "Robert"));
    assert_eq!(store.find_by_id(id(1)).unwrap().unwrap(), student(1, 20, "Ada"));
}

#[test]
fn test_update_shorter_name_clears_old_bytes() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Bartholomew")]);

    store.update_in_place(id(1), |s| s.name = name("Bo")).unwrap();

    let bytes = read_bytes(&store);
    assert_eq!(&bytes[5..7], b"Bo");
    assert!(bytes[7..RECORD_SIZE].iter().all(|&b| b == 0));
}

#[test]
fn test_update_noop_leaves_file_unchanged() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob")]);
    let before = read_bytes(&store);

    let result = store.update_in_place(id(1), |_| {}).unwrap();

    assert_eq!(result, Some(student(1, 20, "Ada")));
    assert_eq!(read_bytes(&store), before);
}

#[test]
fn test_update_to_same_values_is_idempotent() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob")]);
    let before = read_bytes(&store);

    store
        .update_in_place(id(2), |s| {
            s.age = age(30);
            s.name = name("Bob");
        })
        .unwrap();

    assert_eq!(read_bytes(&store), before);
}

#[test]
fn test_update_cannot_change_id() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);

    let updated = store
        .update_in_place(id(1), |s| *s = student(500, 60, "Impostor"))
        .unwrap()
        .unwrap();

    assert_eq!(updated, student(1, 60, "Impostor"));
    assert_eq!(store.find_by_id(id(500)).unwrap(), None);
    assert_eq!(store.next_id().unwrap().get(), 2);
}

#[test]
fn test_update_missing_id_leaves_file_unchanged() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);
    let before = read_bytes(&store);

    let result = store.update_in_place(id(42), |s| s.age = age(50)).unwrap();

    assert_eq!(result, None);
    assert_eq!(read_bytes(&store), before);
}

#[test]
fn test_update_last_record() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob"), (40, "Cy")]);

    store.update_in_place(id(3), |s| s.age = age(41)).unwrap();

    let all: Vec<Student> = store.scan_all().unwrap().map(|s| s.unwrap()).collect();
    assert_eq!(
        all,
        vec![student(1, 20, "Ada"), student(2, 30, "Bob"), student(3, 41, "Cy")]
    );
}

// =============================================================================
// Corruption Tests
// =============================================================================

#[test]
fn test_truncated_tail_reported_after_valid_records() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada"), (30, "Bob")]);

    let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
    file.write_all(&[1, 2, 3]).unwrap();
    drop(file);

    let items: Vec<_> = store.scan_all().unwrap().collect();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].as_ref().unwrap(), &student(1, 20, "Ada"));
    assert_eq!(items[1].as_ref().unwrap(), &student(2, 30, "Bob"));
    assert!(matches!(
        items[2],
        Err(StudentDbError::CorruptRecord { offset, .. }) if offset == 2 * RECORD_SIZE as u64
    ));
}

#[test]
fn test_truncated_tail_fails_next_id() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);

    let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
    file.write_all(&[0u8; 5]).unwrap();
    drop(file);

    assert!(matches!(store.next_id(), Err(StudentDbError::CorruptRecord { .. })));
}

#[test]
fn test_find_before_corrupt_tail_succeeds() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);

    let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
    file.write_all(&[9u8; 10]).unwrap();
    drop(file);

    assert_eq!(store.find_by_id(id(1)).unwrap(), Some(student(1, 20, "Ada")));
    assert!(store.find_by_id(id(2)).is_err());
}

#[test]
fn test_append_refused_after_partial_tail() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);

    let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
    file.write_all(&[1, 2, 3]).unwrap();
    drop(file);
    let before = read_bytes(&store);

    let result = store.append(&student(2, 30, "Bob"));

    assert!(matches!(
        result,
        Err(StudentDbError::CorruptRecord { offset, .. }) if offset == RECORD_SIZE as u64
    ));
    assert_eq!(read_bytes(&store), before);
}

#[test]
fn test_scan_stops_after_corrupt_record() {
    let (_temp, store) = setup_temp_store();
    populate(&store, &[(20, "Ada")]);

    // Zero id is never written by the store
    let mut bad = [0u8; RECORD_SIZE];
    bad[4] = 20;
    bad[5] = b'X';
    let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
    file.write_all(&bad).unwrap();
    file.write_all(&encode_record(&student(3, 30, "After"))).unwrap();
    drop(file);

    let items: Vec<_> = store.scan_all().unwrap().collect();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(items[1].is_err());
}
