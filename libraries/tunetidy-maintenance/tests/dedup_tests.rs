//! Integration tests for the deduplication pass

use std::fs;
use tempfile::TempDir;
use tunetidy_maintenance::{Deduplicator, MaintenanceError};

use test_helpers::{init_logging, write_track, FixtureProbe};

#[test]
fn identical_keys_keep_exactly_one_survivor() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let a = write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    let b = write_track(temp.path(), "b.mp3", 1000, 180, "X", "Y", "Unknown");

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    // Year is not part of the key, so one of the two must go
    assert_eq!(report.survivors.len(), 1);
    assert_eq!(report.deleted.len(), 1);
    assert!(report.failures.is_empty());

    let survivor = &report.survivors[0];
    let deleted = &report.deleted[0];
    assert!(survivor.exists());
    assert!(!deleted.exists());
    assert_ne!(survivor, deleted);
    for path in [&a, &b] {
        assert!(path == survivor || path == deleted);
    }
}

#[test]
fn survivor_is_first_in_traversal_order() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    write_track(temp.path(), "b.mp3", 1000, 180, "X", "Y", "1999");
    write_track(temp.path(), "c.mp3", 1000, 180, "X", "Y", "1987");

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    // Whatever order the walk produced, the survivor must be the file the
    // report lists first and the other two are gone
    assert_eq!(report.survivors.len(), 1);
    assert_eq!(report.deleted.len(), 2);
    assert!(report.survivors[0].exists());
    for deleted in &report.deleted {
        assert!(!deleted.exists());
    }
}

#[test]
fn distinct_keys_all_survive() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    write_track(temp.path(), "b.mp3", 2000, 180, "X", "Y", "2001");
    write_track(temp.path(), "c.mp3", 1000, 200, "X", "Y", "2001");
    write_track(temp.path(), "d.mp3", 1000, 180, "Z", "Y", "2001");

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    assert_eq!(report.survivors.len(), 4);
    assert!(report.deleted.is_empty());
}

#[test]
fn second_run_is_a_noop() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    write_track(temp.path(), "b.mp3", 1000, 180, "X", "Y", "2002");
    write_track(temp.path(), "c.mp3", 500, 90, "Other", "Y", "2001");

    let dedup = Deduplicator::new(FixtureProbe);
    let first = dedup.deduplicate(temp.path()).unwrap();
    assert_eq!(first.deleted.len(), 1);

    let second = dedup.deduplicate(temp.path()).unwrap();
    assert!(second.deleted.is_empty());
    assert!(second.failures.is_empty());

    let mut expected: Vec<_> = first.survivors.clone();
    expected.sort();
    let mut actual = second.survivors;
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn unextractable_files_are_left_untouched() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    let garbage = temp.path().join("garbage.mp3");
    fs::write(&garbage, b"not a fixture track").unwrap();
    // Same bytes twice: would be duplicates if extraction worked
    let garbage_copy = temp.path().join("garbage_copy.mp3");
    fs::write(&garbage_copy, b"not a fixture track").unwrap();

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    assert_eq!(report.survivors.len(), 1);
    assert_eq!(report.skipped, 2);
    assert!(garbage.exists());
    assert!(garbage_copy.exists());
}

#[test]
fn files_without_the_extension_are_not_candidates() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    // Valid fixture content, wrong extension: never enumerated
    write_track(temp.path(), "b.txt", 1000, 180, "X", "Y", "2001");

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    assert_eq!(report.survivors.len(), 1);
    assert!(report.deleted.is_empty());
    assert!(temp.path().join("b.txt").exists());
}

#[test]
fn duplicates_across_subdirectories_collapse() {
    init_logging();
    let temp = TempDir::new().unwrap();
    let sub1 = temp.path().join("Sub1");
    let sub2 = temp.path().join("Sub2");
    fs::create_dir_all(&sub1).unwrap();
    fs::create_dir_all(&sub2).unwrap();
    write_track(&sub1, "song.mp3", 1000, 180, "X", "Y", "2001");
    write_track(&sub2, "song.mp3", 1000, 180, "X", "Y", "2001");

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    assert_eq!(report.survivors.len(), 1);
    assert_eq!(report.deleted.len(), 1);
}

#[test]
fn readonly_duplicate_is_still_deleted() {
    init_logging();
    let temp = TempDir::new().unwrap();
    write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    let locked = write_track(temp.path(), "z.mp3", 1000, 180, "X", "Y", "2001");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&locked, perms).unwrap();

    let report = Deduplicator::new(FixtureProbe)
        .deduplicate(temp.path())
        .unwrap();

    assert_eq!(report.survivors.len(), 1);
    assert_eq!(report.deleted.len(), 1);
    assert!(report.failures.is_empty());
}

#[test]
fn invalid_root_fails_immediately() {
    init_logging();
    let dedup = Deduplicator::new(FixtureProbe);

    assert!(matches!(
        dedup.deduplicate(std::path::Path::new("/nonexistent/music")),
        Err(MaintenanceError::PathNotFound(_))
    ));

    let temp = TempDir::new().unwrap();
    let file = write_track(temp.path(), "a.mp3", 1000, 180, "X", "Y", "2001");
    assert!(matches!(
        dedup.deduplicate(&file),
        Err(MaintenanceError::NotADirectory(_))
    ));
}
