//! Integration tests for roster snapshots
//!
//! Tests file round trips and byte-stable saves.

use clubroll_foundation::{ErrorKind, Location};
use clubroll_runtime::snapshot::{self, JsonFileStore, SnapshotStore};
use clubroll_storage::{Club, Player, Roster};

fn sample() -> Roster {
    let mut roster = Roster::new();
    roster
        .create(Club::new("DYR").with_location(Location::new(10, 12)))
        .unwrap();
    roster.create_player("DYR", Player::new("RubyBlack").with_level(30)).unwrap();
    roster
        .create_player("DYR", Player::new("Spooffy").with_might(1_200_000).with_in_hive(true))
        .unwrap();
    roster
}

#[test]
fn store_roundtrip_preserves_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("clubs.json"));

    store.save(&sample()).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.all(), sample().all());
    assert_eq!(
        loaded.get("DYR").unwrap().player_names().collect::<Vec<_>>(),
        ["RubyBlack", "Spooffy"]
    );
}

#[test]
fn saving_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clubs.json");

    snapshot::save_to_file(&sample(), &path).unwrap();
    let first = std::fs::read(&path).unwrap();
    let reloaded = snapshot::load_from_file(&path).unwrap();
    snapshot::save_to_file(&reloaded, &path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), first);
}

#[test]
fn empty_file_is_empty_roster() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(snapshot::load_from_file(file.path()).unwrap().is_empty());
}

#[test]
fn corrupt_file_is_decode_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clubs.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = snapshot::load_from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Decode(_)));
    assert!(err.to_string().contains("clubs.json"));
}

#[test]
fn unwritable_path_is_io_error() {
    let err = snapshot::save_to_file(&sample(), "/nonexistent/dir/clubs.json").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
