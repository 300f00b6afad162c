//! Integration tests for bulk merging
//!
//! Tests get-or-create placement, in-place merging, and failure handling.

use clubroll_foundation::ErrorKind;
use clubroll_storage::{Club, MemoryStore, MergeReport, Player, RemoteStore, Roster};

#[test]
fn batch_builds_roster_from_nothing() {
    let mut roster = Roster::new();
    let records = [
        Player::new("mxygem").with_club("CNT").with_level(18),
        Player::new("Hoeb").with_club("CNT"),
        Player::new("Quinoa").with_club("SP"),
    ];

    let report = roster.merge_players(&records).unwrap();

    assert_eq!(
        report,
        MergeReport {
            clubs_created: 2,
            created: 3,
            merged: 0
        }
    );
    assert_eq!(
        roster.get("CNT").unwrap().player_names().collect::<Vec<_>>(),
        ["mxygem", "Hoeb"]
    );
}

#[test]
fn repeated_record_merges_into_first_placement() {
    let mut roster = Roster::new();
    let records = [
        Player::new("mxygem").with_club("CNT").with_level(18),
        Player::new("mxygem").with_club("SP").with_level(19),
    ];

    let report = roster.merge_players(&records).unwrap();

    assert_eq!((report.created, report.merged), (1, 1));
    let player = roster.player("mxygem").unwrap();
    assert_eq!(player.club, "CNT");
    assert_eq!(player.level, 19);
}

#[test]
fn error_reports_failing_position() {
    let mut roster = Roster::new();
    let records = [
        Player::new("a").with_club("A"),
        Player::new("b").with_club("A"),
        Player::new("").with_club("A"),
    ];

    let err = roster.merge_players(&records).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert!(err.to_string().contains("merge record 3"));
    assert_eq!(roster.player_count(), 2);
}

#[test]
fn atomic_merge_keeps_remote_writes() {
    let mut roster = Roster::new().with_remote(Box::new(MemoryStore::new()));
    let records = [
        Player::new("a").with_club("A"),
        Player::new("b").with_club(""),
    ];

    assert!(roster.merge_players_atomic(&records).is_err());

    assert!(roster.is_empty());
    let remote = roster.remote().unwrap();
    let stored: Club = remote.get("A").unwrap().unwrap();
    assert_eq!(stored.player_names().collect::<Vec<_>>(), ["a"]);
}
