//! Integration tests for sessions
//!
//! Tests command execution against a snapshot file on disk.

use std::path::Path;

use clubroll_foundation::ErrorKind;
use clubroll_runtime::{Outcome, RuntimeConfig, Session};

fn open(path: &Path) -> Session {
    Session::open(&RuntimeConfig::at(path)).unwrap()
}

#[test]
fn mutations_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clubs.json");

    let mut session = open(&path);
    session.run_line("add club CNT").unwrap();
    session.run_line("add club SP").unwrap();
    session.run_line("add player mxygem CNT 18").unwrap();
    session.run_line("move player mxygem SP").unwrap();

    let mut reopened = open(&path);
    let Outcome::Player(player) = reopened.run_line("get player mxygem").unwrap() else {
        panic!("expected a player");
    };
    assert_eq!(player.club, "SP");
    assert_eq!(player.level, 18);
}

#[test]
fn rejected_command_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clubs.json");

    let mut session = open(&path);
    session.run_line("add club DYR").unwrap();
    session.run_line("add player RubyBlack DYR").unwrap();
    session.run_line("add player Spooffy DYR").unwrap();
    let before = std::fs::read(&path).unwrap();

    let err = session.run_line("remove player Wishy").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn failed_import_is_rolled_back_and_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clubs.json");
    let csv = dir.path().join("players.csv");
    std::fs::write(&csv, "name,club\nQuinoa,SP\nJasmin,\n").unwrap();

    let mut session = open(&path);
    session.run_line("add club CNT").unwrap();
    let before = std::fs::read(&path).unwrap();

    let line = format!("import players {}", csv.display());
    let err = session.run_line(&line).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert!(session.roster().get("SP").is_err());
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn successful_import_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("players.csv");
    std::fs::write(&csv, "name,club\nQuinoa,SP\nJasmin,SP\n").unwrap();

    let mut session = open(&dir.path().join("clubs.json"));
    let line = format!("import players {}", csv.display());
    let Outcome::Merged(report) = session.run_line(&line).unwrap() else {
        panic!("expected a merge report");
    };
    assert_eq!((report.clubs_created, report.created), (1, 2));
}

#[test]
fn missing_snapshot_can_be_required() {
    let dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig::at(dir.path().join("absent.json"))
        .with_create_missing_snapshot(false);

    let err = Session::open(&config).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
