//! Integration tests for the REPL
//!
//! Drives the loop with a scripted editor.

use clubroll_foundation::{ErrorKind, Result};
use clubroll_runtime::snapshot::SnapshotStore;
use clubroll_runtime::{Repl, ScriptedEditor, Session};
use clubroll_storage::Roster;

fn transcript(lines: &[&str], session: Session) -> (Result<()>, String) {
    let mut repl = Repl::with_editor(ScriptedEditor::new(lines.iter().copied()))
        .with_output(Vec::new())
        .with_session(session)
        .without_banner();
    let result = repl.run();
    (result, String::from_utf8_lossy(repl.output()).into_owned())
}

#[test]
fn scripted_session() {
    let (result, text) = transcript(
        &[
            "add club CNT",
            "add club SP",
            "add player mxygem CNT 18",
            "move player mxygem SP",
            "move player mxygem SP",
            "remove player mxygem",
        ],
        Session::new(),
    );

    assert!(result.is_ok());
    assert!(text.contains("\"club\": \"SP\""));
    assert!(text.contains("rejected: player \"mxygem\" in club \"SP\" already exists"));
    assert!(text.trim_end().ends_with("done"));
}

/// A store whose saves always fail.
struct ReadOnly;

impl SnapshotStore for ReadOnly {
    fn load(&self) -> Result<Roster> {
        Ok(Roster::new())
    }

    fn save(&self, _roster: &Roster) -> Result<()> {
        Err(clubroll_foundation::Error::io("read-only file system"))
    }
}

#[test]
fn save_failure_ends_the_loop() {
    let session = Session::load(Box::new(ReadOnly)).unwrap();
    let (result, text) = transcript(&["list clubs", "add club SP", "list clubs"], session);

    let err = result.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
    assert_eq!(text.matches('{').count(), 1);
}
