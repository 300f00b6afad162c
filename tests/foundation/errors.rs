//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use clubroll_foundation::{Error, ErrorContext, ErrorKind, Subject};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn club_not_found_names_club() {
    let err = Error::club_not_found("KMA");
    assert!(matches!(err.kind, ErrorKind::NotFound(Subject::Club(ref name)) if name == "KMA"));
    assert!(err.is_not_found());
    assert_eq!(format!("{err}"), r#"club "KMA" not found"#);
}

#[test]
fn player_exists_names_holding_club() {
    let err = Error::player_exists("Hoeb", "CNT");
    assert!(matches!(err.kind, ErrorKind::AlreadyExists(_)));
    let msg = format!("{err}");
    assert!(msg.contains("Hoeb"));
    assert!(msg.contains("CNT"));
}

#[test]
fn partial_move_keeps_cause() {
    let err = Error::partial_move("mxygem", "CNT", "SP", Error::adapter("timeout"));
    let ErrorKind::PartialMove { cause, .. } = &err.kind else {
        panic!("expected partial move");
    };
    assert!(matches!(cause.kind, ErrorKind::Adapter(_)));
    assert!(format!("{err}").contains("timeout"));
}

// =============================================================================
// Error Classification
// =============================================================================

#[test]
fn rejections_versus_failures() {
    assert!(Error::validation("bad").is_rejection());
    assert!(Error::player_not_found("Wishy").is_rejection());
    assert!(Error::club_exists("SP").is_rejection());

    assert!(!Error::adapter("down").is_rejection());
    assert!(!Error::io("disk full").is_rejection());
    assert!(!Error::decode("bad json").is_rejection());
    assert!(!Error::partial_move("a", "b", "c", Error::adapter("x")).is_rejection());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn during_sets_then_stacks() {
    let err = Error::club_not_found("KMA")
        .during("get club", "KMA")
        .during("move player", "Hoeb");

    let ctx = err.context.as_ref().unwrap();
    assert_eq!(ctx.operation.as_deref(), Some("get club"));
    assert_eq!(ctx.frames.len(), 1);

    let msg = format!("{err}");
    assert!(msg.contains(r#"during get club "KMA""#));
    assert!(msg.contains(r#"in move player "Hoeb""#));
}

#[test]
fn explicit_context() {
    let err = Error::validation("x").with_context(ErrorContext::new().with_subject("SP"));
    assert!(format!("{err}").ends_with(r#"(for "SP")"#));
}
