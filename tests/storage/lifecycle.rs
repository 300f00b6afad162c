//! Integration tests for the player lifecycle
//!
//! Tests create, update, remove, and move across clubs.

use clubroll_foundation::{ErrorKind, Location};
use clubroll_storage::{Club, Player, Roster};

fn roster() -> Roster {
    let mut roster = Roster::new();
    roster.create(Club::new("CNT")).unwrap();
    roster.create(Club::new("SP")).unwrap();
    roster.create_player("CNT", Player::new("mxygem").with_level(18)).unwrap();
    roster.create_player("CNT", Player::new("Hoeb")).unwrap();
    roster.create_player("SP", Player::new("Quinoa")).unwrap();
    roster
}

// =============================================================================
// Create
// =============================================================================

#[test]
fn names_are_unique_across_clubs() {
    let mut roster = roster();
    let err = roster.create_player("SP", Player::new("mxygem")).unwrap_err();

    assert!(matches!(err.kind, ErrorKind::AlreadyExists(_)));
    assert_eq!(roster.player("mxygem").unwrap().club, "CNT");
    assert_eq!(roster.player_count(), 3);
}

#[test]
fn remove_then_recreate_moves_to_end() {
    let mut roster = roster();
    let removed = roster.remove_player("mxygem").unwrap();
    roster
        .create_player("CNT", removed.clone())
        .unwrap();

    let club = roster.get("CNT").unwrap();
    assert_eq!(club.player_names().collect::<Vec<_>>(), ["Hoeb", "mxygem"]);
    assert_eq!(roster.player("mxygem").unwrap(), removed);
}

// =============================================================================
// Update
// =============================================================================

#[test]
fn update_is_idempotent() {
    let mut roster = roster();
    let patch = Player::new("Hoeb")
        .with_level(5)
        .with_location(Location::new(9, 9))
        .with_in_hive(true);

    let once = roster.update_player(&patch).unwrap();
    let twice = roster.update_player(&patch).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn zero_level_never_overwrites() {
    let mut roster = roster();
    let updated = roster.update_player(&Player::new("mxygem")).unwrap();
    assert_eq!(updated.level, 18);
}

// =============================================================================
// Move
// =============================================================================

#[test]
fn move_places_player_exactly_once() {
    let mut roster = roster();
    let moved = roster.move_player("Hoeb", "SP").unwrap();

    assert_eq!(moved.club, "SP");
    let holders: Vec<&str> = roster
        .clubs()
        .filter(|c| c.contains("Hoeb"))
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(holders, ["SP"]);
    assert_eq!(roster.player_count(), 3);
}

#[test]
fn move_back_and_forth() {
    let mut roster = roster();
    roster.move_player("mxygem", "SP").unwrap();
    roster.move_player("mxygem", "CNT").unwrap();

    let club = roster.get("CNT").unwrap();
    assert_eq!(club.player_names().collect::<Vec<_>>(), ["Hoeb", "mxygem"]);
    assert_eq!(club.players[1].level, 18);
}
