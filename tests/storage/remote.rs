//! Integration tests for the remote-store contract
//!
//! Tests read-through, mirrored creation, and player-list pushes.

use clubroll_foundation::{ErrorKind, Location, Result};
use clubroll_storage::{Club, MemoryStore, Player, RemoteStore, Roster};

fn attached(clubs: impl IntoIterator<Item = Club>) -> Roster {
    Roster::new().with_remote(Box::new(MemoryStore::with_clubs(clubs)))
}

#[test]
fn player_lookups_see_pulled_clubs() {
    let mut roster = attached([Club::new("DYR").with_player(Player::new("Spooffy"))]);

    assert!(roster.player("Spooffy").is_err());
    roster.pull("DYR").unwrap();
    assert_eq!(roster.player("Spooffy").unwrap().club, "DYR");
}

#[test]
fn create_player_reads_club_through() {
    let mut roster = attached([Club::new("DYR")]);

    let created = roster.create_player("DYR", Player::new("RubyBlack")).unwrap();
    assert_eq!(created.club, "DYR");

    let stored = roster.remote().unwrap().get("DYR").unwrap().unwrap();
    assert!(stored.contains("RubyBlack"));
    assert!(stored.players[0].club.is_empty());
}

#[test]
fn duplicate_check_covers_cached_clubs_only() {
    let mut roster = attached([
        Club::new("DYR").with_player(Player::new("Spooffy")),
        Club::new("SP"),
    ]);

    roster.create_player("SP", Player::new("Spooffy")).unwrap();
    assert_eq!(roster.player("Spooffy").unwrap().club, "SP");

    roster.pull("DYR").unwrap();
    let err = roster.create_player("SP", Player::new("Spooffy")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyExists(_)));
}

#[test]
fn club_create_is_mirrored() {
    let mut roster = attached([]);
    roster.create(Club::new("SP")).unwrap();
    assert!(roster.remote().unwrap().get("SP").unwrap().is_some());
}

#[test]
fn club_location_updates_stay_local() {
    let mut roster = attached([Club::new("SP")]);
    roster
        .update(&Club::new("SP").with_location(Location::new(3, 4)))
        .unwrap();

    assert_eq!(roster.get("SP").unwrap().location, Some(Location::new(3, 4)));
    assert_eq!(roster.remote().unwrap().get("SP").unwrap().unwrap().location, None);
}

/// A store that is always unreachable.
#[derive(Debug)]
struct Offline;

impl RemoteStore for Offline {
    fn get(&self, _name: &str) -> Result<Option<Club>> {
        Err(clubroll_foundation::Error::adapter("connection refused"))
    }

    fn create(&mut self, _club: &Club) -> Result<String> {
        Err(clubroll_foundation::Error::adapter("connection refused"))
    }

    fn update_players(&mut self, _club: &Club) -> Result<()> {
        Err(clubroll_foundation::Error::adapter("connection refused"))
    }
}

#[test]
fn store_failures_surface_with_context() {
    let mut roster = Roster::new().with_remote(Box::new(Offline));

    let err = roster.pull("SP").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Adapter(_)));
    assert!(!err.is_rejection());
    assert!(err.to_string().contains(r#"during get club "SP""#));
}
