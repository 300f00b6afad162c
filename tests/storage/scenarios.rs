//! End-to-end roster scenarios
//!
//! Each test starts from a small named roster and checks the exact result.

use clubroll_foundation::{ErrorKind, Location};
use clubroll_storage::{Club, Player, Roster};

fn clubs(layout: &[(&str, &[&str])]) -> Roster {
    Roster::from_clubs(layout.iter().map(|(club, players)| {
        let club_value = players
            .iter()
            .fold(Club::new(*club), |c, p| c.with_player(Player::new(*p)));
        ((*club).to_string(), club_value)
    }))
    .unwrap()
}

fn names(roster: &Roster, club: &str) -> Vec<String> {
    roster
        .get(club)
        .unwrap()
        .player_names()
        .map(str::to_string)
        .collect()
}

#[test]
fn move_between_clubs() {
    let mut roster = clubs(&[("CNT", &["mxygem", "Hoeb"]), ("SP", &["Quinoa", "Jasmin"])]);

    let moved = roster.move_player("mxygem", "SP").unwrap();

    assert_eq!(moved.name, "mxygem");
    assert_eq!(moved.club, "SP");
    assert_eq!(names(&roster, "CNT"), ["Hoeb"]);
    assert_eq!(names(&roster, "SP"), ["Quinoa", "Jasmin", "mxygem"]);
}

#[test]
fn bulk_merge_updates_level_in_place() {
    let mut roster = Roster::from_clubs([(
        "CNT".to_string(),
        Club::new("CNT")
            .with_player(Player::new("Hoeb"))
            .with_player(Player::new("mxygem").with_level(18)),
    )])
    .unwrap();

    roster
        .merge_players([&Player::new("mxygem").with_level(19).with_club("CNT")])
        .unwrap();

    let club = roster.get("CNT").unwrap();
    assert_eq!(names(&roster, "CNT"), ["Hoeb", "mxygem"]);
    assert_eq!(club.players[0], Player::new("Hoeb"));
    assert_eq!(club.players[1].level, 19);
}

#[test]
fn club_update_with_zero_x_is_rejected() {
    let mut roster = clubs(&[("SP", &[])]);
    let before = roster.all().clone();

    let err = roster
        .update(&Club::new("SP").with_location(Location::new(0, 876)))
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert!(err.to_string().contains("x coordinate"));
    assert_eq!(roster.all(), &before);
}

#[test]
fn removing_unknown_player_changes_nothing() {
    let mut roster = clubs(&[("DYR", &["RubyBlack", "Spooffy"])]);
    let before = roster.all().clone();

    let err = roster.remove_player("Wishy").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(roster.all(), &before);
}
