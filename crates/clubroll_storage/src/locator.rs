//! Player lookup by name.
//!
//! Player names are unique across the whole roster, so a lookup scans every
//! club. The scan is linear in the number of players.

use clubroll_foundation::{Error, Result};

use crate::player::Player;
use crate::roster::Roster;

/// Where a player was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located {
    /// Name of the owning club.
    pub club: String,
    /// Position within the owning club's player list.
    pub index: usize,
    /// Copy of the player with `club` populated.
    pub player: Player,
}

impl Roster {
    /// Scans every club for a player with this name.
    ///
    /// Clubs are visited in name order and players in list order; the first
    /// match wins.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<Located> {
        self.clubs.values().find_map(|club| {
            club.position(name).map(|index| Located {
                club: club.name.clone(),
                index,
                player: club.players[index].clone().placed_in(&club.name),
            })
        })
    }

    /// Finds a player by name.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no club holds the player.
    pub fn find_player(&self, name: &str) -> Result<Located> {
        self.locate(name)
            .ok_or_else(|| Error::player_not_found(name))
    }

    /// Returns true if any club holds a player with this name.
    #[must_use]
    pub fn contains_player(&self, name: &str) -> bool {
        self.clubs.values().any(|club| club.contains(name))
    }
}
