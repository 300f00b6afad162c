//! Clubs and their ordered player lists.

use clubroll_foundation::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::policy::MergePolicy;

/// A named group of players.
///
/// `players` keeps insertion order; index-based removal depends on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Club {
    /// Registry key; never empty for a stored club.
    pub name: String,
    /// Club hive position, if known.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location: Option<Location>,
    /// Members in insertion order.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub players: Vec<Player>,
}

impl Club {
    /// Creates an empty club with no location.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a club from raw front-end arguments.
    ///
    /// The location is attached only when the policy considers it complete.
    #[must_use]
    pub fn from_args(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            location: MergePolicy::default().location_from_args(x, y),
            players: Vec::new(),
        }
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Appends a player, builder style. No uniqueness checks are made here.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        self.players.push(player.stored());
        self
    }

    /// Returns the index of the named player in this club.
    #[must_use]
    pub fn position(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == player)
    }

    /// Returns true if the club holds a player with this name.
    #[must_use]
    pub fn contains(&self, player: &str) -> bool {
        self.position(player).is_some()
    }

    /// Returns the player names in order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|p| p.name.as_str())
    }
}
