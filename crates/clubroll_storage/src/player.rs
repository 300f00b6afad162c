//! Player records.

use clubroll_foundation::Location;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::MergePolicy;

/// A roster member.
///
/// Inside a [`Club`](crate::Club)'s player list `club` is always empty; the
/// owning club is implied by where the record sits. Players handed back to
/// callers by lookups and lifecycle operations carry the owning club's name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Player {
    /// Unique name across the whole roster.
    pub name: String,
    /// Last known map position.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub location: Option<Location>,
    /// Whether the player is inside the club hive.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_false"))]
    pub in_hive: bool,
    /// Player level.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero_i32"))]
    pub level: i32,
    /// Might score.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "is_zero_i64"))]
    pub might: i64,
    /// Owning club name, populated only on standalone values.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub club: String,
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_i32(value: &i32) -> bool {
    *value == 0
}

#[cfg(feature = "serde")]
#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

impl Player {
    /// Creates a player with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builds a player from raw front-end arguments.
    ///
    /// A location is only attached when the policy considers the pair
    /// complete; otherwise the player has none.
    #[must_use]
    pub fn from_args(
        name: impl Into<String>,
        club: impl Into<String>,
        level: i32,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            name: name.into(),
            club: club.into(),
            level,
            location: MergePolicy::default().location_from_args(x, y),
            ..Self::default()
        }
    }

    /// Sets the owning club name.
    #[must_use]
    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = club.into();
        self
    }

    /// Sets the level.
    #[must_use]
    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the might score.
    #[must_use]
    pub fn with_might(mut self, might: i64) -> Self {
        self.might = might;
        self
    }

    /// Sets the in-hive flag.
    #[must_use]
    pub fn with_in_hive(mut self, in_hive: bool) -> Self {
        self.in_hive = in_hive;
        self
    }

    /// Returns the form stored inside a club, with `club` cleared.
    #[must_use]
    pub fn stored(mut self) -> Self {
        self.club.clear();
        self
    }

    /// Returns the standalone form, with `club` set to the owner.
    #[must_use]
    pub fn placed_in(mut self, club: &str) -> Self {
        club.clone_into(&mut self.club);
        self
    }
}
