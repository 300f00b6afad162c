//! Field-level merge rules.
//!
//! Incoming patches are plain [`Player`] and [`Club`](crate::Club) values, so
//! "not provided" has to be inferred from the values themselves. Every such
//! inference lives here so that the sentinel can be replaced in one place.

use clubroll_foundation::{Error, Location, Result};

use crate::player::Player;

/// Decides which patch values count as provided during a merge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MergePolicy {
    /// Zero means "no value" for levels and coordinates.
    ///
    /// A legitimate target value of zero can therefore never be written by a
    /// merge.
    #[default]
    ZeroIsUnset,
}

impl MergePolicy {
    /// Returns true if a patch level should be considered.
    #[must_use]
    pub const fn level_provided(self, level: i32) -> bool {
        match self {
            Self::ZeroIsUnset => level != 0,
        }
    }

    /// Returns true if a single patch coordinate should be considered.
    #[must_use]
    pub const fn axis_provided(self, value: i32) -> bool {
        match self {
            Self::ZeroIsUnset => value != 0,
        }
    }

    /// Returns true if a patch location can be adopted as a whole.
    #[must_use]
    pub const fn location_complete(self, location: Location) -> bool {
        match self {
            Self::ZeroIsUnset => location.is_positive(),
        }
    }

    /// Turns raw front-end coordinates into an optional location.
    #[must_use]
    pub const fn location_from_args(self, x: i32, y: i32) -> Option<Location> {
        let location = Location::new(x, y);
        if self.location_complete(location) {
            Some(location)
        } else {
            None
        }
    }

    /// Validates the location carried by a club update.
    ///
    /// Both coordinates must be present and non-zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the location is missing or either
    /// coordinate is unset.
    pub fn club_patch_location(self, patch: Option<Location>) -> Result<Location> {
        let Some(location) = patch else {
            return Err(Error::validation(
                "updated club information must contain a location",
            ));
        };

        let axes = match (self.axis_provided(location.x), self.axis_provided(location.y)) {
            (true, true) => return Ok(location),
            (false, true) => "x coordinate",
            (true, false) => "y coordinate",
            (false, false) => "x and y coordinates",
        };
        Err(Error::validation(format!(
            "location {axes} cannot be zero, got x: {} y: {}",
            location.x, location.y
        )))
    }

    /// Merges a validated club location into the stored one.
    ///
    /// A club without a location adopts the patch as a whole; otherwise each
    /// axis is overwritten when it differs.
    pub fn merge_club_location(self, stored: &mut Option<Location>, patch: Location) {
        match stored {
            Some(current) => {
                if current.x != patch.x {
                    current.x = patch.x;
                }
                if current.y != patch.y {
                    current.y = patch.y;
                }
            }
            None => *stored = Some(patch),
        }
    }

    /// Merges a player patch into a stored player.
    ///
    /// `name`, `might` and `club` are never touched.
    pub fn merge_player(self, stored: &mut Player, patch: &Player) {
        if self.level_provided(patch.level) && patch.level != stored.level {
            stored.level = patch.level;
        }

        if let Some(incoming) = patch.location {
            match stored.location.as_mut() {
                Some(current) => {
                    if self.axis_provided(incoming.x) && incoming.x != current.x {
                        current.x = incoming.x;
                    }
                    if self.axis_provided(incoming.y) && incoming.y != current.y {
                        current.y = incoming.y;
                    }
                }
                None if self.location_complete(incoming) => stored.location = Some(incoming),
                None => {}
            }
        }

        if patch.in_hive != stored.in_hive {
            stored.in_hive = patch.in_hive;
        }
    }
}
