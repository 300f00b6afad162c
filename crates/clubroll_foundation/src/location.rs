//! Map coordinates shared by clubs and players.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A 2D integer map coordinate.
///
/// The textual form is `X:Y`, as used by the bulk import source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Location {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Location {
    /// Creates a location from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if both coordinates are strictly positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.x > 0 && self.y > 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let [x, y] = parts.as_slice() else {
            return Err(Error::validation(format!("invalid location of {s:?} received")));
        };

        let x = x.trim().parse().map_err(|_| {
            Error::validation(format!(
                "invalid integer {:?} received for location X value",
                x.trim()
            ))
        })?;
        let y = y.trim().parse().map_err(|_| {
            Error::validation(format!(
                "invalid integer {:?} received for location Y value",
                y.trim()
            ))
        })?;

        Ok(Self { x, y })
    }
}
