//! Rendering command outcomes for people.

use clubroll_foundation::{Error, Result};
use serde::Serialize;

use crate::session::Outcome;

/// Confirmation printed for commands with nothing to show.
pub const DONE: &str = "done";

/// Renders an outcome as indented JSON.
///
/// [`Outcome::None`] renders as a short confirmation.
///
/// # Errors
///
/// Returns an encode error if serialization fails.
pub fn render(outcome: &Outcome) -> Result<String> {
    match outcome {
        Outcome::Club(club) => pretty(club),
        Outcome::Player(player) => pretty(player),
        Outcome::Clubs(clubs) => pretty(clubs),
        Outcome::Merged(report) => pretty(report),
        Outcome::None => Ok(DONE.to_string()),
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::encode(format!("failed to format output: {e}")))
}
