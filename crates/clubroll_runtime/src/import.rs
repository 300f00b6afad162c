//! Player records from CSV.
//!
//! The header row names the columns: `name`, `location` (`X:Y` or empty),
//! `in_hive`, `level` (or `lvl`), `might`, and `club`. Columns may appear in
//! any order or be left out; empty cells read as empty or zero.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use clubroll_foundation::{Error, Location, Result};
use clubroll_storage::Player;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Row {
    name: String,
    location: String,
    in_hive: String,
    #[serde(alias = "lvl")]
    level: String,
    might: String,
    club: String,
}

impl Row {
    fn into_player(self) -> Result<Player> {
        let location = if self.location.is_empty() {
            None
        } else {
            Some(Location::from_str(&self.location)?)
        };

        Ok(Player {
            name: self.name,
            location,
            in_hive: parse_flag(&self.in_hive)?,
            level: parse_number(&self.level, "level")?,
            might: parse_number(&self.might, "might")?,
            club: self.club,
        })
    }
}

fn parse_number<T: FromStr + Default>(value: &str, column: &str) -> Result<T> {
    if value.is_empty() {
        return Ok(T::default());
    }
    value.parse().map_err(|_| {
        Error::validation(format!("invalid integer {value:?} received for {column}"))
    })
}

fn parse_flag(value: &str) -> Result<bool> {
    match value {
        "" | "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        _ => Err(Error::validation(format!(
            "invalid boolean {value:?} received for in_hive"
        ))),
    }
}

/// Reads player records from CSV.
///
/// # Errors
///
/// Returns a decode error if the CSV is malformed, or a validation error
/// naming the line and offending value if a cell cannot be converted.
pub fn read_players<R: Read>(source: R) -> Result<Vec<Player>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| Error::decode(format!("failed to read csv header: {e}")))?
        .clone();

    let mut players = Vec::new();
    for result in reader.records() {
        let record =
            result.map_err(|e| Error::decode(format!("failed to read csv record: {e}")))?;
        let line = record.position().map_or(0, csv::Position::line);

        let row: Row = record
            .deserialize(Some(&headers))
            .map_err(|e| Error::decode(format!("line {line}: {e}")))?;
        let name = row.name.clone();
        let player = row
            .into_player()
            .map_err(|e| e.during(format!("import line {line}"), name))?;
        players.push(player);
    }

    debug!(records = players.len(), "player csv read");
    Ok(players)
}

/// Reads player records from a CSV file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened, otherwise see
/// [`read_players`].
pub fn read_players_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Player>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| {
        Error::io(format!("failed to open file '{}': {e}", path.display()))
    })?;
    read_players(std::io::BufReader::new(file))
}
