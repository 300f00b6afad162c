//! Roster snapshots as indented JSON.
//!
//! A snapshot is a single object mapping club names to clubs. It is always
//! written wholesale.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clubroll_foundation::{Error, Result};
use clubroll_storage::Roster;
use tracing::{info, warn};

/// Serializes a roster to indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns an encode error if serialization fails.
pub fn to_json(roster: &Roster) -> Result<String> {
    let mut json = serde_json::to_string_pretty(roster)
        .map_err(|e| Error::encode(format!("failed to encode snapshot: {e}")))?;
    json.push('\n');
    Ok(json)
}

/// Deserializes a roster from snapshot bytes.
///
/// Empty or whitespace-only input yields an empty roster.
///
/// # Errors
///
/// Returns a decode error if the bytes are not a valid snapshot.
pub fn from_slice(bytes: &[u8]) -> Result<Roster> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Roster::new());
    }
    serde_json::from_slice(bytes)
        .map_err(|e| Error::decode(format!("failed to decode snapshot: {e}")))
}

/// Saves a roster to a file, replacing its contents.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(roster: &Roster, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(roster)?;

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display()))
    })?;
    let mut writer = BufWriter::new(file);

    writer.write_all(json.as_bytes()).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display()))
    })?;
    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display()))
    })?;

    info!(path = %path.display(), clubs = roster.len(), "snapshot saved");
    Ok(())
}

/// Loads a roster from a snapshot file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Roster> {
    let path = path.as_ref();
    let bytes = read_file(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    let roster = from_slice(&bytes).map_err(|e| e.during("load snapshot", path.display().to_string()))?;
    info!(path = %path.display(), clubs = roster.len(), players = roster.player_count(), "snapshot loaded");
    Ok(roster)
}

fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Somewhere a roster can be loaded from and saved to.
pub trait SnapshotStore {
    /// Loads the stored roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    fn load(&self) -> Result<Roster>;

    /// Replaces the stored roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    fn save(&self, roster: &Roster) -> Result<()>;
}

/// A [`SnapshotStore`] backed by a JSON file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    create_missing: bool,
}

impl JsonFileStore {
    /// Creates a store for the given file.
    ///
    /// A missing file loads as an empty roster.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_missing: true,
        }
    }

    /// Builder method to make a missing file an error.
    #[must_use]
    pub fn with_create_missing(mut self, create: bool) -> Self {
        self.create_missing = create;
        self
    }

    /// Returns the snapshot file location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Roster> {
        if self.create_missing && !self.path.exists() {
            warn!(path = %self.path.display(), "snapshot file missing, starting empty");
            return Ok(Roster::new());
        }
        load_from_file(&self.path)
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        save_to_file(roster, &self.path)
    }
}
