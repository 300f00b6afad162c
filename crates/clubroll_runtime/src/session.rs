//! Command execution against a roster.
//!
//! The session owns the roster and, optionally, the snapshot store it was
//! loaded from. Successful mutations are written back to the store.

use std::collections::BTreeMap;
use std::fmt;

use clubroll_foundation::Result;
use clubroll_storage::{Club, MergeReport, Player, Roster};
use tracing::debug;

use crate::command::{self, Command};
use crate::config::RuntimeConfig;
use crate::import;
use crate::snapshot::{JsonFileStore, SnapshotStore};

/// What a command produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A club, as stored.
    Club(Club),
    /// A player, with `club` populated.
    Player(Player),
    /// Every club by name.
    Clubs(BTreeMap<String, Club>),
    /// Counts from a bulk import.
    Merged(MergeReport),
    /// The command succeeded with nothing to show.
    None,
}

/// A roster plus where it is persisted.
pub struct Session {
    /// The live roster.
    roster: Roster,

    /// Where mutations are saved, if anywhere.
    store: Option<Box<dyn SnapshotStore>>,

    /// Whether to save after each successful mutation.
    save_on_mutation: bool,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("roster", &self.roster)
            .field("store", &self.store.is_some())
            .field("save_on_mutation", &self.save_on_mutation)
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session over an empty roster with no store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_roster(Roster::new())
    }

    /// Creates a session over an existing roster with no store.
    #[must_use]
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            store: None,
            save_on_mutation: true,
        }
    }

    /// Loads a session from a store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded.
    pub fn load(store: Box<dyn SnapshotStore>) -> Result<Self> {
        let roster = store.load()?;
        Ok(Self {
            roster,
            store: Some(store),
            save_on_mutation: true,
        })
    }

    /// Opens the JSON snapshot named by a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or decoded.
    pub fn open(config: &RuntimeConfig) -> Result<Self> {
        let store = JsonFileStore::new(config.data_path())
            .with_create_missing(config.create_missing_snapshot);
        Ok(Self::load(Box::new(store))?.with_save_on_mutation(config.save_on_mutation))
    }

    /// Builder method to enable/disable saving after mutations.
    #[must_use]
    pub fn with_save_on_mutation(mut self, save: bool) -> Self {
        self.save_on_mutation = save;
        self
    }

    /// Returns the roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the roster mutably.
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Parses and executes one command line.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed line, otherwise see
    /// [`Session::execute`].
    pub fn run_line(&mut self, line: &str) -> Result<Outcome> {
        self.execute(command::parse(line)?)
    }

    /// Executes a command, saving afterwards if it was a mutation.
    ///
    /// Nothing is saved when the command fails.
    ///
    /// # Errors
    ///
    /// Returns the command's error, or the store's error if saving fails.
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let mutation = command.is_mutation();
        debug!(action = %command.action(), "executing command");

        let outcome = self.apply(command)?;
        if mutation && self.save_on_mutation {
            self.save()?;
        }
        Ok(outcome)
    }

    /// Writes the roster to the store, if one is attached.
    ///
    /// # Errors
    ///
    /// Returns the store's error.
    pub fn save(&self) -> Result<()> {
        match &self.store {
            Some(store) => store.save(&self.roster),
            None => Ok(()),
        }
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        let roster = &mut self.roster;
        match command {
            Command::GetClub(name) => Ok(Outcome::Club(roster.pull(&name)?.clone())),
            Command::AddClub(club) => Ok(Outcome::Club(roster.create(club)?.clone())),
            Command::UpdateClub(patch) => Ok(Outcome::Club(roster.update(&patch)?.clone())),
            Command::RemoveClub(name) => {
                roster.remove(&name)?;
                Ok(Outcome::None)
            }
            Command::ListClubs => Ok(Outcome::Clubs(
                roster
                    .all()
                    .iter()
                    .map(|(name, club)| (name.clone(), club.clone()))
                    .collect(),
            )),
            Command::GetPlayer(name) => Ok(Outcome::Player(roster.player(&name)?)),
            Command::AddPlayer(player) => {
                let club = player.club.clone();
                Ok(Outcome::Player(roster.create_player(&club, player)?))
            }
            Command::UpdatePlayer(patch) => Ok(Outcome::Player(roster.update_player(&patch)?)),
            Command::RemovePlayer(name) => {
                roster.remove_player(&name)?;
                Ok(Outcome::None)
            }
            Command::MovePlayer { name, club } => {
                Ok(Outcome::Player(roster.move_player(&name, &club)?))
            }
            Command::ImportPlayers(path) => {
                let records = import::read_players_from_path(&path)?;
                Ok(Outcome::Merged(roster.merge_players_atomic(&records)?))
            }
        }
    }
}
