//! Remote document-store contract.
//!
//! A [`Roster`](crate::Roster) can be attached to a store that holds one
//! document per club, keyed on the club name. Lookups that miss locally read
//! through to the store, club creation is mirrored to it, and every player
//! mutation pushes the touched clubs' player lists.

use std::collections::BTreeMap;
use std::fmt;

use clubroll_foundation::{Error, Result};

use crate::club::Club;

/// A per-club document store.
pub trait RemoteStore: fmt::Debug {
    /// Fetches a club by name.
    ///
    /// # Errors
    ///
    /// Returns an adapter error if the store cannot be reached.
    fn get(&self, name: &str) -> Result<Option<Club>>;

    /// Stores a new club document and returns its generated id.
    ///
    /// # Errors
    ///
    /// Returns an adapter error if the write fails.
    fn create(&mut self, club: &Club) -> Result<String>;

    /// Replaces the player list of an existing club document.
    ///
    /// # Errors
    ///
    /// Returns an adapter error if the club document is missing or the write
    /// fails.
    fn update_players(&mut self, club: &Club) -> Result<()>;
}

/// An in-process [`RemoteStore`].
///
/// Useful for tests and for running without a database while keeping the
/// remote-store code paths exercised.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    documents: BTreeMap<String, (String, Club)>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with club documents.
    #[must_use]
    pub fn with_clubs(clubs: impl IntoIterator<Item = Club>) -> Self {
        let mut store = Self::new();
        for club in clubs {
            let id = store.allocate_id();
            store.documents.insert(club.name.clone(), (id, club));
        }
        store
    }

    /// Returns the generated id of a stored club.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(|(id, _)| id.as_str())
    }

    /// Returns the number of stored club documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the store holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        format!("{:024x}", self.next_id)
    }
}

impl RemoteStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<Club>> {
        Ok(self.documents.get(name).map(|(_, club)| club.clone()))
    }

    fn create(&mut self, club: &Club) -> Result<String> {
        if self.documents.contains_key(&club.name) {
            return Err(Error::adapter(format!(
                "duplicate key: club document {:?} already stored",
                club.name
            )));
        }
        let id = self.allocate_id();
        self.documents
            .insert(club.name.clone(), (id.clone(), club.clone()));
        Ok(id)
    }

    fn update_players(&mut self, club: &Club) -> Result<()> {
        let (_, stored) = self.documents.get_mut(&club.name).ok_or_else(|| {
            Error::adapter(format!("no club document {:?} to update", club.name))
        })?;
        stored.players.clone_from(&club.players);
        Ok(())
    }
}
