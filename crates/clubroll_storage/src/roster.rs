//! The club registry.
//!
//! The `Roster` is the single owner of every club and, through them, every
//! player. It uses a persistent ordered map so that whole-registry copies are
//! O(1), which the atomic bulk merge relies on.

use std::collections::HashSet;

use clubroll_foundation::{Error, Result};
use im::OrdMap;
use tracing::debug;

use crate::club::Club;
use crate::policy::MergePolicy;
use crate::remote::RemoteStore;

#[cfg(feature = "serde")]
mod serde_support {
    use super::Roster;
    use crate::club::Club;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    impl Serialize for Roster {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            // Only the club map is persisted; the remote handle is runtime state
            serializer.collect_map(self.clubs.iter())
        }
    }

    impl<'de> Deserialize<'de> for Roster {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let clubs = BTreeMap::<String, Club>::deserialize(deserializer)?;
            Roster::from_clubs(clubs).map_err(D::Error::custom)
        }
    }
}

/// Registry of clubs keyed by name.
#[derive(Debug, Default)]
pub struct Roster {
    /// Clubs by name.
    pub(crate) clubs: OrdMap<String, Club>,
    /// Which patch values count as provided.
    pub(crate) policy: MergePolicy,
    /// Optional document store mirrored by every write.
    pub(crate) remote: Option<Box<dyn RemoteStore>>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a remote store.
    #[must_use]
    pub fn with_remote(mut self, remote: Box<dyn RemoteStore>) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Returns the attached remote store, if any.
    #[must_use]
    pub fn remote(&self) -> Option<&dyn RemoteStore> {
        self.remote.as_deref()
    }

    /// Builds a roster from a name → club mapping, checking every invariant.
    ///
    /// A club with an empty `name` takes its key; any `club` fields on stored
    /// players are cleared.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty keys, mismatched names, or empty
    /// player names, and an already-exists error for a player name that
    /// appears more than once anywhere in the mapping.
    pub fn from_clubs(clubs: impl IntoIterator<Item = (String, Club)>) -> Result<Self> {
        let mut roster = Self::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (key, mut club) in clubs {
            if key.is_empty() {
                return Err(Error::validation("club key cannot be empty"));
            }
            if club.name.is_empty() {
                club.name.clone_from(&key);
            }
            if club.name != key {
                return Err(Error::validation(format!(
                    "club stored under {key:?} is named {:?}",
                    club.name
                )));
            }
            if roster.clubs.contains_key(&key) {
                return Err(Error::club_exists(key));
            }

            for player in &mut club.players {
                if player.name.is_empty() {
                    return Err(Error::validation(format!(
                        "club {key:?} holds a player with no name"
                    )));
                }
                if !seen.insert(player.name.clone()) {
                    return Err(Error::player_exists(player.name.clone(), key));
                }
                player.club.clear();
            }

            roster.clubs.insert(key, club);
        }

        Ok(roster)
    }

    /// Returns the full name → club mapping.
    #[must_use]
    pub fn all(&self) -> &OrdMap<String, Club> {
        &self.clubs
    }

    /// Iterates clubs in name order.
    pub fn clubs(&self) -> impl Iterator<Item = &Club> {
        self.clubs.values()
    }

    /// Returns the number of clubs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    /// Returns true if there are no clubs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Returns the number of players across all clubs.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.clubs.values().map(|c| c.players.len()).sum()
    }

    /// Returns the merge policy in effect.
    #[must_use]
    pub fn policy(&self) -> MergePolicy {
        self.policy
    }

    // --- Club Operations ---

    /// Looks up a club in the local registry.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no club has this name.
    pub fn get(&self, name: &str) -> Result<&Club> {
        self.clubs
            .get(name)
            .ok_or_else(|| Error::club_not_found(name))
    }

    /// Looks up a club, reading through to the remote store on a local miss.
    ///
    /// A club fetched from the remote store is cached locally.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if neither the registry nor the store has
    /// the club, or an adapter error if the store fails.
    pub fn pull(&mut self, name: &str) -> Result<&Club> {
        self.club_mut(name).map(|club| &*club)
    }

    /// Creates a club.
    ///
    /// Any players supplied with the club are taken as its initial members.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty, an already-exists
    /// error if the club (or one of its players) exists, or an adapter error
    /// if the remote store fails.
    pub fn create(&mut self, mut club: Club) -> Result<&Club> {
        if club.name.is_empty() {
            return Err(Error::validation("club name required"));
        }
        if self.clubs.contains_key(&club.name) {
            return Err(Error::club_exists(club.name));
        }

        let mut incoming: HashSet<&str> = HashSet::new();
        for player in &club.players {
            if player.name.is_empty() {
                return Err(Error::validation("player name required"));
            }
            if !incoming.insert(player.name.as_str()) {
                return Err(Error::player_exists(player.name.clone(), club.name.clone()));
            }
            if let Some(located) = self.locate(&player.name) {
                return Err(Error::player_exists(player.name.clone(), located.club));
            }
        }
        for player in &mut club.players {
            player.club.clear();
        }

        if let Some(remote) = self.remote.as_mut() {
            if remote.get(&club.name)?.is_some() {
                return Err(Error::club_exists(club.name));
            }
            let id = remote.create(&club).map_err(|e| e.during("create club", &club.name))?;
            debug!(club = %club.name, %id, "club document created");
        }

        debug!(club = %club.name, players = club.players.len(), "club created");
        let name = club.name.clone();
        self.clubs.insert(name.clone(), club);
        self.get(&name)
    }

    /// Updates a club's location.
    ///
    /// The patch must carry a location with both coordinates non-zero.
    /// Players are untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name or an unset coordinate,
    /// or a not-found error if the club does not exist. Nothing is changed
    /// on failure.
    pub fn update(&mut self, patch: &Club) -> Result<&Club> {
        if patch.name.is_empty() {
            return Err(Error::validation(
                "updated club information must contain a name",
            ));
        }
        let location = self.policy.club_patch_location(patch.location)?;
        let policy = self.policy;

        let club = self.club_mut(&patch.name)?;
        policy.merge_club_location(&mut club.location, location);
        debug!(club = %club.name, %location, "club location updated");
        Ok(&*club)
    }

    /// Removes a club and every player in it.
    ///
    /// The remote store has no delete operation; removal is local only.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty name or a not-found error if
    /// the club does not exist.
    pub fn remove(&mut self, name: &str) -> Result<Club> {
        if name.is_empty() {
            return Err(Error::validation("club name required"));
        }
        let club = self
            .clubs
            .remove(name)
            .ok_or_else(|| Error::club_not_found(name))?;
        debug!(club = %name, players = club.players.len(), "club removed");
        Ok(club)
    }

    /// Makes sure the named club exists, creating an empty one if needed.
    ///
    /// Returns true when the club was created.
    pub(crate) fn get_or_create(&mut self, name: &str) -> Result<bool> {
        match self.club_mut(name) {
            Ok(_) => Ok(false),
            Err(err) if err.is_not_found() => {
                self.create(Club::new(name))?;
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    /// Mutable lookup with remote read-through.
    pub(crate) fn club_mut(&mut self, name: &str) -> Result<&mut Club> {
        if !self.clubs.contains_key(name) {
            let fetched = match self.remote.as_ref() {
                Some(remote) => remote.get(name).map_err(|e| e.during("get club", name))?,
                None => None,
            };
            let Some(mut club) = fetched else {
                return Err(Error::club_not_found(name));
            };
            for player in &mut club.players {
                player.club.clear();
            }
            debug!(club = %name, "club cached from remote store");
            self.clubs.insert(name.to_string(), club);
        }

        self.clubs
            .get_mut(name)
            .ok_or_else(|| Error::club_not_found(name))
    }

    /// Replaces a club with a staged copy.
    ///
    /// The staged player list is pushed to the remote store first; the local
    /// club is only replaced once the push succeeds.
    pub(crate) fn commit_players(&mut self, name: &str, staged: Club) -> Result<()> {
        if let Some(remote) = self.remote.as_mut() {
            remote
                .update_players(&staged)
                .map_err(|e| e.during("update players", name))?;
        }
        self.clubs.insert(name.to_string(), staged);
        Ok(())
    }
}
