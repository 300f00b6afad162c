//! Player create, update, remove, and move.
//!
//! Every operation starts from a located player or a resolved club and
//! returns players in their standalone form (with `club` populated).

use clubroll_foundation::{Error, Result};
use tracing::debug;

use crate::locator::Located;
use crate::player::Player;
use crate::roster::Roster;

impl Roster {
    /// Returns a player by name.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no club holds the player.
    pub fn player(&self, name: &str) -> Result<Player> {
        self.find_player(name).map(|located| located.player)
    }

    /// Adds a new player to a club.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is empty, a not-found error if
    /// the club does not exist, or an already-exists error if any club
    /// already holds a player with this name.
    pub fn create_player(&mut self, club: &str, player: Player) -> Result<Player> {
        if player.name.is_empty() {
            return Err(Error::validation("player name required"));
        }
        self.club_mut(club)
            .map_err(|e| e.during("create player", &player.name))?;
        if let Some(existing) = self.locate(&player.name) {
            return Err(Error::player_exists(player.name, existing.club));
        }

        let name = player.name.clone();
        self.insert_player(club, player)
            .map_err(|e| e.during("create player", &name))?;
        self.find_player(&name).map(|located| located.player)
    }

    /// Removes a player from whichever club holds it.
    ///
    /// The remaining players keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no club holds the player.
    pub fn remove_player(&mut self, name: &str) -> Result<Player> {
        let located = self.find_player(name)?;
        self.detach(&located)
            .map_err(|e| e.during("remove player", name))?;
        Ok(located.player)
    }

    /// Merges a patch into an existing player.
    ///
    /// The player is found by `patch.name`; see
    /// [`MergePolicy::merge_player`](crate::MergePolicy::merge_player) for
    /// which fields are written.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no club holds the player.
    pub fn update_player(&mut self, patch: &Player) -> Result<Player> {
        let located = self.find_player(&patch.name)?;
        self.merge_located(located, patch)
            .map_err(|e| e.during("update player", &patch.name))
    }

    /// Moves a player to another club.
    ///
    /// Runs in two phases: the player is first appended to the destination,
    /// then removed from its source. A failed first phase changes nothing.
    /// The phases are not atomic; if the second fails the player is left in
    /// both clubs and a
    /// [`PartialMove`](clubroll_foundation::ErrorKind::PartialMove) error is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the player or destination club does not
    /// exist, an already-exists error if the destination already holds the
    /// player (including a move into its current club), or a partial-move
    /// error as described above.
    pub fn move_player(&mut self, name: &str, destination: &str) -> Result<Player> {
        let located = self.find_player(name)?;
        self.club_mut(destination)
            .map_err(|e| e.during("move player", name))?;

        self.insert_player(destination, located.player.clone())
            .map_err(|e| e.during("move player", name))?;

        if let Err(cause) = self.detach(&located) {
            return Err(Error::partial_move(name, &located.club, destination, cause));
        }

        debug!(player = %name, from = %located.club, to = %destination, "player moved");
        Ok(located.player.placed_in(destination))
    }

    /// Appends a player to a club, checking only that club for duplicates.
    ///
    /// Nothing changes locally unless the remote store accepts the new list.
    pub(crate) fn insert_player(&mut self, club: &str, player: Player) -> Result<usize> {
        let mut staged = self.club_mut(club)?.clone();
        if staged.contains(&player.name) {
            return Err(Error::player_exists(player.name, club));
        }

        let name = player.name.clone();
        staged.players.push(player.stored());
        let index = staged.players.len() - 1;

        self.commit_players(club, staged)?;
        debug!(player = %name, club = %club, index, "player appended");
        Ok(index)
    }

    /// Splices a located player out of its club.
    pub(crate) fn detach(&mut self, located: &Located) -> Result<()> {
        let mut staged = self
            .clubs
            .get(&located.club)
            .cloned()
            .ok_or_else(|| Error::club_not_found(&located.club))?;
        if staged.players.get(located.index).map(|p| p.name.as_str())
            != Some(located.player.name.as_str())
        {
            return Err(Error::player_not_found(&located.player.name));
        }

        staged.players.remove(located.index);
        self.commit_players(&located.club, staged)?;
        debug!(player = %located.player.name, club = %located.club, index = located.index, "player removed");
        Ok(())
    }

    /// Merges a patch into a located player and writes it back in place.
    pub(crate) fn merge_located(&mut self, located: Located, patch: &Player) -> Result<Player> {
        let Located {
            club: club_name,
            index,
            player: mut merged,
        } = located;
        self.policy.merge_player(&mut merged, patch);

        let mut staged = self
            .clubs
            .get(&club_name)
            .cloned()
            .ok_or_else(|| Error::club_not_found(&club_name))?;
        let slot = staged
            .players
            .get_mut(index)
            .ok_or_else(|| Error::player_not_found(&merged.name))?;
        *slot = merged.clone().stored();

        self.commit_players(&club_name, staged)?;
        debug!(player = %merged.name, club = %club_name, "player merged");
        Ok(merged)
    }
}
