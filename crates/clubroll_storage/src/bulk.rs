//! Bulk player merging.
//!
//! A batch of player records is applied in order. Records for unknown players
//! create them in the record's club; records for known players are merged
//! into the club that already holds them.

use clubroll_foundation::{Error, Result};
use tracing::{debug, info, warn};

use crate::player::Player;
use crate::roster::Roster;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts of what a bulk merge changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeReport {
    /// Clubs created because a record named them.
    pub clubs_created: usize,
    /// Players that did not exist before the batch.
    pub created: usize,
    /// Existing players merged with a record.
    pub merged: usize,
}

impl MergeReport {
    /// Returns the number of records applied.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.created + self.merged
    }
}

/// Applies player records to a roster one at a time.
#[derive(Debug)]
pub struct BulkMerger<'r> {
    roster: &'r mut Roster,
    report: MergeReport,
    position: usize,
}

impl<'r> BulkMerger<'r> {
    /// Starts a merge against a roster.
    #[must_use]
    pub fn new(roster: &'r mut Roster) -> Self {
        Self {
            roster,
            report: MergeReport::default(),
            position: 0,
        }
    }

    /// Applies one record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the record has no name or club, or any
    /// error raised while creating the club or writing the player. The
    /// error's context names the record's position in the batch.
    pub fn apply(&mut self, record: &Player) -> Result<()> {
        self.position += 1;
        let position = self.position;
        self.apply_record(record)
            .map_err(|e| e.during(format!("merge record {position}"), &record.name))
    }

    /// Returns what the merge has done so far.
    #[must_use]
    pub fn report(&self) -> MergeReport {
        self.report
    }

    /// Ends the merge.
    #[must_use]
    pub fn finish(self) -> MergeReport {
        self.report
    }

    fn apply_record(&mut self, record: &Player) -> Result<()> {
        if record.name.is_empty() {
            return Err(Error::validation("player record must contain a name"));
        }
        if record.club.is_empty() {
            return Err(Error::validation("player record must contain a club"));
        }

        if self.roster.get_or_create(&record.club)? {
            self.report.clubs_created += 1;
        }

        match self.roster.locate(&record.name) {
            Some(located) => {
                self.roster.merge_located(located, record)?;
                self.report.merged += 1;
            }
            None => {
                self.roster.insert_player(&record.club, record.clone())?;
                self.report.created += 1;
            }
        }
        Ok(())
    }
}

impl Roster {
    /// Starts a bulk merge.
    #[must_use]
    pub fn merger(&mut self) -> BulkMerger<'_> {
        BulkMerger::new(self)
    }

    /// Merges a batch of player records in order.
    ///
    /// The batch is not atomic: on failure every record before the failing
    /// one stays applied.
    ///
    /// # Errors
    ///
    /// Returns the first record's error; see [`BulkMerger::apply`].
    pub fn merge_players<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a Player>,
    ) -> Result<MergeReport> {
        let mut merger = self.merger();
        for record in records {
            merger.apply(record)?;
        }

        let report = merger.finish();
        info!(
            clubs_created = report.clubs_created,
            created = report.created,
            merged = report.merged,
            "player batch merged"
        );
        Ok(report)
    }

    /// Merges a batch of player records, restoring the roster on failure.
    ///
    /// Only the local registry is restored. Writes already pushed to a remote
    /// store stay in place.
    ///
    /// # Errors
    ///
    /// Returns the first record's error; see [`BulkMerger::apply`].
    pub fn merge_players_atomic<'a>(
        &mut self,
        records: impl IntoIterator<Item = &'a Player>,
    ) -> Result<MergeReport> {
        let saved = self.clubs.clone();
        match self.merge_players(records) {
            Ok(report) => Ok(report),
            Err(err) => {
                if self.remote.is_some() {
                    warn!("restoring roster after failed batch; remote writes are kept");
                } else {
                    debug!("restoring roster after failed batch");
                }
                self.clubs = saved;
                Err(err)
            }
        }
    }
}
