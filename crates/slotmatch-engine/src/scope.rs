//! Mutable context shared by the matching phases.

use slotmatch_core::{Applicant, ApplicantId, MatchError, Roster};

use crate::orphan::OrphanPool;
use crate::stats::MatchStats;

/// Everything a phase may mutate: the roster, the orphan pool and the
/// statistics.
///
/// Passed explicitly to each phase; there is no other shared state.
#[derive(Debug)]
pub struct MatchScope {
    roster: Roster,
    orphans: OrphanPool,
    stats: MatchStats,
}

impl MatchScope {
    pub fn new(roster: Roster, orphans: OrphanPool) -> Self {
        MatchScope {
            roster,
            orphans,
            stats: MatchStats::default(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub fn orphans(&self) -> &OrphanPool {
        &self.orphans
    }

    pub fn orphans_mut(&mut self) -> &mut OrphanPool {
        &mut self.orphans
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut MatchStats {
        &mut self.stats
    }

    /// Looks up an applicant, treating an unknown id as an invariant error.
    pub fn applicant(&self, id: ApplicantId) -> Result<&Applicant, MatchError> {
        self.roster.applicant(id).ok_or(MatchError::UnknownId {
            kind: "applicant",
            id: id.index(),
        })
    }

    /// Consumes the scope, returning the final roster and statistics.
    pub fn into_parts(self) -> (Roster, OrphanPool, MatchStats) {
        (self.roster, self.orphans, self.stats)
    }
}
