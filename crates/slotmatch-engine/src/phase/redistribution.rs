//! Redistribution of orphaned applicants into open places.

use slotmatch_core::{MatchError, SlotId};
use tracing::debug;

use super::MatchPhase;
use crate::scope::MatchScope;

/// Fills every open place with an orphan.
///
/// Slots are visited in a fixed order. Each orphan gets a fallback edge
/// ranked one past its stated preferences and is admitted unconditionally;
/// no eviction is attempted. After the proposal phase the number of orphans
/// equals the number of open places, so the pool and the open capacity run
/// out together.
#[derive(Debug, Clone)]
pub struct RedistributionPhase {
    slot_order: Vec<SlotId>,
}

impl RedistributionPhase {
    /// Creates the phase visiting slots in `slot_order`.
    pub fn new(slot_order: Vec<SlotId>) -> Self {
        RedistributionPhase { slot_order }
    }
}

impl MatchPhase for RedistributionPhase {
    fn run(&mut self, scope: &mut MatchScope) -> Result<u64, MatchError> {
        let open = scope.roster().open_places();
        let orphans = scope.orphans().len();
        if open != orphans {
            return Err(MatchError::OrphanMismatch { orphans, open });
        }

        let mut steps = 0;
        for &slot in &self.slot_order {
            while scope
                .roster()
                .slot(slot)
                .is_some_and(|s| s.is_not_full())
            {
                let orphan = scope.orphans_mut().pop_first().ok_or_else(|| {
                    MatchError::OrphanMismatch {
                        orphans: 0,
                        open: scope.roster().open_places(),
                    }
                })?;
                let rank = scope.applicant(orphan)?.fallback_rank();
                let edge = scope.roster().edge_for(orphan, slot, rank)?;
                scope.roster_mut().admit(edge)?;
                scope.stats_mut().record_redistribution();
                steps += 1;

                debug!(
                    event = "redistributed",
                    applicant = %scope.roster().applicant_name(orphan),
                    slot = %scope.roster().slot_name(slot),
                    score = edge.score(),
                    rank = rank,
                );
            }
        }

        if !scope.orphans().is_empty() {
            return Err(MatchError::OrphanMismatch {
                orphans: scope.orphans().len(),
                open: scope.roster().open_places(),
            });
        }
        Ok(steps)
    }

    fn phase_type_name(&self) -> &'static str {
        "Redistribution"
    }
}
