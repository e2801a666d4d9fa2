//! Deferred-acceptance proposal pass with cascading eviction.

use slotmatch_core::{Admission, ApplicantId, Edge, MatchError};
use tracing::{debug, trace};

use super::MatchPhase;
use crate::scope::MatchScope;

/// Single pass over all applicants in a fixed order.
///
/// Each applicant offers its first preference. Whoever is left without a
/// place by that offer (the rejected applicant or an evicted incumbent)
/// immediately offers its next preference, and so on until an offer lands
/// in free capacity or someone runs out of preferences and is orphaned.
///
/// The chain is driven by an explicit worklist rather than recursion, so
/// arbitrarily long cascades do not grow the call stack. Offers are made in
/// exactly the order the recursive formulation would make them.
#[derive(Debug, Clone)]
pub struct ProposalPhase {
    sequence: Vec<ApplicantId>,
}

impl ProposalPhase {
    /// Creates the phase for applicants proposing in `sequence` order.
    pub fn new(sequence: Vec<ApplicantId>) -> Self {
        ProposalPhase { sequence }
    }

    pub fn sequence(&self) -> &[ApplicantId] {
        &self.sequence
    }
}

impl MatchPhase for ProposalPhase {
    fn run(&mut self, scope: &mut MatchScope) -> Result<u64, MatchError> {
        let mut steps = 0;
        for &id in &self.sequence {
            let first = scope.applicant(id)?.propose_first();
            resolve(scope, first)?;
            steps += 1;
        }
        Ok(steps)
    }

    fn phase_type_name(&self) -> &'static str {
        "Proposal"
    }
}

/// Runs one displacement chain to completion, starting with `edge`.
pub(crate) fn resolve(scope: &mut MatchScope, edge: Edge) -> Result<(), MatchError> {
    let mut worklist = vec![edge];
    let mut chain_length = 0u64;

    while let Some(edge) = worklist.pop() {
        chain_length += 1;
        scope.stats_mut().record_proposal();
        trace!(
            event = "propose",
            applicant = edge.applicant().index(),
            slot = edge.slot().index(),
            score = edge.score(),
            rank = edge.rank(),
        );

        let outcome = scope.roster_mut().try_accept(edge)?;
        if outcome.is_admitted() {
            scope.stats_mut().record_admission();
        } else {
            scope.stats_mut().record_rejection();
        }
        let Some(displaced) = outcome.displaced_edge() else {
            continue;
        };
        if let Admission::Displaced(evicted) = outcome {
            scope.stats_mut().record_displacement();
            debug!(
                event = "displaced",
                slot = %scope.roster().slot_name(edge.slot()),
                winner = %scope.roster().applicant_name(edge.applicant()),
                evicted = %scope.roster().applicant_name(evicted.applicant()),
                winner_score = edge.score(),
                evicted_score = evicted.score(),
            );
        }

        let next = scope
            .applicant(displaced.applicant())?
            .next_preference(displaced.rank());
        match next {
            Some(next) => worklist.push(next),
            None => {
                scope.orphans_mut().insert(displaced.applicant());
                scope.stats_mut().record_orphan();
                debug!(
                    event = "orphaned",
                    applicant = %scope.roster().applicant_name(displaced.applicant()),
                    last_slot = %scope.roster().slot_name(displaced.slot()),
                );
            }
        }
    }

    scope.stats_mut().record_chain(chain_length);
    Ok(())
}
