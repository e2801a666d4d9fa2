//! MatchingEngine - drives the phases over a roster.

use std::time::Instant;

use slotmatch_config::{ConfigError, MatchConfig, ProposalOrder};
use slotmatch_core::{MatchError, Roster, SlotId};
use tracing::info;

use crate::order::proposal_sequence;
use crate::orphan::OrphanPool;
use crate::phase::{MatchPhase, ProposalPhase, RedistributionPhase};
use crate::scope::MatchScope;
use crate::stats::{MatchStats, PhaseStats};
use crate::validator::{ValidationReport, Validator};

/// One-shot matcher for a freshly built roster.
///
/// Runs a single deferred-acceptance pass in which every applicant proposes
/// to its first preference and displaced applicants immediately move down
/// their lists, then places any orphans into the remaining open places.
///
/// # Examples
///
/// ```
/// use slotmatch_core::{RosterBuilder, TalentVector};
/// use slotmatch_engine::MatchingEngine;
///
/// let mut builder = RosterBuilder::new();
/// builder.add_slot("C0", TalentVector::new(1, 0, 0)).unwrap();
/// builder.add_slot("C1", TalentVector::new(0, 1, 0)).unwrap();
/// builder.add_applicant("J0", TalentVector::new(5, 1, 0), ["C0", "C1"]).unwrap();
/// builder.add_applicant("J1", TalentVector::new(9, 1, 0), ["C0", "C1"]).unwrap();
///
/// let outcome = MatchingEngine::new(builder.build().unwrap()).run().unwrap();
/// let roster = outcome.roster();
///
/// assert!(roster.is_complete());
/// let j0 = roster.applicant_by_name("J0").unwrap();
/// assert_eq!(roster.slot_name(j0.current().unwrap().slot()), "C1");
/// assert!(outcome.validate().is_clean());
/// ```
#[derive(Debug)]
pub struct MatchingEngine {
    roster: Roster,
    order: ProposalOrder,
    seed: u64,
}

impl MatchingEngine {
    /// Creates an engine using name order.
    pub fn new(roster: Roster) -> Self {
        MatchingEngine {
            roster,
            order: ProposalOrder::default(),
            seed: 0,
        }
    }

    /// Creates an engine with the proposal order and seed from `config`.
    ///
    /// # Errors
    ///
    /// Returns the config's validation error, e.g. shuffled order without a
    /// seed.
    pub fn from_config(roster: Roster, config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(MatchingEngine {
            roster,
            order: config.proposal_order,
            seed: config.random_seed.unwrap_or(0),
        })
    }

    pub fn with_proposal_order(mut self, order: ProposalOrder) -> Self {
        self.order = order;
        self
    }

    /// Seed for [`ProposalOrder::Shuffled`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn proposal_order(&self) -> ProposalOrder {
        self.order
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Runs both phases and returns the matched roster.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations, or a roster that already holds
    /// assignments.
    pub fn run(self) -> Result<MatchOutcome, MatchError> {
        if let Some(assigned) = self.roster.applicants().iter().find(|a| a.is_assigned()) {
            let slot = assigned
                .current()
                .map(|edge| self.roster.slot_name(edge.slot()))
                .unwrap_or_default();
            return Err(MatchError::AlreadyAssigned {
                applicant: assigned.name().to_string(),
                slot,
            });
        }

        info!(
            event = "match_start",
            applicant_count = self.roster.applicant_count(),
            slot_count = self.roster.slot_count(),
            capacity = self.roster.capacity(),
            order = ?self.order,
        );

        let sequence = proposal_sequence(&self.roster, self.order, self.seed);
        let slot_order: Vec<SlotId> = self.roster.slots_by_name().collect();
        let orphans = OrphanPool::new(&sequence);
        let mut scope = MatchScope::new(self.roster, orphans);
        scope.stats_mut().start();

        run_phase(&mut scope, 0, &mut ProposalPhase::new(sequence))?;
        if !scope.orphans().is_empty() || scope.roster().open_places() > 0 {
            run_phase(&mut scope, 1, &mut RedistributionPhase::new(slot_order))?;
        }

        scope.stats_mut().finish();
        let (roster, _, stats) = scope.into_parts();

        info!(
            event = "match_end",
            duration_ms = stats.elapsed().as_millis() as u64,
            proposals = stats.proposals,
            displacements = stats.displacements,
            rejections = stats.rejections,
            orphans = stats.orphans,
            longest_chain = stats.longest_chain,
        );

        Ok(MatchOutcome { roster, stats })
    }
}

fn run_phase<P: MatchPhase>(
    scope: &mut MatchScope,
    phase_index: usize,
    phase: &mut P,
) -> Result<(), MatchError> {
    let phase_type = phase.phase_type_name();
    info!(event = "phase_start", phase = phase_type, phase_index = phase_index);

    let start = Instant::now();
    let steps = phase.run(scope)?;

    let mut phase_stats = PhaseStats::new(phase_index, phase_type);
    phase_stats.step_count = steps;
    phase_stats.duration = start.elapsed();

    info!(
        event = "phase_end",
        phase = phase_type,
        phase_index = phase_index,
        duration_ms = phase_stats.duration.as_millis() as u64,
        steps = steps,
    );
    scope.stats_mut().record_phase(phase_stats);
    Ok(())
}

/// The matched roster together with the run statistics.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    roster: Roster,
    stats: MatchStats,
}

impl MatchOutcome {
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    /// Runs the stability validator over the final assignment.
    pub fn validate(&self) -> ValidationReport {
        Validator::check(&self.roster)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
