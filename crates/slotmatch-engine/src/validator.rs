//! Post-hoc stability checks.
//!
//! The validator never changes the roster. It reports every slot that is
//! not exactly full, every assignment the two sides disagree on, and every
//! applicant that could move to a more preferred slot by out-scoring its
//! weakest member.

use std::fmt;

use slotmatch_core::{Roster, Slot};
use tracing::warn;

/// A single broken guarantee in a finished matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The slot does not hold exactly `capacity` applicants.
    SlotCount {
        slot: String,
        accepted: usize,
        capacity: usize,
    },
    /// The slot accepted an edge the applicant does not hold as current.
    Mismatch { slot: String, applicant: String },
    /// The applicant's current edge is missing from its slot.
    Detached { applicant: String, slot: String },
    /// The applicant ended without a place.
    Unassigned { applicant: String },
    /// The applicant prefers a slot whose weakest member it out-scores.
    BetterFit {
        applicant: String,
        assigned_slot: String,
        assigned_rank: usize,
        assigned_score: u64,
        assigned_low: Option<u64>,
        better_slot: String,
        better_rank: usize,
        better_score: u64,
        better_low: Option<u64>,
    },
}

struct Low(Option<u64>);

impl fmt::Display for Low {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(score) => write!(f, "{score}"),
            None => f.write_str("none"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::SlotCount {
                slot,
                accepted,
                capacity,
            } => write!(f, "slot {slot} holds {accepted} of {capacity} places"),
            Violation::Mismatch { slot, applicant } => write!(
                f,
                "slot {slot} accepted {applicant}, whose current assignment differs"
            ),
            Violation::Detached { applicant, slot } => write!(
                f,
                "applicant {applicant} is assigned to {slot} but not accepted there"
            ),
            Violation::Unassigned { applicant } => {
                write!(f, "applicant {applicant} is unassigned")
            }
            Violation::BetterFit {
                applicant,
                assigned_slot,
                assigned_rank,
                assigned_score,
                assigned_low,
                better_slot,
                better_rank,
                better_score,
                better_low,
            } => write!(
                f,
                "applicant {applicant} in {assigned_slot} (rank {assigned_rank}, score \
                 {assigned_score}, min {}) would beat {better_slot} (rank {better_rank}, \
                 score {better_score}, min {})",
                Low(*assigned_low),
                Low(*better_low),
            ),
        }
    }
}

/// Violations found by one [`Validator::check`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn push(&mut self, violation: Violation) {
        warn!(event = "violation", "{violation}");
        self.violations.push(violation);
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

/// Checks a finished roster for exact fill and local stability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Examines every slot, then every applicant.
    ///
    /// An empty preferred slot always counts as beatable.
    pub fn check(roster: &Roster) -> ValidationReport {
        let mut report = ValidationReport::default();

        for slot in roster.slots() {
            check_slot(roster, slot, &mut report);
        }

        for applicant in roster.applicants() {
            let Some(current) = applicant.current() else {
                report.push(Violation::Unassigned {
                    applicant: applicant.name().to_string(),
                });
                continue;
            };

            let assigned = roster.slot(current.slot());
            let assigned_slot = roster.slot_name(current.slot());
            if !assigned.is_some_and(|s| s.contains(current)) {
                report.push(Violation::Detached {
                    applicant: applicant.name().to_string(),
                    slot: assigned_slot.clone(),
                });
            }
            let assigned_low = assigned.and_then(Slot::lowest_score);

            for better in applicant.preferred_over_current() {
                let better_low = roster.slot(better.slot()).and_then(Slot::lowest_score);
                let beatable = better_low.map_or(true, |low| better.score() > low);
                if beatable {
                    report.push(Violation::BetterFit {
                        applicant: applicant.name().to_string(),
                        assigned_slot: assigned_slot.clone(),
                        assigned_rank: current.rank(),
                        assigned_score: current.score(),
                        assigned_low,
                        better_slot: roster.slot_name(better.slot()),
                        better_rank: better.rank(),
                        better_score: better.score(),
                        better_low,
                    });
                }
            }
        }

        report
    }
}

fn check_slot(roster: &Roster, slot: &Slot, report: &mut ValidationReport) {
    if slot.accepted_count() != slot.capacity() {
        report.push(Violation::SlotCount {
            slot: slot.name().to_string(),
            accepted: slot.accepted_count(),
            capacity: slot.capacity(),
        });
    }

    for edge in slot.accepted() {
        let holds = roster
            .applicant(edge.applicant())
            .and_then(|a| a.current())
            .is_some_and(|current| current == edge);
        if !holds {
            report.push(Violation::Mismatch {
                slot: slot.name().to_string(),
                applicant: roster.applicant_name(edge.applicant()),
            });
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
