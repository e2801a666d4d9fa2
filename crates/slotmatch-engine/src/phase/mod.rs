//! Matching phases
//!
//! The engine runs two phases in sequence:
//! - ProposalPhase: one deferred-acceptance pass with cascading eviction
//! - RedistributionPhase: fills open places with orphaned applicants

mod proposal;
mod redistribution;

use std::fmt::Debug;

use slotmatch_core::MatchError;

use crate::scope::MatchScope;

pub use proposal::ProposalPhase;
pub use redistribution::RedistributionPhase;

/// A phase of the matching process.
///
/// Phases are executed in sequence by the engine, each mutating the roster
/// held in the shared [`MatchScope`].
pub trait MatchPhase: Debug {
    /// Executes this phase and returns the number of steps taken.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations; a correct phase never fails.
    fn run(&mut self, scope: &mut MatchScope) -> Result<u64, MatchError>;

    /// Returns the name of this phase type.
    fn phase_type_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests;
