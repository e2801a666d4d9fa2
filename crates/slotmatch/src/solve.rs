//! One-call solving: parse, match, validate, check regressions.

use std::path::Path;

use slotmatch_config::{MatchConfig, RegressionCheck, ValidationMode};
use slotmatch_core::Roster;
use slotmatch_engine::{MatchOutcome, MatchStats, MatchingEngine, ValidationReport};
use tracing::{info, warn};

use crate::error::{Result, SlotmatchError};
use crate::report::{render_text, AssignmentReport};
use crate::roster::{parse_file, parse_str};

/// A finished, checked matching.
#[derive(Debug, Clone)]
pub struct Solution {
    outcome: MatchOutcome,
    validation: Option<ValidationReport>,
}

impl Solution {
    pub fn roster(&self) -> &Roster {
        self.outcome.roster()
    }

    pub fn stats(&self) -> &MatchStats {
        self.outcome.stats()
    }

    /// The validator report, or `None` when validation is off.
    pub fn validation(&self) -> Option<&ValidationReport> {
        self.validation.as_ref()
    }

    pub fn into_outcome(self) -> MatchOutcome {
        self.outcome
    }

    /// The text report.
    pub fn to_text(&self) -> String {
        render_text(self.roster())
    }

    pub fn to_report(&self) -> AssignmentReport {
        AssignmentReport::from_roster(self.roster())
    }
}

/// Matches `roster` according to `config`.
///
/// # Errors
///
/// Fails on an invalid config, an internal matching error, violations in
/// strict mode, or a failed regression check.
///
/// # Examples
///
/// ```
/// use slotmatch::{solve, MatchConfig};
/// use slotmatch::roster::parse_str;
///
/// let roster = parse_str("\
/// C C0 H:1 E:0 P:0
/// C C1 H:0 E:1 P:0
/// J J1 H:3 E:1 P:0 C0,C1
/// J J2 H:5 E:2 P:0 C0,C1
/// ").unwrap();
///
/// let solution = solve(roster, &MatchConfig::default()).unwrap();
/// assert_eq!(solution.to_text(), "C0 J2 C0:5 C1:2\nC1 J1 C0:3 C1:1\n");
/// ```
pub fn solve(roster: Roster, config: &MatchConfig) -> Result<Solution> {
    let outcome = MatchingEngine::from_config(roster, config)?.run()?;

    let validation = if config.validation.is_enabled() {
        let report = outcome.validate();
        if report.is_clean() {
            info!(event = "validated", violations = 0usize);
        } else {
            warn!(event = "validated", violations = report.len());
            if config.validation == ValidationMode::Strict {
                return Err(SlotmatchError::StrictValidation(report));
            }
        }
        Some(report)
    } else {
        None
    };

    check_regressions(outcome.roster(), &config.regression)?;

    Ok(Solution {
        outcome,
        validation,
    })
}

/// Parses record text and solves it.
pub fn solve_str(input: &str, config: &MatchConfig) -> Result<Solution> {
    solve(parse_str(input)?, config)
}

/// Reads a problem file and solves it.
pub fn solve_file(path: impl AsRef<Path>, config: &MatchConfig) -> Result<Solution> {
    solve(parse_file(path)?, config)
}

/// Compares each named slot's member sum with its expected value.
///
/// # Errors
///
/// Returns the first check that names an unknown slot or fails.
pub fn check_regressions(roster: &Roster, checks: &[RegressionCheck]) -> Result<()> {
    for check in checks {
        let slot = roster
            .slot_by_name(&check.slot)
            .ok_or_else(|| SlotmatchError::UnknownRegressionSlot(check.slot.clone()))?;
        let actual = slot.member_sum();
        if actual != u128::from(check.expected_member_sum) {
            return Err(SlotmatchError::Regression {
                slot: check.slot.clone(),
                expected: check.expected_member_sum,
                actual,
            });
        }
        info!(
            event = "regression_ok",
            slot = %check.slot,
            member_sum = %actual,
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "solve_tests.rs"]
mod tests;
