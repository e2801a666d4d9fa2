//! slotmatch - capacity-bounded preference matching
//!
//! Applicants rank slots; slots admit the applicants whose talent fits them
//! best and evict their weakest member when someone better arrives. The
//! result fills every slot exactly and leaves no applicant able to move to a
//! slot it prefers by out-scoring that slot's weakest member.
//!
//! # Example
//!
//! ```rust
//! use slotmatch::prelude::*;
//!
//! let input = "\
//! C C0 H:7 E:7 P:10
//! J J0 H:3 E:9 P:2 C0
//! J J1 H:4 E:3 P:7 C0
//! ";
//! let solution = solve_str(input, &MatchConfig::default()).unwrap();
//! assert_eq!(solution.roster().capacity(), 2);
//! assert!(solution.validation().unwrap().is_clean());
//! ```

pub mod error;
pub mod report;
pub mod roster;
mod solve;

pub use error::SlotmatchError;
pub use report::{render_text, AssignmentReport};
pub use solve::{check_regressions, solve, solve_file, solve_str, Solution};

pub use slotmatch_config::{
    ConfigError, MatchConfig, ProposalOrder, RegressionCheck, ValidationMode,
};
pub use slotmatch_core::{
    Applicant, ApplicantId, Axis, Edge, MatchError, ProblemError, Roster, RosterBuilder, Slot,
    SlotId, TalentVector,
};
pub use slotmatch_engine::{
    MatchOutcome, MatchStats, MatchingEngine, ValidationReport, Validator, Violation,
};

/// Commonly used items.
pub mod prelude {
    pub use crate::report::{render_text, AssignmentReport};
    pub use crate::{solve, solve_file, solve_str, Solution, SlotmatchError};
    pub use slotmatch_config::{MatchConfig, ProposalOrder, ValidationMode};
    pub use slotmatch_core::{Roster, RosterBuilder, TalentVector};
    pub use slotmatch_engine::MatchingEngine;
}
