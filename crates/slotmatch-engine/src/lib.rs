//! slotmatch Engine
//!
//! This crate provides the matching engine including:
//! - MatchingEngine and its outcome
//! - Phases (cascading proposal, orphan redistribution)
//! - Proposal order selection
//! - Statistics
//! - The post-hoc stability validator

pub mod engine;
pub mod order;
pub mod orphan;
pub mod phase;
pub mod scope;
pub mod stats;
pub mod validator;

pub use engine::{MatchOutcome, MatchingEngine};
pub use order::proposal_sequence;
pub use orphan::OrphanPool;
pub use phase::{MatchPhase, ProposalPhase, RedistributionPhase};
pub use scope::MatchScope;
pub use stats::{MatchStats, PhaseStats};
pub use validator::{ValidationReport, Validator, Violation};
