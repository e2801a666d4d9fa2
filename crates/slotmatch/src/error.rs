//! Top-level error type.

use slotmatch_config::ConfigError;
use slotmatch_core::{MatchError, ProblemError};
use slotmatch_engine::ValidationReport;
use thiserror::Error;

use crate::roster::ParseError;

/// Everything that can stop a solve.
#[derive(Debug, Error)]
pub enum SlotmatchError {
    #[error(transparent)]
    Problem(#[from] ProblemError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("internal matching error: {0}")]
    Match(#[from] MatchError),

    /// Strict validation found stability violations
    #[error("strict validation failed with {} violation(s)", .0.len())]
    StrictValidation(ValidationReport),

    /// A regression check names a slot that does not exist
    #[error("regression check names unknown slot {0}")]
    UnknownRegressionSlot(String),

    /// A slot's member sum differs from the expected value
    #[error("regression check failed: slot {slot} has member sum {actual}, expected {expected}")]
    Regression {
        slot: String,
        expected: u64,
        actual: u128,
    },
}

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, SlotmatchError>;
