//! Error types for slotmatch

use thiserror::Error;

use crate::talent::{Axis, TalentVector};

/// Configuration errors detected while building a roster.
///
/// These mean the input violates the problem contract; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProblemError {
    /// A talent label that is not one of `H`, `E`, `P`
    #[error("unknown talent axis '{0}'")]
    UnknownAxis(String),

    /// The same axis was rated twice in one record
    #[error("talent axis {0} given more than once")]
    DuplicateAxis(Axis),

    /// A rating above the supported maximum
    #[error("talent axis {axis} rating {rating} exceeds {max}", max = TalentVector::MAX_RATING)]
    RatingTooLarge { axis: Axis, rating: u32 },

    /// One of the three axes was not rated
    #[error("talent axis {0} is missing")]
    MissingAxis(Axis),

    /// A name that is empty or contains characters other than ASCII alphanumerics
    #[error("invalid name '{0}'")]
    InvalidName(String),

    /// Two slots share a name
    #[error("slot {0} is defined more than once")]
    DuplicateSlot(String),

    /// Two applicants share a name
    #[error("applicant {0} is defined more than once")]
    DuplicateApplicant(String),

    /// A preference list references a slot that was never declared
    #[error("applicant {applicant} prefers unknown slot {slot}")]
    UnknownSlot { applicant: String, slot: String },

    /// The same slot appears twice in one preference list
    #[error("applicant {applicant} lists slot {slot} more than once")]
    DuplicatePreference { applicant: String, slot: String },

    /// An applicant stated no preferences and so can never propose
    #[error("applicant {0} has no slot preferences")]
    EmptyPreferences(String),

    /// Applicants were declared but there is nowhere to put them
    #[error("no slots defined")]
    NoSlots,

    /// Slot capacity would not be a whole number
    #[error("{applicants} applicants cannot be split evenly over {slots} slots")]
    UnevenCapacity { applicants: usize, slots: usize },
}

/// Internal invariant violations of the matching state.
///
/// A correct engine never produces these; they indicate a defect, not a
/// recoverable runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Eviction was requested from a slot with no accepted edges
    #[error("cannot evict from empty slot {0}")]
    EmptySlot(String),

    /// Unconditional admission into a slot already at capacity
    #[error("slot {0} is already full")]
    SlotFull(String),

    /// The applicant already holds an assignment
    #[error("applicant {applicant} is already assigned to {slot}")]
    AlreadyAssigned { applicant: String, slot: String },

    /// An edge refers to an id outside the arena
    #[error("unknown {kind} id {id}")]
    UnknownId { kind: &'static str, id: usize },

    /// Orphans and open places did not balance after the proposal phase
    #[error("orphan accounting mismatch: {orphans} orphans for {open} open places")]
    OrphanMismatch { orphans: usize, open: usize },
}

/// Result type alias for roster construction
pub type Result<T> = std::result::Result<T, ProblemError>;
