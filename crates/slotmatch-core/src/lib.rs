//! slotmatch Core - data model for capacity-bounded preference matching
//!
//! This crate provides the building blocks the matching engine works on:
//! - [`TalentVector`] ratings and the dot-product affinity score
//! - [`Edge`] candidacies with the total order every slot is kept in
//! - [`Slot`] acceptors and [`Applicant`] preference lists
//! - the [`Roster`] arena that owns both and keeps assignments consistent
//! - [`RosterBuilder`] for validated construction

pub mod applicant;
pub mod builder;
pub mod edge;
pub mod error;
pub mod roster;
pub mod slot;
pub mod talent;

pub use applicant::Applicant;
pub use builder::RosterBuilder;
pub use edge::{derive_numeric_id, ApplicantId, Edge, SlotId};
pub use error::{MatchError, ProblemError};
pub use roster::Roster;
pub use slot::{Admission, Slot};
pub use talent::{Axis, TalentVector};
