//! Shared test fixtures for slotmatch crates.
//!
//! - [`canonical`] - the three-slot, twelve-applicant worked scenario
//! - [`generated`] - seeded random problems and long displacement chains
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! slotmatch-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use slotmatch_test::canonical::{canonical_roster, CANONICAL_LINES};
//! use slotmatch_test::generated::random_roster;
//! ```

pub mod canonical;
pub mod generated;

pub use canonical::{
    canonical_roster, CANONICAL_INPUT, CANONICAL_LINES, CANONICAL_MEMBERS, CANONICAL_MEMBER_SUMS,
};
pub use generated::{cascade_roster, random_roster};
