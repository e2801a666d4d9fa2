//! Candidacy edges between applicants and slots.
//!
//! An [`Edge`] is the only value that moves through the matching engine.
//! Slots keep their accepted edges in a `BTreeSet`, so the ordering defined
//! here decides who gets evicted and who is rejected.

use std::cmp::Ordering;
use std::fmt;

/// Arena index of a slot in a [`Roster`](crate::Roster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

/// Arena index of an applicant in a [`Roster`](crate::Roster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApplicantId(pub usize);

impl SlotId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl ApplicantId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot#{}", self.0)
    }
}

impl fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "applicant#{}", self.0)
    }
}

/// Derives the numeric id from a name such as `C1970` or `J12`.
///
/// The id is made of the decimal digits directly after the first character.
/// Names without such digits derive `0`.
///
/// # Examples
///
/// ```
/// use slotmatch_core::derive_numeric_id;
///
/// assert_eq!(derive_numeric_id("C1970"), 1970);
/// assert_eq!(derive_numeric_id("J7x"), 7);
/// assert_eq!(derive_numeric_id("Jx"), 0);
/// ```
pub fn derive_numeric_id(name: &str) -> u64 {
    let mut chars = name.chars();
    chars.next();
    let digits: String = chars.take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// An immutable `(applicant, slot, score, rank)` candidacy.
///
/// Edges are totally ordered:
///
/// 1. ascending score,
/// 2. among equal scores, the more preferred (lower) rank is greater,
/// 3. ascending applicant numeric id, then applicant arena index.
///
/// The greater edge wins a place in a slot. Because the applicant is part of
/// the key and an applicant never holds two edges to the same slot, no two
/// distinct edges in one slot compare equal.
///
/// # Examples
///
/// ```
/// use slotmatch_core::{ApplicantId, Edge, SlotId};
///
/// let slot = SlotId(0);
/// let strong = Edge::new(ApplicantId(0), slot, 120, 2, 0);
/// let weak = Edge::new(ApplicantId(1), slot, 90, 0, 1);
/// let eager = Edge::new(ApplicantId(2), slot, 120, 0, 2);
///
/// assert!(strong > weak);
/// assert!(eager > strong); // same score, better rank
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    applicant: ApplicantId,
    slot: SlotId,
    score: u64,
    rank: usize,
    applicant_key: u64,
}

impl Edge {
    /// Creates an edge.
    ///
    /// `applicant_key` is the applicant's derived numeric id, used as the
    /// tiebreaker after score and rank.
    pub const fn new(
        applicant: ApplicantId,
        slot: SlotId,
        score: u64,
        rank: usize,
        applicant_key: u64,
    ) -> Self {
        Edge {
            applicant,
            slot,
            score,
            rank,
            applicant_key,
        }
    }

    #[inline]
    pub const fn applicant(&self) -> ApplicantId {
        self.applicant
    }

    #[inline]
    pub const fn slot(&self) -> SlotId {
        self.slot
    }

    /// Affinity between the applicant and the slot.
    #[inline]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// 0-based position in the applicant's preference list.
    #[inline]
    pub const fn rank(&self) -> usize {
        self.rank
    }

    #[inline]
    pub const fn applicant_key(&self) -> u64 {
        self.applicant_key
    }

    /// Returns true if this edge would win a place over `other`.
    #[inline]
    pub fn outranks(&self, other: &Edge) -> bool {
        self > other
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.rank.cmp(&self.rank))
            .then_with(|| self.applicant_key.cmp(&other.applicant_key))
            .then_with(|| self.applicant.cmp(&other.applicant))
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} (score {}, rank {})",
            self.applicant, self.slot, self.score, self.rank
        )
    }
}

#[cfg(test)]
#[path = "edge_tests.rs"]
mod tests;
