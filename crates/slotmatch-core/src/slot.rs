//! Slot - a capacity-bounded acceptor of candidacy edges.

use std::collections::btree_set;
use std::collections::BTreeSet;

use crate::edge::{Edge, SlotId};
use crate::talent::TalentVector;

/// Outcome of offering an edge to a slot.
///
/// Exactly one edge leaves the offer without a place unless the slot had
/// room: either an evicted incumbent or the offered edge itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The edge was admitted into free capacity.
    Admitted,
    /// The edge was admitted and the contained incumbent was evicted.
    Displaced(Edge),
    /// The edge did not outrank the lowest incumbent and was turned away.
    Rejected(Edge),
}

impl Admission {
    /// Returns the edge left without a place, if any.
    pub fn displaced_edge(&self) -> Option<Edge> {
        match *self {
            Admission::Admitted => None,
            Admission::Displaced(edge) | Admission::Rejected(edge) => Some(edge),
        }
    }

    /// Returns true if the offered edge now holds a place.
    pub fn is_admitted(&self) -> bool {
        !matches!(self, Admission::Rejected(_))
    }
}

/// A slot with a fixed capacity and the ordered set of edges it accepted.
///
/// Mutation goes through [`Roster`](crate::Roster), which keeps the slot and
/// the applicant's current pointer consistent.
#[derive(Debug, Clone)]
pub struct Slot {
    id: SlotId,
    name: String,
    numeric_id: u64,
    talent: TalentVector,
    capacity: usize,
    accepted: BTreeSet<Edge>,
}

impl Slot {
    pub(crate) fn new(
        id: SlotId,
        name: String,
        numeric_id: u64,
        talent: TalentVector,
        capacity: usize,
    ) -> Self {
        Slot {
            id,
            name,
            numeric_id,
            talent,
            capacity,
            accepted: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Id derived from the digits of the name.
    #[inline]
    pub fn numeric_id(&self) -> u64 {
        self.numeric_id
    }

    #[inline]
    pub fn talent(&self) -> &TalentVector {
        &self.talent
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// True when the slot holds exactly `capacity` edges.
    #[inline]
    pub fn is_full(&self) -> bool {
        debug_assert!(self.accepted.len() <= self.capacity);
        self.accepted.len() >= self.capacity
    }

    #[inline]
    pub fn is_not_full(&self) -> bool {
        !self.is_full()
    }

    /// Number of places still open.
    #[inline]
    pub fn open_places(&self) -> usize {
        self.capacity.saturating_sub(self.accepted.len())
    }

    /// The minimum accepted edge, the next one to be evicted.
    #[inline]
    pub fn lowest(&self) -> Option<&Edge> {
        self.accepted.first()
    }

    /// Score of the lowest accepted edge.
    pub fn lowest_score(&self) -> Option<u64> {
        self.lowest().map(Edge::score)
    }

    /// Returns true if `edge` would be admitted by [`Roster::try_accept`](crate::Roster::try_accept).
    pub fn would_accept(&self, edge: &Edge) -> bool {
        if self.is_not_full() {
            return true;
        }
        self.lowest().is_some_and(|lowest| edge.outranks(lowest))
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.accepted.contains(edge)
    }

    /// Accepted edges from lowest to highest.
    pub fn accepted(&self) -> btree_set::Iter<'_, Edge> {
        self.accepted.iter()
    }

    /// Sum of the numeric ids of accepted applicants.
    ///
    /// Widened to `u128` since applicant ids span the whole `u64` range.
    pub fn member_sum(&self) -> u128 {
        self.accepted
            .iter()
            .map(|edge| u128::from(edge.applicant_key()))
            .sum()
    }

    pub(crate) fn insert(&mut self, edge: Edge) -> bool {
        self.accepted.insert(edge)
    }

    pub(crate) fn pop_lowest(&mut self) -> Option<Edge> {
        self.accepted.pop_first()
    }
}
