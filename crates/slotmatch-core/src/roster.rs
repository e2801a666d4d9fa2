//! Roster - the slot and applicant arenas.
//!
//! Edges refer to slots and applicants by index, so every operation that
//! touches both sides of an assignment lives here. Each of them leaves the
//! roster with `applicant.current == Some(e)` exactly when `e` is in the
//! accepted set of `e.slot()`.

use std::collections::BTreeMap;

use crate::applicant::Applicant;
use crate::edge::{ApplicantId, Edge, SlotId};
use crate::error::MatchError;
use crate::slot::{Admission, Slot};

/// The complete matching state: every slot, every applicant, and their edges.
#[derive(Debug, Clone)]
pub struct Roster {
    slots: Vec<Slot>,
    applicants: Vec<Applicant>,
    capacity: usize,
    slot_names: BTreeMap<String, SlotId>,
    applicant_names: BTreeMap<String, ApplicantId>,
}

impl Roster {
    pub(crate) fn from_parts(
        slots: Vec<Slot>,
        applicants: Vec<Applicant>,
        capacity: usize,
    ) -> Self {
        let slot_names = slots
            .iter()
            .map(|s| (s.name().to_string(), s.id()))
            .collect();
        let applicant_names = applicants
            .iter()
            .map(|a| (a.name().to_string(), a.id()))
            .collect();
        Roster {
            slots,
            applicants,
            capacity,
            slot_names,
            applicant_names,
        }
    }

    /// Places per slot: applicant count divided by slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn applicant_count(&self) -> usize {
        self.applicants.len()
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.get(id.index())
    }

    pub fn applicant(&self, id: ApplicantId) -> Option<&Applicant> {
        self.applicants.get(id.index())
    }

    pub fn slot_by_name(&self, name: &str) -> Option<&Slot> {
        self.slot_names.get(name).and_then(|&id| self.slot(id))
    }

    pub fn applicant_by_name(&self, name: &str) -> Option<&Applicant> {
        self.applicant_names.get(name).and_then(|&id| self.applicant(id))
    }

    /// Slot ids in lexicographic name order.
    pub fn slots_by_name(&self) -> impl Iterator<Item = SlotId> + '_ {
        self.slot_names.values().copied()
    }

    /// Applicant ids in lexicographic name order.
    pub fn applicants_by_name(&self) -> impl Iterator<Item = ApplicantId> + '_ {
        self.applicant_names.values().copied()
    }

    /// Total number of open places over all slots.
    pub fn open_places(&self) -> usize {
        self.slots.iter().map(Slot::open_places).sum()
    }

    pub fn unassigned_count(&self) -> usize {
        self.applicants.iter().filter(|a| !a.is_assigned()).count()
    }

    /// True when every slot is full and every applicant is assigned.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Slot::is_full) && self.applicants.iter().all(Applicant::is_assigned)
    }

    /// Builds an edge between an applicant and any slot at the given rank.
    ///
    /// Used for fallback placements that are not part of the stated
    /// preference list.
    pub fn edge_for(
        &self,
        applicant: ApplicantId,
        slot: SlotId,
        rank: usize,
    ) -> Result<Edge, MatchError> {
        let a = self.applicant_ref(applicant)?;
        let s = self.slot_ref(slot)?;
        Ok(Edge::new(
            applicant,
            slot,
            a.talent().score(s.talent()),
            rank,
            a.numeric_id(),
        ))
    }

    /// Unconditionally admits `edge` into its slot and makes it the
    /// applicant's current assignment.
    ///
    /// # Errors
    ///
    /// Fails if the slot is full or the applicant is already assigned.
    pub fn admit(&mut self, edge: Edge) -> Result<(), MatchError> {
        let slot = self.slot_ref(edge.slot())?;
        if slot.is_full() {
            return Err(MatchError::SlotFull(slot.name().to_string()));
        }
        let applicant = self.applicant_ref(edge.applicant())?;
        if let Some(current) = applicant.current() {
            return Err(MatchError::AlreadyAssigned {
                applicant: applicant.name().to_string(),
                slot: self.slot_name(current.slot()),
            });
        }

        self.slots[edge.slot().index()].insert(edge);
        self.applicants[edge.applicant().index()].set_current(edge);
        Ok(())
    }

    /// Removes the lowest edge from a slot and clears its applicant's
    /// assignment.
    ///
    /// # Errors
    ///
    /// Fails if the slot has no accepted edges.
    pub fn evict_lowest(&mut self, slot: SlotId) -> Result<Edge, MatchError> {
        let name = self.slot_ref(slot)?.name().to_string();
        let evicted = self.slots[slot.index()]
            .pop_lowest()
            .ok_or(MatchError::EmptySlot(name))?;
        self.applicants[evicted.applicant().index()].clear_current();
        Ok(evicted)
    }

    /// Offers `edge` to its slot.
    ///
    /// The edge is admitted if the slot has room or if it outranks the
    /// lowest incumbent, who is then evicted.
    pub fn try_accept(&mut self, edge: Edge) -> Result<Admission, MatchError> {
        let slot = self.slot_ref(edge.slot())?;
        if !slot.would_accept(&edge) {
            return Ok(Admission::Rejected(edge));
        }
        if slot.is_not_full() {
            self.admit(edge)?;
            return Ok(Admission::Admitted);
        }

        let evicted = self.evict_lowest(edge.slot())?;
        self.admit(edge)?;
        Ok(Admission::Displaced(evicted))
    }

    /// Name of a slot, or its id rendering when unknown.
    pub fn slot_name(&self, id: SlotId) -> String {
        self.slot(id)
            .map_or_else(|| id.to_string(), |s| s.name().to_string())
    }

    /// Name of an applicant, or its id rendering when unknown.
    pub fn applicant_name(&self, id: ApplicantId) -> String {
        self.applicant(id)
            .map_or_else(|| id.to_string(), |a| a.name().to_string())
    }

    fn slot_ref(&self, id: SlotId) -> Result<&Slot, MatchError> {
        self.slot(id).ok_or(MatchError::UnknownId {
            kind: "slot",
            id: id.index(),
        })
    }

    fn applicant_ref(&self, id: ApplicantId) -> Result<&Applicant, MatchError> {
        self.applicant(id).ok_or(MatchError::UnknownId {
            kind: "applicant",
            id: id.index(),
        })
    }
}

#[cfg(test)]
mod tests;
