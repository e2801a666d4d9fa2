//! Validated construction of a [`Roster`].

use std::collections::{HashMap, HashSet};

use smallvec::SmallVec;

use crate::applicant::{Applicant, INLINE_PREFERENCES};
use crate::edge::{derive_numeric_id, ApplicantId, Edge, SlotId};
use crate::error::{ProblemError, Result};
use crate::roster::Roster;
use crate::slot::Slot;
use crate::talent::TalentVector;

struct SlotSpec {
    name: String,
    numeric_id: u64,
    talent: TalentVector,
}

/// Builds a roster, rejecting every configuration error up front.
///
/// Preference edges are created as applicants are added, so every score is
/// computed exactly once. Slot capacity is fixed by [`RosterBuilder::build`].
///
/// # Examples
///
/// ```
/// use slotmatch_core::{RosterBuilder, TalentVector};
///
/// let mut builder = RosterBuilder::new();
/// builder.add_slot("C0", TalentVector::new(7, 7, 10))?;
/// builder.add_slot("C1", TalentVector::new(2, 1, 1))?;
/// builder.add_applicant("J0", TalentVector::new(3, 9, 2), ["C1", "C0"])?;
/// builder.add_applicant("J1", TalentVector::new(4, 3, 7), ["C0"])?;
///
/// let roster = builder.build()?;
/// assert_eq!(roster.capacity(), 1);
/// assert_eq!(roster.applicant_by_name("J0").unwrap().preferences()[1].score(), 104);
/// # Ok::<(), slotmatch_core::ProblemError>(())
/// ```
#[derive(Default)]
pub struct RosterBuilder {
    slots: Vec<SlotSpec>,
    slot_ids: HashMap<String, SlotId>,
    applicants: Vec<Applicant>,
    applicant_names: HashSet<String>,
}

impl RosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn applicant_count(&self) -> usize {
        self.applicants.len()
    }

    /// Declares a slot.
    ///
    /// # Errors
    ///
    /// Fails on an invalid or duplicate name.
    pub fn add_slot(&mut self, name: impl Into<String>, talent: TalentVector) -> Result<SlotId> {
        let name = validate_name(name.into())?;
        talent.check_limits()?;
        if self.slot_ids.contains_key(&name) {
            return Err(ProblemError::DuplicateSlot(name));
        }

        let id = SlotId(self.slots.len());
        self.slot_ids.insert(name.clone(), id);
        self.slots.push(SlotSpec {
            numeric_id: derive_numeric_id(&name),
            name,
            talent,
        });
        Ok(id)
    }

    /// Declares an applicant with its preference list, most preferred first.
    ///
    /// Every named slot must already be declared.
    ///
    /// # Errors
    ///
    /// Fails on an invalid or duplicate name, an unknown or repeated slot in
    /// the preference list, or an empty preference list.
    pub fn add_applicant<I, S>(
        &mut self,
        name: impl Into<String>,
        talent: TalentVector,
        preferences: I,
    ) -> Result<ApplicantId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = validate_name(name.into())?;
        talent.check_limits()?;
        if self.applicant_names.contains(&name) {
            return Err(ProblemError::DuplicateApplicant(name));
        }

        let id = ApplicantId(self.applicants.len());
        let numeric_id = derive_numeric_id(&name);
        let mut seen = HashSet::new();
        let mut edges: SmallVec<[Edge; INLINE_PREFERENCES]> = SmallVec::new();

        for (rank, slot_name) in preferences.into_iter().enumerate() {
            let slot_name = slot_name.as_ref();
            let slot_id = *self
                .slot_ids
                .get(slot_name)
                .ok_or_else(|| ProblemError::UnknownSlot {
                    applicant: name.clone(),
                    slot: slot_name.to_string(),
                })?;
            if !seen.insert(slot_id) {
                return Err(ProblemError::DuplicatePreference {
                    applicant: name.clone(),
                    slot: slot_name.to_string(),
                });
            }
            let score = talent.score(&self.slots[slot_id.index()].talent);
            edges.push(Edge::new(id, slot_id, score, rank, numeric_id));
        }

        if edges.is_empty() {
            return Err(ProblemError::EmptyPreferences(name));
        }

        self.applicant_names.insert(name.clone());
        self.applicants
            .push(Applicant::new(id, name, numeric_id, talent, edges));
        Ok(id)
    }

    /// Fixes slot capacity and produces the roster.
    ///
    /// # Errors
    ///
    /// Fails when no slot was declared or the applicant count is not an exact
    /// multiple of the slot count.
    pub fn build(self) -> Result<Roster> {
        let slot_count = self.slots.len();
        let applicant_count = self.applicants.len();
        if slot_count == 0 {
            return Err(ProblemError::NoSlots);
        }
        if applicant_count % slot_count != 0 {
            return Err(ProblemError::UnevenCapacity {
                applicants: applicant_count,
                slots: slot_count,
            });
        }

        let capacity = applicant_count / slot_count;
        let slots = self
            .slots
            .into_iter()
            .enumerate()
            .map(|(idx, spec)| {
                Slot::new(SlotId(idx), spec.name, spec.numeric_id, spec.talent, capacity)
            })
            .collect();
        Ok(Roster::from_parts(slots, self.applicants, capacity))
    }
}

fn validate_name(name: String) -> Result<String> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ProblemError::InvalidName(name));
    }
    Ok(name)
}
