//! Applicant - ranks slots and holds at most one assignment.

use smallvec::SmallVec;

use crate::edge::{ApplicantId, Edge};
use crate::talent::TalentVector;

/// Inline capacity for preference lists; most applicants rank a handful of slots.
pub(crate) const INLINE_PREFERENCES: usize = 8;

/// An applicant with its preference edges and current assignment.
#[derive(Debug, Clone)]
pub struct Applicant {
    id: ApplicantId,
    name: String,
    numeric_id: u64,
    talent: TalentVector,
    preferences: SmallVec<[Edge; INLINE_PREFERENCES]>,
    current: Option<Edge>,
}

impl Applicant {
    pub(crate) fn new(
        id: ApplicantId,
        name: String,
        numeric_id: u64,
        talent: TalentVector,
        preferences: SmallVec<[Edge; INLINE_PREFERENCES]>,
    ) -> Self {
        debug_assert!(!preferences.is_empty());
        Applicant {
            id,
            name,
            numeric_id,
            talent,
            preferences,
            current: None,
        }
    }

    #[inline]
    pub fn id(&self) -> ApplicantId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn numeric_id(&self) -> u64 {
        self.numeric_id
    }

    #[inline]
    pub fn talent(&self) -> &TalentVector {
        &self.talent
    }

    /// Stated preferences, most preferred first.
    pub fn preferences(&self) -> &[Edge] {
        &self.preferences
    }

    /// The edge ranked directly after `after_rank`, if any.
    pub fn next_preference(&self, after_rank: usize) -> Option<Edge> {
        self.preferences.get(after_rank.checked_add(1)?).copied()
    }

    /// The most preferred edge. Every applicant has one.
    pub fn propose_first(&self) -> Edge {
        self.preferences[0]
    }

    /// Rank given to fallback edges: one past every stated preference.
    pub fn fallback_rank(&self) -> usize {
        self.preferences.len()
    }

    #[inline]
    pub fn current(&self) -> Option<&Edge> {
        self.current.as_ref()
    }

    #[inline]
    pub fn is_assigned(&self) -> bool {
        self.current.is_some()
    }

    /// True if assigned through a fallback edge rather than a stated preference.
    pub fn is_fallback(&self) -> bool {
        self.current
            .is_some_and(|edge| edge.rank() >= self.preferences.len())
    }

    /// Stated preferences ranked strictly better than the current assignment.
    ///
    /// All stated preferences when unassigned or placed by fallback.
    pub fn preferred_over_current(&self) -> &[Edge] {
        let end = self
            .current
            .map_or(self.preferences.len(), |edge| {
                edge.rank().min(self.preferences.len())
            });
        &self.preferences[..end]
    }

    pub(crate) fn set_current(&mut self, edge: Edge) {
        self.current = Some(edge);
    }

    pub(crate) fn clear_current(&mut self) -> Option<Edge> {
        self.current.take()
    }
}
