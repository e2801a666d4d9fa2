//! Tests for the roster arena and builder.

use super::*;
use crate::builder::RosterBuilder;
use crate::error::ProblemError;
use crate::talent::{Axis, TalentVector};

/// Two slots of capacity 2, four applicants all preferring A then B.
fn two_by_two() -> Roster {
    let mut b = RosterBuilder::new();
    b.add_slot("A", TalentVector::new(1, 0, 0)).unwrap();
    b.add_slot("B", TalentVector::new(0, 1, 0)).unwrap();
    b.add_applicant("J1", TalentVector::new(5, 1, 0), ["A", "B"])
        .unwrap();
    b.add_applicant("J2", TalentVector::new(3, 2, 0), ["A", "B"])
        .unwrap();
    b.add_applicant("J3", TalentVector::new(8, 3, 0), ["A", "B"])
        .unwrap();
    b.add_applicant("J4", TalentVector::new(1, 4, 0), ["A", "B"])
        .unwrap();
    b.build().unwrap()
}

fn first_edge(roster: &Roster, name: &str) -> Edge {
    roster.applicant_by_name(name).unwrap().propose_first()
}

fn accepted_names(roster: &Roster, slot: &str) -> Vec<String> {
    roster
        .slot_by_name(slot)
        .unwrap()
        .accepted()
        .map(|e| roster.applicant_name(e.applicant()))
        .collect()
}

#[test]
fn test_build_fixes_capacity() {
    let roster = two_by_two();
    assert_eq!(roster.capacity(), 2);
    assert_eq!(roster.slot_count(), 2);
    assert_eq!(roster.applicant_count(), 4);
    assert!(roster.slots().iter().all(|s| s.capacity() == 2));
    assert_eq!(roster.open_places(), 4);
    assert_eq!(roster.unassigned_count(), 4);
}

#[test]
fn test_edges_are_scored_eagerly() {
    let roster = two_by_two();
    let j3 = roster.applicant_by_name("J3").unwrap();
    let scores: Vec<u64> = j3.preferences().iter().map(Edge::score).collect();
    assert_eq!(scores, vec![8, 3]);
    let ranks: Vec<usize> = j3.preferences().iter().map(Edge::rank).collect();
    assert_eq!(ranks, vec![0, 1]);
    assert_eq!(j3.numeric_id(), 3);
}

#[test]
fn test_next_preference() {
    let roster = two_by_two();
    let j1 = roster.applicant_by_name("J1").unwrap();
    let next = j1.next_preference(0).unwrap();
    assert_eq!(roster.slot_name(next.slot()), "B");
    assert!(j1.next_preference(1).is_none());
    assert!(j1.next_preference(usize::MAX).is_none());
}

#[test]
fn test_admit_sets_both_sides() {
    let mut roster = two_by_two();
    let edge = first_edge(&roster, "J1");
    roster.admit(edge).unwrap();

    let slot = roster.slot_by_name("A").unwrap();
    assert!(slot.contains(&edge));
    assert_eq!(slot.lowest(), Some(&edge));
    assert_eq!(roster.applicant_by_name("J1").unwrap().current(), Some(&edge));
}

#[test]
fn test_admit_rejects_double_assignment() {
    let mut roster = two_by_two();
    let j1 = roster.applicant_by_name("J1").unwrap();
    let (first, second) = (j1.preferences()[0], j1.preferences()[1]);
    roster.admit(first).unwrap();

    let err = roster.admit(second).unwrap_err();
    assert_eq!(
        err,
        MatchError::AlreadyAssigned {
            applicant: "J1".to_string(),
            slot: "A".to_string(),
        }
    );
}

#[test]
fn test_admit_rejects_full_slot() {
    let mut roster = two_by_two();
    roster.admit(first_edge(&roster, "J1")).unwrap();
    roster.admit(first_edge(&roster, "J2")).unwrap();

    let err = roster.admit(first_edge(&roster, "J3")).unwrap_err();
    assert_eq!(err, MatchError::SlotFull("A".to_string()));
}

#[test]
fn test_evict_lowest_clears_current() {
    let mut roster = two_by_two();
    roster.admit(first_edge(&roster, "J1")).unwrap();
    roster.admit(first_edge(&roster, "J2")).unwrap();

    let evicted = roster.evict_lowest(SlotId(0)).unwrap();
    assert_eq!(roster.applicant_name(evicted.applicant()), "J2");
    assert!(!roster.applicant_by_name("J2").unwrap().is_assigned());
    assert_eq!(accepted_names(&roster, "A"), vec!["J1"]);
}

#[test]
fn test_evict_from_empty_slot_is_an_error() {
    let mut roster = two_by_two();
    let err = roster.evict_lowest(SlotId(1)).unwrap_err();
    assert_eq!(err, MatchError::EmptySlot("B".to_string()));
}

#[test]
fn test_unknown_ids_are_errors() {
    let mut roster = two_by_two();
    assert!(matches!(
        roster.evict_lowest(SlotId(9)),
        Err(MatchError::UnknownId { kind: "slot", id: 9 })
    ));
    assert!(roster.edge_for(ApplicantId(42), SlotId(0), 0).is_err());
}

#[test]
fn test_try_accept_with_room() {
    let mut roster = two_by_two();
    let outcome = roster.try_accept(first_edge(&roster, "J2")).unwrap();
    assert_eq!(outcome, Admission::Admitted);
    assert!(outcome.displaced_edge().is_none());
}

#[test]
fn test_try_accept_displaces_lowest() {
    let mut roster = two_by_two();
    roster.try_accept(first_edge(&roster, "J1")).unwrap();
    roster.try_accept(first_edge(&roster, "J2")).unwrap();

    let j2 = first_edge(&roster, "J2");
    let outcome = roster.try_accept(first_edge(&roster, "J3")).unwrap();
    assert_eq!(outcome, Admission::Displaced(j2));
    assert!(outcome.is_admitted());
    assert_eq!(accepted_names(&roster, "A"), vec!["J1", "J3"]);
    assert!(!roster.applicant_by_name("J2").unwrap().is_assigned());
}

#[test]
fn test_try_accept_rejects_weaker_edge_without_touching_incumbents() {
    let mut roster = two_by_two();
    roster.try_accept(first_edge(&roster, "J1")).unwrap();
    roster.try_accept(first_edge(&roster, "J3")).unwrap();
    let before: Vec<Edge> = roster.slot_by_name("A").unwrap().accepted().copied().collect();

    let j4 = first_edge(&roster, "J4");
    let slot_a = roster.slot_by_name("A").unwrap();
    assert!(!slot_a.would_accept(&j4));
    assert!(slot_a.would_accept(&Edge::new(j4.applicant(), j4.slot(), 6, 0, 4)));
    let outcome = roster.try_accept(j4).unwrap();
    assert_eq!(outcome, Admission::Rejected(j4));
    assert!(!outcome.is_admitted());

    let after: Vec<Edge> = roster.slot_by_name("A").unwrap().accepted().copied().collect();
    assert_eq!(before, after);
    assert!(!roster.applicant_by_name("J4").unwrap().is_assigned());
}

#[test]
fn test_fallback_edge() {
    let mut roster = two_by_two();
    let j4 = roster.applicant_by_name("J4").unwrap();
    let rank = j4.fallback_rank();
    let edge = roster.edge_for(j4.id(), SlotId(1), rank).unwrap();
    assert_eq!(edge.rank(), 2);
    assert_eq!(edge.score(), 4);

    roster.admit(edge).unwrap();
    let j4 = roster.applicant_by_name("J4").unwrap();
    assert!(j4.is_fallback());
    assert_eq!(j4.preferred_over_current().len(), 2);
}

#[test]
fn test_preferred_over_current() {
    let mut roster = two_by_two();
    let second = roster.applicant_by_name("J1").unwrap().preferences()[1];
    roster.admit(second).unwrap();
    let j1 = roster.applicant_by_name("J1").unwrap();
    assert!(!j1.is_fallback());
    assert_eq!(j1.preferred_over_current().len(), 1);
}

#[test]
fn test_member_sum_and_completion() {
    let mut roster = two_by_two();
    for name in ["J1", "J3"] {
        roster.admit(first_edge(&roster, name)).unwrap();
    }
    for name in ["J2", "J4"] {
        let second = roster.applicant_by_name(name).unwrap().preferences()[1];
        roster.admit(second).unwrap();
    }
    assert!(roster.is_complete());
    assert_eq!(roster.slot_by_name("A").unwrap().member_sum(), 4);
    assert_eq!(roster.slot_by_name("B").unwrap().member_sum(), 6);
}

#[test]
fn test_member_sum_widens_past_u64() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::new(1, 1, 1)).unwrap();
    b.add_applicant("J18446744073709551615", TalentVector::new(2, 0, 0), ["C0"])
        .unwrap();
    b.add_applicant("J18446744073709551614", TalentVector::new(1, 0, 0), ["C0"])
        .unwrap();
    let mut roster = b.build().unwrap();
    for name in ["J18446744073709551615", "J18446744073709551614"] {
        roster.admit(first_edge(&roster, name)).unwrap();
    }
    let slot = roster.slot_by_name("C0").unwrap();
    assert!(slot.is_full());
    assert_eq!(slot.member_sum(), 2 * u128::from(u64::MAX) - 1);
}

#[test]
fn test_name_order_iterators() {
    let mut b = RosterBuilder::new();
    b.add_slot("S2", TalentVector::new(1, 1, 1)).unwrap();
    b.add_slot("S10", TalentVector::new(1, 1, 1)).unwrap();
    b.add_applicant("J2", TalentVector::default(), ["S2"]).unwrap();
    b.add_applicant("J10", TalentVector::default(), ["S10"]).unwrap();
    let roster = b.build().unwrap();

    let slots: Vec<String> = roster.slots_by_name().map(|id| roster.slot_name(id)).collect();
    assert_eq!(slots, vec!["S10", "S2"]);
    let applicants: Vec<String> = roster
        .applicants_by_name()
        .map(|id| roster.applicant_name(id))
        .collect();
    assert_eq!(applicants, vec!["J10", "J2"]);
}

// ============================================================================
// Builder errors
// ============================================================================

#[test]
fn test_duplicate_slot() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::default()).unwrap();
    assert_eq!(
        b.add_slot("C0", TalentVector::default()).unwrap_err(),
        ProblemError::DuplicateSlot("C0".to_string())
    );
}

#[test]
fn test_duplicate_applicant() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::default()).unwrap();
    b.add_applicant("J0", TalentVector::default(), ["C0"]).unwrap();
    assert_eq!(
        b.add_applicant("J0", TalentVector::default(), ["C0"])
            .unwrap_err(),
        ProblemError::DuplicateApplicant("J0".to_string())
    );
}

#[test]
fn test_unknown_slot_in_preferences() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::default()).unwrap();
    assert_eq!(
        b.add_applicant("J0", TalentVector::default(), ["C0", "C9"])
            .unwrap_err(),
        ProblemError::UnknownSlot {
            applicant: "J0".to_string(),
            slot: "C9".to_string(),
        }
    );
    assert_eq!(b.applicant_count(), 0);
}

#[test]
fn test_duplicate_preference() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::default()).unwrap();
    b.add_slot("C1", TalentVector::default()).unwrap();
    assert_eq!(
        b.add_applicant("J0", TalentVector::default(), ["C0", "C1", "C0"])
            .unwrap_err(),
        ProblemError::DuplicatePreference {
            applicant: "J0".to_string(),
            slot: "C0".to_string(),
        }
    );
}

#[test]
fn test_empty_preferences() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::default()).unwrap();
    let none: [&str; 0] = [];
    assert_eq!(
        b.add_applicant("J0", TalentVector::default(), none)
            .unwrap_err(),
        ProblemError::EmptyPreferences("J0".to_string())
    );
}

#[test]
fn test_invalid_names() {
    let mut b = RosterBuilder::new();
    assert!(matches!(
        b.add_slot("", TalentVector::default()),
        Err(ProblemError::InvalidName(_))
    ));
    assert!(matches!(
        b.add_slot("C-1", TalentVector::default()),
        Err(ProblemError::InvalidName(_))
    ));
}

#[test]
fn test_oversized_ratings() {
    let huge = TalentVector::new(1, 1, TalentVector::MAX_RATING + 1);
    let mut b = RosterBuilder::new();
    assert_eq!(
        b.add_slot("C0", huge).unwrap_err(),
        ProblemError::RatingTooLarge {
            axis: Axis::Pizzazz,
            rating: TalentVector::MAX_RATING + 1,
        }
    );
    b.add_slot("C0", TalentVector::default()).unwrap();
    assert!(matches!(
        b.add_applicant("J0", huge, ["C0"]),
        Err(ProblemError::RatingTooLarge { .. })
    ));
    assert_eq!(b.applicant_count(), 0);
}

#[test]
fn test_no_slots() {
    assert_eq!(
        RosterBuilder::new().build().unwrap_err(),
        ProblemError::NoSlots
    );
}

#[test]
fn test_uneven_capacity() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::default()).unwrap();
    b.add_slot("C1", TalentVector::default()).unwrap();
    b.add_applicant("J0", TalentVector::default(), ["C0"]).unwrap();
    assert_eq!(
        b.build().unwrap_err(),
        ProblemError::UnevenCapacity {
            applicants: 1,
            slots: 2,
        }
    );
}

#[test]
fn test_zero_capacity_slots_are_full() {
    let mut b = RosterBuilder::new();
    b.add_slot("C0", TalentVector::new(1, 1, 1)).unwrap();
    let roster = b.build().unwrap();
    assert_eq!(roster.capacity(), 0);
    assert!(roster.slots()[0].is_full());
    assert!(roster.is_complete());
}
