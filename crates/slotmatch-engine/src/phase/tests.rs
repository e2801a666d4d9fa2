//! Tests for the proposal and redistribution phases.

use slotmatch_core::{ApplicantId, MatchError, Roster, RosterBuilder, TalentVector};

use super::proposal::resolve;
use super::{MatchPhase, ProposalPhase, RedistributionPhase};
use crate::orphan::OrphanPool;
use crate::order::proposal_sequence;
use crate::scope::MatchScope;
use slotmatch_config::ProposalOrder;

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

/// One place each in A and B; both applicants only want A.
fn single_choice() -> Roster {
    let mut b = RosterBuilder::new();
    b.add_slot("A", TalentVector::new(1, 0, 0)).unwrap();
    b.add_slot("B", TalentVector::new(0, 1, 0)).unwrap();
    b.add_applicant("J0", TalentVector::new(5, 0, 0), ["A"])
        .unwrap();
    b.add_applicant("J1", TalentVector::new(3, 0, 0), ["A"])
        .unwrap();
    b.build().unwrap()
}

fn scope_for(roster: Roster) -> (MatchScope, Vec<ApplicantId>) {
    let sequence = proposal_sequence(&roster, ProposalOrder::Name, 0);
    let scope = MatchScope::new(roster, OrphanPool::new(&sequence));
    (scope, sequence)
}

fn members(scope: &MatchScope, slot: &str) -> Vec<String> {
    let roster = scope.roster();
    roster
        .slot_by_name(slot)
        .unwrap()
        .accepted()
        .map(|e| roster.applicant_name(e.applicant()))
        .collect()
}

#[test]
fn test_resolve_admits_into_free_capacity() {
    let (mut scope, _) = scope_for(two_by_two());
    let edge = scope
        .roster()
        .applicant_by_name("J2")
        .unwrap()
        .propose_first();

    resolve(&mut scope, edge).unwrap();

    assert_eq!(members(&scope, "A"), vec!["J2"]);
    assert_eq!(scope.stats().proposals, 1);
    assert_eq!(scope.stats().admissions, 1);
    assert_eq!(scope.stats().longest_chain, 1);
}

#[test]
fn test_proposal_cascades_evictions_and_rejections() {
    let (mut scope, sequence) = scope_for(two_by_two());
    let mut phase = ProposalPhase::new(sequence);

    let steps = phase.run(&mut scope).unwrap();

    assert_eq!(steps, 4);
    assert_eq!(members(&scope, "A"), vec!["J1", "J3"]);
    assert_eq!(members(&scope, "B"), vec!["J2", "J4"]);
    assert!(scope.orphans().is_empty());

    let stats = scope.stats();
    assert_eq!(stats.proposals, 6);
    assert_eq!(stats.admissions, 5);
    assert_eq!(stats.displacements, 1);
    assert_eq!(stats.rejections, 1);
    assert_eq!(stats.longest_chain, 2);
}

#[test]
fn test_evicted_applicant_moves_to_next_preference() {
    let (mut scope, sequence) = scope_for(two_by_two());
    ProposalPhase::new(sequence).run(&mut scope).unwrap();

    let j2 = scope.roster().applicant_by_name("J2").unwrap();
    let current = j2.current().unwrap();
    assert_eq!(scope.roster().slot_name(current.slot()), "B");
    assert_eq!(current.rank(), 1);
    assert_eq!(current.score(), 2);
}

#[test]
fn test_exhausted_applicant_becomes_orphan() {
    let (mut scope, sequence) = scope_for(single_choice());
    ProposalPhase::new(sequence).run(&mut scope).unwrap();

    let j1 = scope.roster().applicant_by_name("J1").unwrap().id();
    assert!(scope.orphans().contains(j1));
    assert_eq!(scope.orphans().len(), 1);
    assert_eq!(scope.roster().open_places(), 1);
    assert_eq!(scope.stats().orphans, 1);
    assert!(!scope.roster().applicant(j1).unwrap().is_assigned());
}

#[test]
fn test_redistribution_places_orphans_with_fallback_rank() {
    let (mut scope, sequence) = scope_for(single_choice());
    ProposalPhase::new(sequence).run(&mut scope).unwrap();

    let order: Vec<_> = scope.roster().slots_by_name().collect();
    let mut phase = RedistributionPhase::new(order);
    assert_eq!(phase.run(&mut scope).unwrap(), 1);

    assert!(scope.orphans().is_empty());
    assert!(scope.roster().is_complete());
    assert_eq!(members(&scope, "B"), vec!["J1"]);

    let j1 = scope.roster().applicant_by_name("J1").unwrap();
    let current = j1.current().unwrap();
    assert_eq!(current.rank(), 1);
    assert_eq!(current.score(), 0);
    assert!(j1.is_fallback());
    assert_eq!(j1.preferences().len(), 1);
    assert_eq!(scope.stats().redistributed, 1);
}

#[test]
fn test_redistribution_rejects_unbalanced_pool() {
    let (mut scope, _) = scope_for(single_choice());
    let order: Vec<_> = scope.roster().slots_by_name().collect();

    let err = RedistributionPhase::new(order).run(&mut scope).unwrap_err();
    assert_eq!(err, MatchError::OrphanMismatch { orphans: 0, open: 2 });
}

#[test]
fn test_phase_type_names() {
    assert_eq!(ProposalPhase::new(Vec::new()).phase_type_name(), "Proposal");
    assert_eq!(
        RedistributionPhase::new(Vec::new()).phase_type_name(),
        "Redistribution"
    );
}
