//! Proposal order for the first pass.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use slotmatch_config::ProposalOrder;
use slotmatch_core::{ApplicantId, Roster};

/// Returns every applicant exactly once, in the order they first propose.
///
/// `Shuffled` permutes the declaration order with a ChaCha generator seeded
/// from `seed`, so the same seed always gives the same sequence.
pub fn proposal_sequence(roster: &Roster, order: ProposalOrder, seed: u64) -> Vec<ApplicantId> {
    match order {
        ProposalOrder::Name => roster.applicants_by_name().collect(),
        ProposalOrder::Input => declaration_order(roster),
        ProposalOrder::Shuffled => {
            let mut ids = declaration_order(roster);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            ids.shuffle(&mut rng);
            ids
        }
    }
}

fn declaration_order(roster: &Roster) -> Vec<ApplicantId> {
    roster.applicants().iter().map(|a| a.id()).collect()
}
