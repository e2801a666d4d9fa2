//! Generated problems.
//!
//! [`random_roster`] draws talents and preference lists from a seeded
//! ChaCha generator, so a failing seed can be replayed. [`cascade_roster`]
//! builds a deterministic problem whose last proposal sets off a single
//! displacement chain through every slot.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use slotmatch_core::{Roster, RosterBuilder, TalentVector};

/// Highest rating drawn for any talent axis.
pub const MAX_RATING: u32 = 10;

/// Builds a random roster of `slot_count` slots with `capacity` places each.
///
/// Every applicant lists between one and `slot_count` distinct slots in
/// random order, so orphans and redistribution occur regularly.
///
/// # Panics
///
/// Panics if `slot_count` is zero.
pub fn random_roster(seed: u64, slot_count: usize, capacity: usize) -> Roster {
    assert!(slot_count > 0, "random_roster needs at least one slot");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = RosterBuilder::new();

    let slot_names: Vec<String> = (0..slot_count).map(|i| format!("C{i}")).collect();
    for name in &slot_names {
        let talent = random_talent(&mut rng);
        builder
            .add_slot(name.as_str(), talent)
            .expect("generated slot");
    }

    for i in 0..slot_count * capacity {
        let talent = random_talent(&mut rng);
        let mut prefs: Vec<&str> = slot_names.iter().map(String::as_str).collect();
        prefs.shuffle(&mut rng);
        let len = rng.random_range(1..=slot_count);
        prefs.truncate(len);
        builder
            .add_applicant(format!("J{i}"), talent, prefs)
            .expect("generated applicant");
    }

    builder.build().expect("generated roster")
}

fn random_talent(rng: &mut ChaCha8Rng) -> TalentVector {
    TalentVector::new(
        rng.random_range(0..=MAX_RATING),
        rng.random_range(0..=MAX_RATING),
        rng.random_range(0..=MAX_RATING),
    )
}

/// Builds `len` single-place slots and `len` applicants arranged so that
/// the last proposal displaces every other applicant in turn.
///
/// Applicants `A00000..` each hold their own slot after proposing, with the
/// next slot as second choice and descending strength. The final applicant
/// `Z` only wants the first slot and out-scores everyone, which evicts
/// `A00000` into the second slot, which evicts `A00001`, and so on until the
/// last slot, left empty, absorbs the chain.
///
/// # Panics
///
/// Panics if `len` is less than two.
pub fn cascade_roster(len: usize) -> Roster {
    assert!(len >= 2, "cascade_roster needs at least two slots");
    let mut builder = RosterBuilder::new();
    let slot_names: Vec<String> = (0..len).map(|i| format!("S{i:05}")).collect();
    for name in &slot_names {
        builder
            .add_slot(name.as_str(), TalentVector::new(1, 0, 0))
            .expect("cascade slot");
    }

    let strongest = u32::try_from(len).expect("cascade length fits u32");
    for (i, pair) in slot_names.windows(2).enumerate() {
        let strength = strongest - i as u32;
        builder
            .add_applicant(
                format!("A{i:05}"),
                TalentVector::new(strength, 0, 0),
                [pair[0].as_str(), pair[1].as_str()],
            )
            .expect("cascade applicant");
    }
    builder
        .add_applicant("Z", TalentVector::new(strongest + 1, 0, 0), [slot_names[0].as_str()])
        .expect("cascade head");

    builder.build().expect("cascade roster")
}
