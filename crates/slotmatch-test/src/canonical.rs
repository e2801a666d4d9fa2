//! The worked scenario: slots C0, C1, C2 with capacity 4 and applicants
//! J0 to J11.
//!
//! Available both as record text, for parser and end-to-end tests, and as a
//! programmatically built [`Roster`].

use slotmatch_core::{Roster, RosterBuilder, TalentVector};

/// Record text of the worked scenario.
pub const CANONICAL_INPUT: &str = "\
C C0 H:7 E:7 P:10
C C1 H:2 E:1 P:1
C C2 H:7 E:6 P:4

J J0 H:3 E:9 P:2 C2,C0,C1
J J1 H:4 E:3 P:7 C0,C2,C1
J J2 H:4 E:0 P:10 C0,C2,C1
J J3 H:10 E:3 P:8 C2,C0,C1
J J4 H:6 E:10 P:1 C0,C2,C1
J J5 H:6 E:7 P:7 C0,C2,C1
J J6 H:8 E:6 P:9 C2,C1,C0
J J7 H:7 E:1 P:5 C2,C1,C0
J J8 H:8 E:2 P:3 C1,C0,C2
J J9 H:10 E:2 P:1 C1,C2,C0
J J10 H:6 E:4 P:5 C0,C2,C1
J J11 H:8 E:4 P:7 C0,C1,C2
";

/// Expected text output, one line per slot in name order.
pub const CANONICAL_LINES: [&str; 3] = [
    "C0 J5 C0:161 C2:112 C1:26, J11 C0:154 C1:27 C2:108, J2 C0:128 C2:68 C1:18, J4 C0:122 C2:106 C1:23",
    "C1 J9 C1:23 C2:86 C0:94, J8 C1:21 C0:100 C2:80, J7 C2:75 C1:20 C0:106, J1 C0:119 C2:74 C1:18",
    "C2 J6 C2:128 C1:31 C0:188, J3 C2:120 C0:171 C1:31, J10 C0:120 C2:86 C1:21, J0 C2:83 C0:104 C1:17",
];

/// Expected members of each slot, highest edge first.
pub const CANONICAL_MEMBERS: [(&str, [&str; 4]); 3] = [
    ("C0", ["J5", "J11", "J2", "J4"]),
    ("C1", ["J9", "J8", "J7", "J1"]),
    ("C2", ["J6", "J3", "J10", "J0"]),
];

/// Expected sum of member ids per slot.
pub const CANONICAL_MEMBER_SUMS: [(&str, u64); 3] = [("C0", 22), ("C1", 25), ("C2", 19)];

const SLOTS: [(&str, [u32; 3]); 3] = [
    ("C0", [7, 7, 10]),
    ("C1", [2, 1, 1]),
    ("C2", [7, 6, 4]),
];

const APPLICANTS: [(&str, [u32; 3], [&str; 3]); 12] = [
    ("J0", [3, 9, 2], ["C2", "C0", "C1"]),
    ("J1", [4, 3, 7], ["C0", "C2", "C1"]),
    ("J2", [4, 0, 10], ["C0", "C2", "C1"]),
    ("J3", [10, 3, 8], ["C2", "C0", "C1"]),
    ("J4", [6, 10, 1], ["C0", "C2", "C1"]),
    ("J5", [6, 7, 7], ["C0", "C2", "C1"]),
    ("J6", [8, 6, 9], ["C2", "C1", "C0"]),
    ("J7", [7, 1, 5], ["C2", "C1", "C0"]),
    ("J8", [8, 2, 3], ["C1", "C0", "C2"]),
    ("J9", [10, 2, 1], ["C1", "C2", "C0"]),
    ("J10", [6, 4, 5], ["C0", "C2", "C1"]),
    ("J11", [8, 4, 7], ["C0", "C1", "C2"]),
];

/// Builds the worked scenario without going through the parser.
///
/// # Panics
///
/// Never for the fixed data above.
pub fn canonical_roster() -> Roster {
    let mut builder = RosterBuilder::new();
    for (name, [h, e, p]) in SLOTS {
        builder
            .add_slot(name, TalentVector::new(h, e, p))
            .expect("canonical slot");
    }
    for (name, [h, e, p], prefs) in APPLICANTS {
        builder
            .add_applicant(name, TalentVector::new(h, e, p), prefs)
            .expect("canonical applicant");
    }
    builder.build().expect("canonical roster")
}
