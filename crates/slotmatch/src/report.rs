//! Assignment output.
//!
//! The text layout has one line per slot in slot-name order:
//!
//! ```text
//! C2 J6 C2:128 C1:31 C0:188, J3 C2:120 C0:171 C1:31, ...
//! ```
//!
//! Members appear from highest to lowest edge order, each followed by its
//! stated preferences as `<slot>:<score>` in rank order. Fallback placements
//! are not preferences and are not listed.

use serde::{Deserialize, Serialize};
use slotmatch_core::{Applicant, Roster, Slot};

/// Renders the full text report, one newline-terminated line per slot.
pub fn render_text(roster: &Roster) -> String {
    let mut out = String::new();
    for line in text_lines(roster) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Report lines in slot-name order.
pub fn text_lines(roster: &Roster) -> Vec<String> {
    roster
        .slots_by_name()
        .filter_map(|id| roster.slot(id))
        .map(|slot| slot_line(roster, slot))
        .collect()
}

/// The report line for a single slot.
pub fn slot_line(roster: &Roster, slot: &Slot) -> String {
    let mut line = slot.name().to_string();
    let mut separator = " ";
    for edge in slot.accepted().rev() {
        let Some(applicant) = roster.applicant(edge.applicant()) else {
            continue;
        };
        line.push_str(separator);
        write_member(&mut line, roster, applicant);
        separator = ", ";
    }
    line
}

fn write_member(out: &mut String, roster: &Roster, applicant: &Applicant) {
    out.push_str(applicant.name());
    for pref in applicant.preferences() {
        out.push_str(&format!(" {}:{}", roster.slot_name(pref.slot()), pref.score()));
    }
}

/// Serializable view of a finished assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentReport {
    pub slots: Vec<SlotReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReport {
    pub name: String,
    pub member_sum: u128,
    /// Highest edge first.
    pub members: Vec<MemberReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberReport {
    pub name: String,
    /// Score of the edge holding the place.
    pub score: u64,
    /// Rank of that edge; one past the stated preferences for fallbacks.
    pub rank: usize,
    pub fallback: bool,
    pub preferences: Vec<PreferenceReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceReport {
    pub slot: String,
    pub score: u64,
}

impl AssignmentReport {
    /// Captures the assignment held in `roster`, slots in name order.
    pub fn from_roster(roster: &Roster) -> Self {
        let slots = roster
            .slots_by_name()
            .filter_map(|id| roster.slot(id))
            .map(|slot| SlotReport {
                name: slot.name().to_string(),
                member_sum: slot.member_sum(),
                members: slot
                    .accepted()
                    .rev()
                    .filter_map(|edge| {
                        let applicant = roster.applicant(edge.applicant())?;
                        Some(MemberReport {
                            name: applicant.name().to_string(),
                            score: edge.score(),
                            rank: edge.rank(),
                            fallback: edge.rank() >= applicant.preferences().len(),
                            preferences: applicant
                                .preferences()
                                .iter()
                                .map(|pref| PreferenceReport {
                                    slot: roster.slot_name(pref.slot()),
                                    score: pref.score(),
                                })
                                .collect(),
                        })
                    })
                    .collect(),
            })
            .collect();
        AssignmentReport { slots }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmatch_core::{RosterBuilder, TalentVector};
    use slotmatch_engine::MatchingEngine;
    use slotmatch_test::{canonical_roster, CANONICAL_LINES};

    fn matched_canonical() -> Roster {
        MatchingEngine::new(canonical_roster())
            .run()
            .unwrap()
            .into_roster()
    }

    #[test]
    fn test_canonical_text_is_byte_exact() {
        let roster = matched_canonical();
        assert_eq!(text_lines(&roster), CANONICAL_LINES);

        let expected = format!("{}\n", CANONICAL_LINES.join("\n"));
        assert_eq!(render_text(&roster), expected);
    }

    #[test]
    fn test_empty_slot_line_is_just_the_name() {
        let mut b = RosterBuilder::new();
        b.add_slot("C0", TalentVector::new(1, 1, 1)).unwrap();
        let roster = b.build().unwrap();
        assert_eq!(render_text(&roster), "C0\n");
    }

    #[test]
    fn test_fallback_member_lists_only_stated_preferences() {
        let mut b = RosterBuilder::new();
        b.add_slot("A", TalentVector::new(1, 0, 0)).unwrap();
        b.add_slot("B", TalentVector::new(0, 1, 0)).unwrap();
        b.add_applicant("J0", TalentVector::new(5, 0, 0), ["A"])
            .unwrap();
        b.add_applicant("J1", TalentVector::new(3, 0, 0), ["A"])
            .unwrap();
        let roster = MatchingEngine::new(b.build().unwrap())
            .run()
            .unwrap()
            .into_roster();

        assert_eq!(text_lines(&roster), vec!["A J0 A:5", "B J1 A:3"]);

        let report = AssignmentReport::from_roster(&roster);
        let member = &report.slots[1].members[0];
        assert_eq!(member.name, "J1");
        assert!(member.fallback);
        assert_eq!(member.rank, 1);
        assert_eq!(member.score, 0);
    }

    #[test]
    fn test_json_shape() {
        let report = AssignmentReport::from_roster(&matched_canonical());
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        let slots = json["slots"].as_array().unwrap();
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[2]["name"], "C2");
        assert_eq!(slots[2]["member_sum"], 19);

        let first = &slots[2]["members"][0];
        assert_eq!(first["name"], "J6");
        assert_eq!(first["score"], 128);
        assert_eq!(first["rank"], 0);
        assert_eq!(first["fallback"], false);
        assert_eq!(first["preferences"][1]["slot"], "C1");
        assert_eq!(first["preferences"][1]["score"], 31);

        let back: AssignmentReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_member_sum_beyond_u64_in_report() {
        let mut b = RosterBuilder::new();
        b.add_slot("C0", TalentVector::new(1, 1, 1)).unwrap();
        b.add_applicant("J18446744073709551615", TalentVector::new(2, 0, 0), ["C0"])
            .unwrap();
        b.add_applicant("J18446744073709551614", TalentVector::new(1, 0, 0), ["C0"])
            .unwrap();
        let roster = MatchingEngine::new(b.build().unwrap())
            .run()
            .unwrap()
            .into_roster();

        let report = AssignmentReport::from_roster(&roster);
        let expected = 2 * u128::from(u64::MAX) - 1;
        assert_eq!(report.slots[0].member_sum, expected);

        let json = report.to_json().unwrap();
        assert!(json.contains(&format!("\"member_sum\": {expected}")));
        let back: AssignmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
