//! Matching statistics.
//!
//! Plain counters recorded while the engine runs.

use std::time::{Duration, Instant};

/// Engine-level statistics.
///
/// # Example
///
/// ```
/// use slotmatch_engine::stats::MatchStats;
///
/// let mut stats = MatchStats::default();
/// stats.start();
/// stats.record_proposal();
/// stats.record_admission();
/// stats.record_proposal();
/// stats.record_rejection();
/// stats.record_chain(2);
///
/// assert_eq!(stats.proposals, 2);
/// assert_eq!(stats.admissions, 1);
/// assert_eq!(stats.rejections, 1);
/// assert_eq!(stats.longest_chain, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    start_time: Option<Instant>,
    duration: Option<Duration>,
    /// Edges offered to a slot during the proposal phase.
    pub proposals: u64,
    /// Offers that won a place.
    pub admissions: u64,
    /// Incumbents evicted by a better offer.
    pub displacements: u64,
    /// Offers turned away by a full slot.
    pub rejections: u64,
    /// Applicants that ran out of stated preferences.
    pub orphans: u64,
    /// Orphans placed by the redistribution phase.
    pub redistributed: u64,
    /// Most offers made in a single displacement chain.
    pub longest_chain: u64,
    /// Per-phase breakdown, in execution order.
    pub phases: Vec<PhaseStats>,
}

impl MatchStats {
    /// Marks the start of matching.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.duration = None;
    }

    /// Freezes the elapsed time.
    pub fn finish(&mut self) {
        self.duration = Some(self.elapsed());
    }

    /// Returns the elapsed time, frozen once [`MatchStats::finish`] ran.
    pub fn elapsed(&self) -> Duration {
        self.duration
            .or_else(|| self.start_time.map(|t| t.elapsed()))
            .unwrap_or_default()
    }

    pub fn record_proposal(&mut self) {
        self.proposals += 1;
    }

    pub fn record_admission(&mut self) {
        self.admissions += 1;
    }

    pub fn record_displacement(&mut self) {
        self.displacements += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    pub fn record_orphan(&mut self) {
        self.orphans += 1;
    }

    pub fn record_redistribution(&mut self) {
        self.redistributed += 1;
    }

    /// Records the length of one displacement chain.
    pub fn record_chain(&mut self, length: u64) {
        self.longest_chain = self.longest_chain.max(length);
    }

    pub fn record_phase(&mut self, phase: PhaseStats) {
        self.phases.push(phase);
    }
}

/// Phase-level statistics.
#[derive(Debug, Clone)]
pub struct PhaseStats {
    /// Index of this phase (0-based).
    pub phase_index: usize,
    /// Type name of the phase.
    pub phase_type: &'static str,
    /// Steps taken: proposal chains or placements.
    pub step_count: u64,
    /// Wall time spent in the phase.
    pub duration: Duration,
}

impl PhaseStats {
    pub fn new(phase_index: usize, phase_type: &'static str) -> Self {
        PhaseStats {
            phase_index,
            phase_type,
            step_count: 0,
            duration: Duration::ZERO,
        }
    }
}
