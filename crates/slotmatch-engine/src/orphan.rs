//! Orphan pool - applicants displaced from every stated preference.

use std::collections::BTreeSet;

use slotmatch_core::ApplicantId;

/// Ordered set of orphaned applicants.
///
/// Orphans are kept in proposal order, so redistribution hands out places
/// deterministically. Keyed by `(position, id)`, which supports removal of a
/// specific orphan as well as popping the first one.
///
/// # Examples
///
/// ```
/// use slotmatch_core::ApplicantId;
/// use slotmatch_engine::OrphanPool;
///
/// // proposal order: 2, 0, 1
/// let mut pool = OrphanPool::new(&[ApplicantId(2), ApplicantId(0), ApplicantId(1)]);
/// pool.insert(ApplicantId(1));
/// pool.insert(ApplicantId(2));
///
/// assert_eq!(pool.pop_first(), Some(ApplicantId(2)));
/// assert_eq!(pool.pop_first(), Some(ApplicantId(1)));
/// assert!(pool.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrphanPool {
    positions: Vec<usize>,
    orphans: BTreeSet<(usize, ApplicantId)>,
}

impl OrphanPool {
    /// Creates an empty pool ordered by `sequence`.
    pub fn new(sequence: &[ApplicantId]) -> Self {
        let len = sequence.iter().map(|id| id.index() + 1).max().unwrap_or(0);
        let mut positions = vec![usize::MAX; len];
        for (position, id) in sequence.iter().enumerate() {
            positions[id.index()] = position;
        }
        OrphanPool {
            positions,
            orphans: BTreeSet::new(),
        }
    }

    fn key(&self, id: ApplicantId) -> (usize, ApplicantId) {
        let position = self.positions.get(id.index()).copied().unwrap_or(usize::MAX);
        (position, id)
    }

    /// Adds an orphan. Returns false if it was already pooled.
    pub fn insert(&mut self, id: ApplicantId) -> bool {
        let key = self.key(id);
        self.orphans.insert(key)
    }

    /// Removes a specific orphan. Returns false if it was not pooled.
    pub fn remove(&mut self, id: ApplicantId) -> bool {
        let key = self.key(id);
        self.orphans.remove(&key)
    }

    pub fn contains(&self, id: ApplicantId) -> bool {
        self.orphans.contains(&self.key(id))
    }

    /// Removes and returns the orphan earliest in proposal order.
    pub fn pop_first(&mut self) -> Option<ApplicantId> {
        self.orphans.pop_first().map(|(_, id)| id)
    }

    pub fn len(&self) -> usize {
        self.orphans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orphans.is_empty()
    }

    /// Pooled orphans in proposal order.
    pub fn iter(&self) -> impl Iterator<Item = ApplicantId> + '_ {
        self.orphans.iter().map(|&(_, id)| id)
    }
}
