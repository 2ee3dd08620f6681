//! Top-N retention policy for a user's scores.
//!
//! The ledger never touches storage. Callers hand it a snapshot of the
//! stored entries (in any order) and apply the returned [`Decision`].
//!
//! Timestamps have millisecond resolution, the finest the stores keep, so an
//! inserted entry reads back unchanged. Entries with equal scores recorded in
//! the same millisecond are ordered by id.

use crate::{Decision, ScoreEntry};

use std::cmp::Ordering;

use chrono::{DateTime, SubsecRound, Utc};

pub const DEFAULT_LEDGER_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLedger {
    capacity: usize,
}

impl Default for ScoreLedger {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_CAPACITY)
    }
}

impl ScoreLedger {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Decide whether `candidate` earns a slot, timestamping it with the wall clock.
    pub fn record_if_qualifying(&self, existing: &[ScoreEntry], candidate: i64) -> Decision {
        self.record_if_qualifying_at(existing, candidate, Utc::now().trunc_subsecs(3))
    }

    /// Same as [`Self::record_if_qualifying`] with an explicit `now`.
    ///
    /// A candidate qualifies while fewer than `capacity` entries exist, or when
    /// it is strictly greater than the lowest retained score. Everything that
    /// falls outside the top `capacity` afterwards is evicted; among equal
    /// scores the oldest entry goes first.
    pub fn record_if_qualifying_at(
        &self,
        existing: &[ScoreEntry],
        candidate: i64,
        now: DateTime<Utc>,
    ) -> Decision {
        let mut ranked = Self::ranked(existing);

        let insert = self
            .qualifies(&ranked, candidate)
            .then(|| ScoreEntry::recorded(candidate, now));

        if let Some(entry) = &insert {
            ranked.push(entry);
            ranked.sort_by(|a, b| ranking_order(a, b));
        }

        let evict = ranked
            .iter()
            .skip(self.capacity)
            .map(|entry| entry.id)
            .collect();

        Decision { insert, evict }
    }

    /// The retained entries, best first, at most `capacity` of them.
    pub fn rank(&self, entries: &[ScoreEntry]) -> Vec<ScoreEntry> {
        Self::ranked(entries)
            .into_iter()
            .take(self.capacity)
            .cloned()
            .collect()
    }

    fn qualifies(&self, ranked: &[&ScoreEntry], candidate: i64) -> bool {
        match ranked.get(self.capacity - 1) {
            None => true,
            Some(floor) => candidate > floor.score,
        }
    }

    fn ranked(entries: &[ScoreEntry]) -> Vec<&ScoreEntry> {
        let mut ranked: Vec<&ScoreEntry> = entries.iter().collect();
        ranked.sort_by(|a, b| ranking_order(a, b));
        ranked
    }
}

/// Score descending, then newest first, then id so equal timestamps stay stable.
fn ranking_order(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.recorded_at.cmp(&a.recorded_at))
        .then_with(|| a.id.cmp(&b.id))
}
