mod app_context;
mod score_ledger;

use crate::ScoreEntry;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed reference instant so ledger tests are deterministic
pub(crate) fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
}

/// Entry recorded `minutes` after [`t0`]
pub(crate) fn entry_at(score: i64, minutes: i64) -> ScoreEntry {
    ScoreEntry::recorded(score, t0() + Duration::minutes(minutes))
}

/// Entries with the given scores, each recorded a minute after the previous one
pub(crate) fn entries(scores: &[i64]) -> Vec<ScoreEntry> {
    scores
        .iter()
        .enumerate()
        .map(|(i, score)| entry_at(*score, i as i64))
        .collect()
}
