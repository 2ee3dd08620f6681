use crate::tests::{entries, entry_at, t0};
use crate::{DEFAULT_LEDGER_CAPACITY, ScoreLedger};

use chrono::Duration;

// =========================================================================
// Qualification
// =========================================================================

#[test]
fn given_three_entries_below_capacity_when_lower_score_recorded_then_inserted_without_eviction() {
    let ledger = ScoreLedger::default();
    let existing = vec![entry_at(100, 0), entry_at(90, 1), entry_at(80, 2)];
    let now = t0() + Duration::hours(1);

    let decision = ledger.record_if_qualifying_at(&existing, 50, now);

    let inserted = decision.insert.expect("score should qualify");
    assert_eq!(inserted.score, 50);
    assert_eq!(inserted.recorded_at, now);
    assert!(decision.evict.is_empty());
}

#[test]
fn given_empty_collection_when_negative_score_recorded_then_inserted() {
    let ledger = ScoreLedger::default();

    let decision = ledger.record_if_qualifying(&[], -35);

    assert_eq!(decision.insert.map(|e| e.score), Some(-35));
    assert!(decision.evict.is_empty());
}

#[test]
fn given_full_collection_when_score_beats_minimum_then_minimum_evicted() {
    let ledger = ScoreLedger::default();
    let existing = entries(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    let lowest = existing[0].id;

    let decision = ledger.record_if_qualifying_at(&existing, 15, t0() + Duration::hours(1));

    assert_eq!(decision.insert.map(|e| e.score), Some(15));
    assert_eq!(decision.evict, vec![lowest]);
}

#[test]
fn given_full_collection_when_score_ties_minimum_then_nothing_changes() {
    let ledger = ScoreLedger::default();
    let existing = entries(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);

    let decision = ledger.record_if_qualifying(&existing, 10);

    assert!(decision.is_noop());
    assert!(!decision.qualified());
}

#[test]
fn given_full_collection_when_score_below_minimum_then_nothing_changes() {
    let ledger = ScoreLedger::default();
    let existing = entries(&[10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);

    let decision = ledger.record_if_qualifying(&existing, -5);

    assert!(decision.is_noop());
}

#[test]
fn given_unsorted_full_collection_when_recorded_then_true_minimum_evicted() {
    let ledger = ScoreLedger::default();
    let existing = entries(&[70, 100, 40, 10, 90, 20, 60, 80, 30, 50]);
    let lowest = existing[3].id;

    let decision = ledger.record_if_qualifying(&existing, 11);

    assert_eq!(decision.evict, vec![lowest]);
}

// =========================================================================
// Eviction tie-break
// =========================================================================

#[test]
fn given_two_entries_share_minimum_when_new_high_score_then_oldest_evicted() {
    let ledger = ScoreLedger::default();
    let mut existing = entries(&[20, 30, 40, 50, 60, 70, 80, 90]);
    let newer_min = entry_at(10, 30);
    let older_min = entry_at(10, -30);
    existing.push(newer_min.clone());
    existing.push(older_min.clone());

    let decision = ledger.record_if_qualifying_at(&existing, 95, t0() + Duration::hours(2));

    assert_eq!(decision.evict, vec![older_min.id]);
}

#[test]
fn given_equal_timestamps_when_evicting_then_choice_is_deterministic() {
    let ledger = ScoreLedger::new(2);
    let a = entry_at(5, 0);
    let b = entry_at(5, 0);
    let now = t0() + Duration::hours(1);

    let first = ledger.record_if_qualifying_at(&[a.clone(), b.clone()], 9, now);
    let second = ledger.record_if_qualifying_at(&[b, a], 9, now);

    assert_eq!(first.evict, second.evict);
    assert_eq!(first.evict.len(), 1);
}

// =========================================================================
// Over-capacity input
// =========================================================================

#[test]
fn given_collection_over_capacity_when_score_does_not_qualify_then_overflow_trimmed() {
    let ledger = ScoreLedger::default();
    let existing = entries(&[1, 2, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);

    let decision = ledger.record_if_qualifying(&existing, 5);

    assert!(decision.insert.is_none());
    assert_eq!(decision.evict, vec![existing[1].id, existing[0].id]);
}

#[test]
fn given_collection_over_capacity_when_score_qualifies_then_result_fits_capacity() {
    let ledger = ScoreLedger::default();
    let existing = entries(&[1, 2, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);

    let decision = ledger.record_if_qualifying(&existing, 15);

    assert!(decision.qualified());
    assert_eq!(decision.evict.len(), 3);
    assert_eq!(existing.len() + 1 - decision.evict.len(), DEFAULT_LEDGER_CAPACITY);
}

// =========================================================================
// Ranking
// =========================================================================

#[test]
fn given_unsorted_entries_when_ranked_then_best_first_and_capped() {
    let ledger = ScoreLedger::new(3);
    let existing = entries(&[5, 50, 25, 40, 10]);

    let ranked = ledger.rank(&existing);

    let scores: Vec<i64> = ranked.iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![50, 40, 25]);
}

#[test]
fn given_tied_scores_when_ranked_then_newest_first() {
    let ledger = ScoreLedger::default();
    let old = entry_at(30, 0);
    let new = entry_at(30, 10);

    let ranked = ledger.rank(&[old.clone(), new.clone()]);

    assert_eq!(ranked, vec![new, old]);
}

#[test]
fn given_zero_capacity_when_created_then_raised_to_one() {
    assert_eq!(ScoreLedger::new(0).capacity(), 1);
}

#[test]
fn given_wall_clock_when_recording_then_timestamp_has_whole_milliseconds() {
    let decision = ScoreLedger::default().record_if_qualifying(&[], 40);

    let entry = decision.insert.unwrap();
    assert_eq!(entry.recorded_at.timestamp_subsec_nanos() % 1_000_000, 0);
}
