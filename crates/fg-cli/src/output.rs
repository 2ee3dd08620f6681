use crate::error::Result as CliResult;

use fg_core::ScoreEntry;

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One line of the high score table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub rank: usize,
    pub score: i64,
    pub recorded_at: DateTime<Utc>,
}

/// Rows for already-ranked entries, rank 1 first
pub fn score_rows(entries: &[ScoreEntry]) -> Vec<ScoreRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| ScoreRow {
            rank: i + 1,
            score: entry.score,
            recorded_at: entry.recorded_at,
        })
        .collect()
}

pub fn write_scores_table<O: Write>(output: &mut O, entries: &[ScoreEntry]) -> CliResult<()> {
    if entries.is_empty() {
        writeln!(output, "No high scores yet. Play a round!")?;
        return Ok(());
    }

    writeln!(output, "High Scores")?;
    writeln!(output, "{:>4}  {:>6}  Recorded", "Rank", "Score")?;
    for row in score_rows(entries) {
        writeln!(
            output,
            "{:>4}  {:>6}  {}",
            row.rank,
            row.score,
            row.recorded_at.format("%Y-%m-%d %H:%M UTC")
        )?;
    }

    Ok(())
}

pub fn write_scores_json<O: Write>(output: &mut O, entries: &[ScoreEntry]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *output, &score_rows(entries))?;
    writeln!(output)?;
    Ok(())
}
