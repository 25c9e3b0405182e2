use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player: String,
    pub score: u64,
    pub board_size: usize,
    pub date: NaiveDate,
}

/// An append-only log of finished games, one JSON object per line.
pub struct Leaderboard {
    path: PathBuf,
}

impl Leaderboard {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn append(&self, entry: &LeaderboardEntry) -> anyhow::Result<()> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// All entries in the order they were recorded. A missing file is an empty leaderboard.
    pub fn entries(&self) -> anyhow::Result<Vec<LeaderboardEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for (line_idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).with_context(|| {
                format!("Line {} of '{}' is not a leaderboard entry", line_idx + 1, self.path.display())
            })?;
            entries.push(entry);
        }
        Ok(entries)
    }

    /// The best `limit` games on `board_size`, highest score first. Ties go to the earlier game.
    pub fn top(&self, board_size: usize, limit: usize) -> anyhow::Result<Vec<LeaderboardEntry>> {
        let mut entries: Vec<_> = self
            .entries()?
            .into_iter()
            .filter(|entry| entry.board_size == board_size)
            .collect();
        // Stable sort, so equal scores on the same day stay in recorded order
        entries.sort_by(|a, b| b.score.cmp(&a.score).then(a.date.cmp(&b.date)));
        entries.truncate(limit);
        Ok(entries)
    }
}

pub fn format_leaderboard(board_size: usize, entries: &[LeaderboardEntry]) -> String {
    let mut result = format!("Leaderboard for {0}x{0}\n", board_size);
    if entries.is_empty() {
        result += "  No games finished yet\n";
        return result;
    }
    result += &format!(" {:>3}  {:19} {:>6}  {}\n", "#", "Player", "Score", "Date");
    for (rank, entry) in entries.iter().enumerate() {
        result += &format!(
            " {:>3}  {:19} {:>6}  {}\n",
            rank + 1,
            entry.player,
            entry.score,
            entry.date
        );
    }
    result
}
