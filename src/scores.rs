//! High-score store - bounded, ascending list persisted as JSON
//!
//! Loaded once at startup and rewritten after every victory. A missing or
//! unreadable file means an empty list; persistence failures are surfaced to
//! the caller, never to the game core.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreFile {
    scores: Vec<u32>,
}

/// Top scores, kept sorted ascending and capped at `max_records`.
#[derive(Debug, Clone)]
pub struct HighScores {
    path: PathBuf,
    max_records: usize,
    scores: Vec<u32>,
}

impl HighScores {
    /// Read the score file, tolerating its absence.
    pub fn load(path: &Path, max_records: usize) -> Self {
        let mut scores = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<ScoreFile>(&text) {
                Ok(file) => file.scores,
                Err(err) => {
                    warn!("ignoring malformed score file {}: {err}", path.display());
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        scores.sort_unstable();
        if scores.len() > max_records {
            let excess = scores.len() - max_records;
            scores.drain(..excess);
        }

        Self {
            path: path.to_path_buf(),
            max_records,
            scores,
        }
    }

    /// Record a victory score and rewrite the file.
    ///
    /// Keeps the list ascending; when full, the lowest score is dropped.
    pub fn record(&mut self, score: u32) -> Result<()> {
        self.scores.push(score);
        self.scores.sort_unstable();
        if self.scores.len() > self.max_records {
            self.scores.remove(0);
        }
        self.save()
    }

    /// Scores in ascending order.
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Best score, when any game has been won.
    pub fn best(&self) -> Option<u32> {
        self.scores.last().copied()
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    fn save(&self) -> Result<()> {
        let file = ScoreFile {
            scores: self.scores.clone(),
        };
        let text = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write score file {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("tui-locks-{}-{}.json", name, std::process::id()));
        path
    }

    #[test]
    fn test_missing_file_is_empty() {
        let scores = HighScores::load(Path::new("/nonexistent/scores.json"), 10);
        assert!(scores.scores().is_empty());
        assert_eq!(scores.best(), None);
    }

    #[test]
    fn test_record_keeps_ascending_order_and_cap() {
        let path = temp_path("record");
        let _ = fs::remove_file(&path);

        let mut scores = HighScores::load(&path, 3);
        for s in [50, 200, 100, 400] {
            scores.record(s).unwrap();
        }
        // Cap of 3: the lowest score (50) is gone.
        assert_eq!(scores.scores(), &[100, 200, 400]);
        assert_eq!(scores.best(), Some(400));

        // Round-trips through the file.
        let reloaded = HighScores::load(&path, 3);
        assert_eq!(reloaded.scores(), &[100, 200, 400]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_ignored() {
        let path = temp_path("malformed");
        fs::write(&path, "not json").unwrap();

        let scores = HighScores::load(&path, 10);
        assert!(scores.scores().is_empty());

        let _ = fs::remove_file(&path);
    }
}
