//! High score leaderboard system
//!
//! Persisted as a JSON array of `{name, score}` records, tracks top 10 scores.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StorageError};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's name
    pub name: String,
    /// Player's score
    pub score: u64,
}

/// High score leaderboard, best first.
///
/// The same name may appear any number of times. Equal scores keep the
/// order they were recorded in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Storage key for the leaderboard snapshot
    pub const STORAGE_KEY: &'static str = "leaderboard";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a result, re-sort best first and keep the top 10.
    ///
    /// Returns the rank achieved (1-indexed) or None if it fell off the board.
    pub fn record(&mut self, name: impl Into<String>, score: u64) -> Option<usize> {
        // Stable sort places the new entry after every entry it ties with
        let index = self.entries.iter().filter(|e| e.score >= score).count();

        self.entries.push(HighScoreEntry {
            name: name.into(),
            score,
        });
        self.normalize();

        (index < MAX_HIGH_SCORES).then_some(index + 1)
    }

    /// Sort best first (stable) and trim to max size
    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_HIGH_SCORES);
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Parse a stored snapshot. Anything unreadable yields an empty board.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<HighScores>(json) {
            Ok(mut scores) => {
                scores.normalize();
                scores
            }
            Err(e) => {
                log::warn!("Discarding malformed leaderboard: {}", e);
                Self::new()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // A Vec of plain structs always serializes
        serde_json::to_string(self).unwrap_or_else(|_| "[]".to_string())
    }

    /// Load high scores from storage; never fails
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                let scores = Self::from_json(&json);
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            Ok(None) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
            Err(e) => {
                log::warn!("Could not read high scores: {}", e);
                Self::new()
            }
        }
    }

    /// Save high scores, replacing the previous snapshot
    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StorageError> {
        store.set(Self::STORAGE_KEY, &self.to_json())?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    fn pairs(scores: &HighScores) -> Vec<(&str, u64)> {
        scores
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e.score))
            .collect()
    }

    #[test]
    fn test_record_sorts_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record("Amy", 500), Some(1));
        assert_eq!(scores.record("Bo", 900), Some(1));
        assert_eq!(scores.record("Cy", 700), Some(2));

        assert_eq!(pairs(&scores), vec![("Bo", 900), ("Cy", 700), ("Amy", 500)]);
    }

    #[test]
    fn test_eleventh_entry_evicts_lowest() {
        let mut scores = HighScores::new();
        for score in 1..=11 {
            scores.record(format!("P{score}"), score);
        }
        assert_eq!(scores.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(2));
        assert!(scores.entries.iter().all(|e| e.score != 1));
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut scores = HighScores::new();
        scores.record("First", 100);
        scores.record("Second", 100);
        assert_eq!(scores.record("Third", 100), Some(3));
        assert_eq!(
            pairs(&scores),
            vec![("First", 100), ("Second", 100), ("Third", 100)]
        );
    }

    #[test]
    fn test_full_board_tie_with_last_falls_off() {
        let mut scores = HighScores::new();
        for score in 1..=10 {
            scores.record("Same", score * 10);
        }
        assert_eq!(scores.record("Late", 10), None);
        assert_eq!(scores.entries.last().map(|e| e.name.as_str()), Some("Same"));
    }

    #[test]
    fn test_json_shape() {
        let mut scores = HighScores::new();
        scores.record("Amy", 500);
        assert_eq!(scores.to_json(), r#"[{"name":"Amy","score":500}]"#);
    }

    #[test]
    fn test_malformed_snapshot_is_empty() {
        assert!(HighScores::from_json("not json").is_empty());
        assert!(HighScores::from_json(r#"{"name":"Amy"}"#).is_empty());
        assert!(HighScores::from_json(r#"[{"name":"Amy","score":-4}]"#).is_empty());
    }

    #[test]
    fn test_loaded_snapshot_is_normalized() {
        let json = r#"[{"name":"Low","score":1},{"name":"High","score":9}]"#;
        let scores = HighScores::from_json(json);
        assert_eq!(pairs(&scores), vec![("High", 9), ("Low", 1)]);
    }

    #[test]
    fn test_save_and_load() {
        let mut store = MemoryStore::new();
        assert!(HighScores::load(&store).is_empty());

        let mut scores = HighScores::new();
        scores.record("Amy", 500);
        scores.record("Amy", 800);
        scores.save(&mut store).unwrap();

        let loaded = HighScores::load(&store);
        assert_eq!(loaded, scores);
    }

    #[test]
    fn test_load_garbage_from_store() {
        let mut store = MemoryStore::new();
        store.set(HighScores::STORAGE_KEY, "{{{").unwrap();
        assert!(HighScores::load(&store).is_empty());
    }
}
