//! Game-facing slice of the finance ledger
//!
//! Tracks the persisted high score, the lifetime badge counter (one per
//! finished run) and the "Financial Focus" achievement.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::SPECIAL_TITLE_THRESHOLD;
use crate::error::LedgerError;

/// Title of the achievement unlocked by lifetime badges
pub const SPECIAL_TITLE: &str = "Financial Focus";

/// Persisted game record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub high_score: u32,
    /// Incremented by exactly one per finished run, regardless of score
    pub lifetime_badge_count: u32,
    pub has_special_title: bool,
}

/// An unlockable achievement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub unlocked: bool,
    /// Unix timestamp (ms) when unlocked
    pub unlocked_at: Option<f64>,
}

impl Achievement {
    fn locked(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            unlocked: false,
            unlocked_at: None,
        }
    }
}

/// Result of recording one finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordOutcome {
    pub new_high_score: bool,
    /// Achievement unlocked by this run
    pub unlocked: Option<String>,
}

/// Collaborator that receives final scores
pub trait ScoreLedger {
    /// Fold a finished run into the persisted record
    fn record_game_score(&mut self, final_score: u32) -> Result<RecordOutcome, LedgerError>;

    /// Current persisted record
    fn game_score(&self) -> GameScore;
}

/// Ledger contents shared by the in-memory and file-backed stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerData {
    pub score: GameScore,
    pub achievements: Vec<Achievement>,
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            score: GameScore::default(),
            achievements: vec![Achievement::locked(
                SPECIAL_TITLE,
                "Earn 10 badges in the mini-game",
            )],
        }
    }
}

impl LedgerData {
    fn record(&mut self, final_score: u32) -> RecordOutcome {
        let mut outcome = RecordOutcome::default();

        if final_score > self.score.high_score {
            self.score.high_score = final_score;
            outcome.new_high_score = true;
        }
        self.score.lifetime_badge_count += 1;

        if self.score.lifetime_badge_count >= SPECIAL_TITLE_THRESHOLD
            && !self.score.has_special_title
        {
            self.score.has_special_title = true;
            if self.unlock_achievement(SPECIAL_TITLE) {
                log::info!("Achievement unlocked: {}", SPECIAL_TITLE);
            }
            outcome.unlocked = Some(SPECIAL_TITLE.to_string());
        }

        outcome
    }

    /// Unlock by title. Returns false if missing or already unlocked.
    fn unlock_achievement(&mut self, title: &str) -> bool {
        match self
            .achievements
            .iter_mut()
            .find(|a| a.title == title && !a.unlocked)
        {
            Some(achievement) => {
                achievement.unlocked = true;
                achievement.unlocked_at = Some(now_ms());
                true
            }
            None => false,
        }
    }

    pub fn achievement(&self, title: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.title == title)
    }
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Ledger that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    pub data: LedgerData,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreLedger for MemoryLedger {
    fn record_game_score(&mut self, final_score: u32) -> Result<RecordOutcome, LedgerError> {
        Ok(self.data.record(final_score))
    }

    fn game_score(&self) -> GameScore {
        self.data.score
    }
}

/// Ledger persisted as JSON, rewritten after every recorded run
#[derive(Debug, Clone)]
pub struct JsonLedger {
    path: PathBuf,
    data: LedgerData,
}

impl JsonLedger {
    /// Open the ledger at `path`, starting fresh if the file doesn't exist
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read_to_string(&path) {
            Ok(json) => {
                let data: LedgerData = serde_json::from_str(&json)?;
                log::info!(
                    "Loaded ledger: high score {}, {} badges",
                    data.score.high_score,
                    data.score.lifetime_badge_count
                );
                data
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No ledger found at {}, starting fresh", path.display());
                LedgerData::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    pub fn data(&self) -> &LedgerData {
        &self.data
    }

    /// Write the ledger to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.path, json)?;
        log::info!("Ledger saved to {}", self.path.display());
        Ok(())
    }

    /// Restore defaults and persist them
    pub fn reset(&mut self) -> Result<(), LedgerError> {
        self.data = LedgerData::default();
        self.save()
    }
}

impl ScoreLedger for JsonLedger {
    fn record_game_score(&mut self, final_score: u32) -> Result<RecordOutcome, LedgerError> {
        let outcome = self.data.record(final_score);
        self.save()?;
        Ok(outcome)
    }

    fn game_score(&self) -> GameScore {
        self.data.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_high_score_is_max() {
        let mut ledger = MemoryLedger::new();
        assert!(ledger.record_game_score(12).unwrap().new_high_score);
        assert!(!ledger.record_game_score(5).unwrap().new_high_score);
        assert_eq!(ledger.game_score().high_score, 12);
    }

    #[test]
    fn test_badges_count_runs_not_points() {
        let mut ledger = MemoryLedger::new();
        ledger.record_game_score(95).unwrap();
        ledger.record_game_score(0).unwrap();
        assert_eq!(ledger.game_score().lifetime_badge_count, 2);
    }

    #[test]
    fn test_special_title_unlocks_once() {
        let mut ledger = MemoryLedger::new();
        for _ in 0..9 {
            assert_eq!(ledger.record_game_score(1).unwrap().unlocked, None);
        }
        let outcome = ledger.record_game_score(1).unwrap();
        assert_eq!(outcome.unlocked.as_deref(), Some(SPECIAL_TITLE));
        assert!(ledger.data.achievement(SPECIAL_TITLE).unwrap().unlocked);

        assert_eq!(ledger.record_game_score(1).unwrap().unlocked, None);
    }

    #[test]
    fn test_json_ledger_persists_across_open() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ledger.json");

        let mut ledger = JsonLedger::open(&path).unwrap();
        ledger.record_game_score(7).unwrap();
        drop(ledger);

        let reopened = JsonLedger::open(&path).unwrap();
        assert_eq!(reopened.game_score().high_score, 7);
        assert_eq!(reopened.game_score().lifetime_badge_count, 1);
    }

    #[test]
    fn test_json_ledger_reset() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ledger.json");

        let mut ledger = JsonLedger::open(&path).unwrap();
        ledger.record_game_score(3).unwrap();
        ledger.reset().unwrap();
        assert_eq!(ledger.game_score(), GameScore::default());

        let reopened = JsonLedger::open(&path).unwrap();
        assert_eq!(reopened.game_score(), GameScore::default());
    }

    #[test]
    fn test_corrupt_ledger_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("ledger.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonLedger::open(&path), Err(LedgerError::Serde(_))));
    }
}
