use chrono::{DateTime, Utc};
use std::sync::Arc;

use flag_core::model::{Difficulty, GameResult, GameStats, ScoreTier};
use storage::repository::{GameResultRepository, GameResultRow, InMemoryRepository};

use crate::error::GameError;

/// Storage identifier for a persisted game result.
///
/// NOTE: This is `i64` to match `SQLite` row IDs.
pub type GameResultId = i64;

/// Presentation-agnostic list item for a finished game.
///
/// No pre-formatted strings; the front end decides how to render times and
/// percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResultListItem {
    pub id: GameResultId,
    pub completed_at: DateTime<Utc>,

    pub score: u32,
    pub total_questions: u32,
    pub percentage: f64,
    pub tier: ScoreTier,
    pub selected_regions: Vec<String>,
    pub difficulty: Option<Difficulty>,
}

impl GameResultListItem {
    #[must_use]
    pub fn from_result(id: GameResultId, result: &GameResult) -> Self {
        Self {
            id,
            completed_at: result.completed_at(),
            score: result.score(),
            total_questions: result.total_questions(),
            percentage: result.percentage(),
            tier: result.tier(),
            selected_regions: result.selected_regions().to_vec(),
            difficulty: result.difficulty(),
        }
    }

    #[must_use]
    pub fn from_row(row: &GameResultRow) -> Self {
        Self::from_result(row.id, &row.result)
    }
}

/// Read side over saved games: history and aggregate statistics.
#[derive(Clone)]
pub struct StatsService {
    results: Arc<dyn GameResultRepository>,
}

impl StatsService {
    #[must_use]
    pub fn new(results: Arc<dyn GameResultRepository>) -> Self {
        Self { results }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }

    /// Most recent games first.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` on repository failures.
    pub async fn recent_results(&self, limit: u32) -> Result<Vec<GameResultListItem>, GameError> {
        let rows = self.results.list_results(limit).await?;
        Ok(rows.iter().map(GameResultListItem::from_row).collect())
    }

    /// Aggregate statistics over the latest `limit` games.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` on repository failures.
    pub async fn stats(&self, limit: u32) -> Result<GameStats, GameError> {
        let results: Vec<GameResult> = self
            .results
            .list_results(limit)
            .await?
            .into_iter()
            .map(|row| row.result)
            .collect();
        Ok(GameStats::from_results(&results))
    }

    /// Fetch a game result by ID.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Storage` when repository access fails.
    pub async fn get_result(&self, id: GameResultId) -> Result<GameResult, GameError> {
        Ok(self.results.get_result(id).await?)
    }
}
