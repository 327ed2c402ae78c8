use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::country::Difficulty;
use crate::model::ids::SessionId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameResultError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("a finished game must have at least one question")]
    NoQuestions,

    #[error("score ({score}) exceeds total questions ({total})")]
    ScoreOutOfRange { score: u32, total: u32 },

    #[error("game has not been completed")]
    NotCompleted,
}

//
// ─── SCORE TIER ────────────────────────────────────────────────────────────────
//

/// Coarse rating of a finished game, used for the closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreTier {
    Expert,
    Great,
    Good,
    NiceTry,
}

impl ScoreTier {
    /// Tier for a percentage in `[0, 100]`.
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            ScoreTier::Expert
        } else if percentage >= 70.0 {
            ScoreTier::Great
        } else if percentage >= 50.0 {
            ScoreTier::Good
        } else {
            ScoreTier::NiceTry
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Expert => "Amazing! You're a flag expert!",
            ScoreTier::Great => "Great job! You know your flags!",
            ScoreTier::Good => "Good work! Keep practicing!",
            ScoreTier::NiceTry => "Nice try! You'll do better next time!",
        }
    }
}

//
// ─── GAME RESULT ───────────────────────────────────────────────────────────────
//

/// Outcome of one completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    session_id: SessionId,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    score: u32,
    total_questions: u32,
    selected_regions: Vec<String>,
    difficulty: Option<Difficulty>,
}

impl GameResult {
    /// Build (or rehydrate) a result, checking it is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `GameResultError` if the time range is inverted, the game had no
    /// questions, or the score exceeds the question count.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        session_id: SessionId,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        score: u32,
        total_questions: u32,
        selected_regions: Vec<String>,
        difficulty: Option<Difficulty>,
    ) -> Result<Self, GameResultError> {
        if completed_at < started_at {
            return Err(GameResultError::InvalidTimeRange);
        }
        if total_questions == 0 {
            return Err(GameResultError::NoQuestions);
        }
        if score > total_questions {
            return Err(GameResultError::ScoreOutOfRange {
                score,
                total: total_questions,
            });
        }

        Ok(Self {
            session_id,
            started_at,
            completed_at,
            score,
            total_questions,
            selected_regions,
            difficulty,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn selected_regions(&self) -> &[String] {
        &self.selected_regions
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / f64::from(self.total_questions) * 100.0
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage())
    }
}
