use chrono::{DateTime, Utc};

use crate::model::{Difficulty, GameQuestion, SessionId};

/// Snapshot of one game, owned and mutated only by `GameEngine`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    pub(crate) session_id: Option<SessionId>,
    pub(crate) current_question_index: usize,
    pub(crate) questions: Vec<GameQuestion>,
    pub(crate) score: u32,
    pub(crate) total_questions: u32,
    pub(crate) game_started: bool,
    pub(crate) game_completed: bool,
    pub(crate) time_started: Option<DateTime<Utc>>,
    pub(crate) time_completed: Option<DateTime<Utc>>,
    pub(crate) selected_regions: Vec<String>,
    pub(crate) difficulty: Option<Difficulty>,
}

impl GameState {
    /// The state before any game has been started.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    #[must_use]
    pub fn questions(&self) -> &[GameQuestion] {
        &self.questions
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
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    #[must_use]
    pub fn game_completed(&self) -> bool {
        self.game_completed
    }

    #[must_use]
    pub fn time_started(&self) -> Option<DateTime<Utc>> {
        self.time_started
    }

    #[must_use]
    pub fn time_completed(&self) -> Option<DateTime<Utc>> {
        self.time_completed
    }

    #[must_use]
    pub fn selected_regions(&self) -> &[String] {
        &self.selected_regions
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.answered()).count()
    }

    pub(crate) fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}
