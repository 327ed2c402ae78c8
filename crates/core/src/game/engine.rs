use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::model::{
    Country, CountryId, GameQuestion, GameResult, GameResultError, GameSettings, QuestionId,
    SessionId,
};
use crate::time::Clock;

use super::generator::{generate_questions, select_pool};
use super::progress::GameProgress;
use super::state::GameState;

//
// ─── PHASE & ANSWER RECORD ─────────────────────────────────────────────────────
//

/// Lifecycle position of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Idle,
    InProgress,
    Completed,
}

/// What a registered answer did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_id: QuestionId,
    pub selected: CountryId,
    pub correct_answer: CountryId,
    pub is_correct: bool,
    pub game_completed: bool,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// State machine for one quiz game at a time.
///
/// `start` moves from idle to in-progress, answering the last question moves
/// to completed, `reset` goes back to idle. No operation fails: repeated
/// answers and stepping past the end are ignored, and a region selection too
/// small to build questions falls back to the full catalog.
pub struct GameEngine {
    catalog: Arc<Catalog>,
    clock: Clock,
    rng: StdRng,
    state: GameState,
}

impl GameEngine {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            clock: Clock::default_clock(),
            rng: StdRng::from_os_rng(),
            state: GameState::idle(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Makes question generation reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.state.game_completed {
            GamePhase::Completed
        } else if self.state.game_started {
            GamePhase::InProgress
        } else {
            GamePhase::Idle
        }
    }

    /// Begin a new game, replacing whatever state the engine held.
    pub fn start(&mut self, settings: &GameSettings) {
        let selection = select_pool(&self.catalog, settings, &mut self.rng);
        if selection.fell_back {
            warn!(
                regions = ?settings.selected_regions(),
                difficulty = ?settings.difficulty(),
                "selection too small for a question, using the full catalog"
            );
        }

        let questions = generate_questions(
            &selection.pool,
            settings.number_of_questions(),
            &mut self.rng,
        );
        let session_id = SessionId::generate();

        debug!(
            %session_id,
            questions = questions.len(),
            pool = selection.pool.countries().len(),
            "game started"
        );

        self.state = GameState {
            session_id: Some(session_id),
            current_question_index: 0,
            questions,
            score: 0,
            total_questions: settings.number_of_questions(),
            game_started: true,
            game_completed: false,
            time_started: Some(self.clock.now()),
            time_completed: None,
            selected_regions: settings.selected_regions().to_vec(),
            difficulty: settings.difficulty(),
        };
    }

    /// Answer the current question.
    ///
    /// Returns `None` and leaves the state untouched when there is no current
    /// question or it has already been answered.
    pub fn answer(&mut self, selected: &Country) -> Option<AnswerRecord> {
        let index = self.state.current_question_index;
        let is_last = index == self.state.last_index();
        let question = self.state.questions.get_mut(index)?;
        let is_correct = question.record_answer(selected)?;

        let question_id = question.id();
        let correct_answer = question.correct_answer().id.clone();

        if is_correct {
            self.state.score += 1;
        }
        if is_last {
            self.state.game_completed = true;
            self.state.time_completed = Some(self.clock.now());
        }

        debug!(
            question = %question_id,
            is_correct,
            score = self.state.score,
            completed = self.state.game_completed,
            "answer recorded"
        );

        Some(AnswerRecord {
            question_id,
            selected: selected.id.clone(),
            correct_answer,
            is_correct,
            game_completed: self.state.game_completed,
        })
    }

    /// Answer with the current question's option at `index`.
    ///
    /// Returns `None` for an out-of-range index, in addition to the cases
    /// ignored by [`GameEngine::answer`].
    pub fn answer_option(&mut self, index: usize) -> Option<AnswerRecord> {
        let selected = self.current_question()?.options().get(index)?.clone();
        self.answer(&selected)
    }

    /// Move to the following question. Stays on the last question.
    pub fn next_question(&mut self) {
        let last = self.state.last_index();
        self.state.current_question_index = (self.state.current_question_index + 1).min(last);
    }

    /// Discard the current game.
    pub fn reset(&mut self) {
        self.state = GameState::idle();
    }

    /// Discard the current game and immediately start a new one.
    pub fn restart(&mut self, settings: &GameSettings) {
        self.reset();
        self.start(settings);
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&GameQuestion> {
        self.state.questions.get(self.state.current_question_index)
    }

    /// Position through the game as a fraction in `(0, 1]`; `0.0` when idle.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.state.total_questions == 0 {
            return 0.0;
        }
        let position = u32::try_from(self.state.current_question_index + 1).unwrap_or(u32::MAX);
        f64::from(position) / f64::from(self.state.total_questions)
    }

    #[must_use]
    pub fn progress_summary(&self) -> GameProgress {
        let total = self.state.questions.len();
        let answered = self.state.answered_count();
        GameProgress {
            total,
            answered,
            remaining: total - answered,
            is_complete: self.state.game_completed,
        }
    }

    /// Score as a percentage of all questions; `0.0` when there are none.
    #[must_use]
    pub fn score_percentage(&self) -> f64 {
        if self.state.total_questions == 0 {
            0.0
        } else {
            f64::from(self.state.score) / f64::from(self.state.total_questions) * 100.0
        }
    }

    /// Summary of the finished game.
    ///
    /// # Errors
    ///
    /// Returns `GameResultError::NotCompleted` before the last question has
    /// been answered, or a validation error if the timestamps are inconsistent.
    pub fn result(&self) -> Result<GameResult, GameResultError> {
        let (Some(session_id), Some(started_at), Some(completed_at)) = (
            self.state.session_id,
            self.state.time_started,
            self.state.time_completed,
        ) else {
            return Err(GameResultError::NotCompleted);
        };
        if !self.state.game_completed {
            return Err(GameResultError::NotCompleted);
        }

        GameResult::new(
            session_id,
            started_at,
            completed_at,
            self.state.score,
            self.state.total_questions,
            self.state.selected_regions.clone(),
            self.state.difficulty,
        )
    }
}

impl fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("catalog_len", &self.catalog.len())
            .field("clock", &self.clock)
            .field("session_id", &self.state.session_id)
            .field("current", &self.state.current_question_index)
            .field("questions_len", &self.state.questions.len())
            .field("score", &self.state.score)
            .field("completed", &self.state.game_completed)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
