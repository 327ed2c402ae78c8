use std::sync::Arc;

use flag_core::model::GameSettings;
use flag_core::{AnswerRecord, Catalog, GameEngine};
use storage::repository::GameResultRepository;
use tracing::info;

use super::stats::GameResultId;
use crate::Clock;
use crate::error::GameError;

/// A running game together with the storage id of its result, once saved.
#[derive(Debug)]
pub struct GameSession {
    engine: GameEngine,
    result_id: Option<GameResultId>,
}

impl GameSession {
    #[must_use]
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Mutable engine access for navigation (`next_question`).
    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    #[must_use]
    pub fn result_id(&self) -> Option<GameResultId> {
        self.result_id
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.engine.state().game_completed()
    }
}

/// Result of answering a single question in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameAnswerResult {
    pub record: AnswerRecord,
    pub is_complete: bool,
    pub result_id: Option<GameResultId>,
}

/// Orchestrates game start and persisted answering.
#[derive(Clone)]
pub struct GameLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    results: Arc<dyn GameResultRepository>,
    seed: Option<u64>,
}

impl GameLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<Catalog>,
        results: Arc<dyn GameResultRepository>,
    ) -> Self {
        Self {
            clock,
            catalog,
            results,
            seed: None,
        }
    }

    /// Seed every engine built by this service, for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a new game with the given settings.
    #[must_use]
    pub fn start_game(&self, settings: &GameSettings) -> GameSession {
        let mut engine = GameEngine::new(Arc::clone(&self.catalog)).with_clock(self.clock);
        if let Some(seed) = self.seed {
            engine = engine.with_seed(seed);
        }
        engine.start(settings);
        GameSession {
            engine,
            result_id: None,
        }
    }

    /// Throw away the current game and begin another on the same engine.
    pub fn restart_game(&self, session: &mut GameSession, settings: &GameSettings) {
        session.engine.restart(settings);
        session.result_id = None;
    }

    /// Answer the current question with the option at `option_index` and
    /// persist the game result when that answer completes the game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoActiveQuestion` if the current question was
    /// already answered or the index is out of range, and
    /// `GameError::Storage` if the result cannot be saved. The answer itself
    /// stays recorded in the latter case; use `finalize_result` to retry.
    pub async fn answer_current(
        &self,
        session: &mut GameSession,
        option_index: usize,
    ) -> Result<GameAnswerResult, GameError> {
        let record = session
            .engine
            .answer_option(option_index)
            .ok_or(GameError::NoActiveQuestion)?;

        if record.game_completed && session.result_id.is_none() {
            self.persist(session).await?;
        }

        Ok(GameAnswerResult {
            record,
            is_complete: session.is_complete(),
            result_id: session.result_id,
        })
    }

    /// Retry result persistence after a completed game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotCompleted` if the game is still running.
    /// Returns `GameError::Storage` if persistence fails.
    pub async fn finalize_result(&self, session: &mut GameSession) -> Result<GameResultId, GameError> {
        if let Some(id) = session.result_id {
            return Ok(id);
        }
        if !session.is_complete() {
            return Err(GameError::NotCompleted);
        }
        self.persist(session).await
    }

    async fn persist(&self, session: &mut GameSession) -> Result<GameResultId, GameError> {
        let result = session.engine.result()?;
        let id = self.results.append_result(&result).await?;
        info!(
            result_id = id,
            session_id = %result.session_id(),
            score = result.score(),
            total = result.total_questions(),
            "game result saved"
        );
        session.result_id = Some(id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use flag_core::model::GameResult;
    use flag_core::time::fixed_clock;
    use std::sync::atomic::{AtomicBool, Ordering};
    use storage::repository::{GameResultRow, InMemoryRepository, StorageError};

    fn service(results: Arc<dyn GameResultRepository>) -> GameLoopService {
        GameLoopService::new(fixed_clock(), Arc::new(Catalog::builtin()), results)
            .with_seed(Some(7))
    }

    fn correct_index(session: &GameSession) -> usize {
        session
            .engine()
            .current_question()
            .and_then(|q| q.correct_index())
            .unwrap()
    }

    /// Fails the first append, then delegates to memory.
    struct FlakyRepository {
        failed: AtomicBool,
        inner: InMemoryRepository,
    }

    #[async_trait]
    impl GameResultRepository for FlakyRepository {
        async fn append_result(&self, result: &GameResult) -> Result<i64, StorageError> {
            if !self.failed.swap(true, Ordering::SeqCst) {
                return Err(StorageError::Connection("disk unavailable".into()));
            }
            self.inner.append_result(result).await
        }

        async fn get_result(&self, id: i64) -> Result<GameResult, StorageError> {
            self.inner.get_result(id).await
        }

        async fn list_results(&self, limit: u32) -> Result<Vec<GameResultRow>, StorageError> {
            self.inner.list_results(limit).await
        }
    }

    #[tokio::test]
    async fn completing_a_game_saves_result_once() {
        let repo = InMemoryRepository::new();
        let svc = service(Arc::new(repo.clone()));
        let settings = GameSettings::all_regions(3).unwrap();
        let mut session = svc.start_game(&settings);

        for _ in 0..2 {
            let index = correct_index(&session);
            let outcome = svc.answer_current(&mut session, index).await.unwrap();
            assert!(outcome.record.is_correct);
            assert!(!outcome.is_complete);
            assert_eq!(outcome.result_id, None);
            session.engine_mut().next_question();
        }

        let index = correct_index(&session);
        let outcome = svc.answer_current(&mut session, index).await.unwrap();
        assert!(outcome.is_complete);
        let id = outcome.result_id.expect("result saved");

        let stored = repo.get_result(id).await.unwrap();
        assert_eq!(stored.score(), 3);
        assert_eq!(stored.total_questions(), 3);
        assert_eq!(repo.list_results(10).await.unwrap().len(), 1);

        assert_eq!(svc.finalize_result(&mut session).await.unwrap(), id);
        assert_eq!(repo.list_results(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn answering_twice_is_rejected() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        let mut session = svc.start_game(&GameSettings::all_regions(2).unwrap());

        svc.answer_current(&mut session, 0).await.unwrap();
        assert!(matches!(
            svc.answer_current(&mut session, 1).await,
            Err(GameError::NoActiveQuestion)
        ));
        assert!(matches!(
            svc.answer_current(&mut session, 9).await,
            Err(GameError::NoActiveQuestion)
        ));
    }

    #[tokio::test]
    async fn finalize_requires_completed_game() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        let mut session = svc.start_game(&GameSettings::all_regions(2).unwrap());
        assert!(matches!(
            svc.finalize_result(&mut session).await,
            Err(GameError::NotCompleted)
        ));
    }

    #[tokio::test]
    async fn finalize_retries_failed_save() {
        let flaky = Arc::new(FlakyRepository {
            failed: AtomicBool::new(false),
            inner: InMemoryRepository::new(),
        });
        let svc = service(flaky.clone());
        let mut session = svc.start_game(&GameSettings::all_regions(1).unwrap());

        assert!(matches!(
            svc.answer_current(&mut session, 0).await,
            Err(GameError::Storage(_))
        ));
        assert!(session.is_complete());
        assert_eq!(session.result_id(), None);

        let id = svc.finalize_result(&mut session).await.unwrap();
        assert_eq!(session.result_id(), Some(id));
        assert_eq!(flaky.inner.list_results(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn restart_clears_saved_result() {
        let svc = service(Arc::new(InMemoryRepository::new()));
        let settings = GameSettings::all_regions(1).unwrap();
        let mut session = svc.start_game(&settings);
        svc.answer_current(&mut session, 0).await.unwrap();
        assert!(session.result_id().is_some());

        svc.restart_game(&mut session, &settings);
        assert_eq!(session.result_id(), None);
        assert!(!session.is_complete());
        assert_eq!(session.engine().state().questions().len(), 1);
    }
}
