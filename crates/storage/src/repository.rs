use async_trait::async_trait;
use flag_core::model::GameResult;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A stored result together with its storage id.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResultRow {
    pub id: i64,
    pub result: GameResult,
}

impl GameResultRow {
    #[must_use]
    pub fn new(id: i64, result: GameResult) -> Self {
        Self { id, result }
    }
}

/// Repository contract for finished games.
#[async_trait]
pub trait GameResultRepository: Send + Sync {
    /// Append a finished game and return its storage id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the session was already stored, or
    /// other storage errors.
    async fn append_result(&self, result: &GameResult) -> Result<i64, StorageError>;

    /// Fetch one result by storage id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_result(&self, id: i64) -> Result<GameResult, StorageError>;

    /// Most recently completed results first, at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on adapter failures.
    async fn list_results(&self, limit: u32) -> Result<Vec<GameResultRow>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    results: Arc<Mutex<Vec<GameResultRow>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl GameResultRepository for InMemoryRepository {
    async fn append_result(&self, result: &GameResult) -> Result<i64, StorageError> {
        let mut guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        if guard
            .iter()
            .any(|row| row.result.session_id() == result.session_id())
        {
            return Err(StorageError::Conflict);
        }
        let id = i64::try_from(guard.len())
            .map_err(|_| StorageError::Serialization("result id overflow".into()))?
            + 1;
        guard.push(GameResultRow::new(id, result.clone()));
        Ok(id)
    }

    async fn get_result(&self, id: i64) -> Result<GameResult, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .find(|row| row.id == id)
            .map(|row| row.result.clone())
            .ok_or(StorageError::NotFound)
    }

    async fn list_results(&self, limit: u32) -> Result<Vec<GameResultRow>, StorageError> {
        let guard = self
            .results
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut rows = guard.clone();
        rows.sort_by(|a, b| {
            b.result
                .completed_at()
                .cmp(&a.result.completed_at())
                .then(b.id.cmp(&a.id))
        });
        rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(rows)
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub results: Arc<dyn GameResultRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let results: Arc<dyn GameResultRepository> = Arc::new(InMemoryRepository::new());
        Self { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use flag_core::model::SessionId;
    use flag_core::time::fixed_now;

    fn build_result(score: u32, minutes_later: i64) -> GameResult {
        GameResult::new(
            SessionId::generate(),
            fixed_now(),
            fixed_now() + Duration::minutes(minutes_later),
            score,
            10,
            vec!["Europe".into()],
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn appends_and_fetches_results() {
        let repo = InMemoryRepository::new();
        let result = build_result(7, 1);

        let id = repo.append_result(&result).await.unwrap();
        let fetched = repo.get_result(id).await.unwrap();
        assert_eq!(fetched, result);

        assert!(matches!(
            repo.get_result(id + 1).await,
            Err(StorageError::NotFound)
        ));
    }

    #[tokio::test]
    async fn duplicate_session_conflicts() {
        let repo = InMemoryRepository::new();
        let result = build_result(7, 1);
        repo.append_result(&result).await.unwrap();
        assert!(matches!(
            repo.append_result(&result).await,
            Err(StorageError::Conflict)
        ));
    }

    #[tokio::test]
    async fn lists_newest_first_with_limit() {
        let repo = InMemoryRepository::new();
        repo.append_result(&build_result(1, 1)).await.unwrap();
        repo.append_result(&build_result(2, 3)).await.unwrap();
        repo.append_result(&build_result(3, 2)).await.unwrap();

        let rows = repo.list_results(2).await.unwrap();
        let scores: Vec<_> = rows.iter().map(|r| r.result.score()).collect();
        assert_eq!(scores, [2, 3]);
    }
}
