use flag_core::model::GameResult;

use super::SqliteRepository;
use super::mapping::{
    difficulty_to_str, map_result_row, map_result_row_with_id, regions_to_json,
};
use crate::repository::{GameResultRepository, GameResultRow, StorageError};

fn insert_error(e: sqlx::Error) -> StorageError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
        _ => StorageError::Connection(e.to_string()),
    }
}

#[async_trait::async_trait]
impl GameResultRepository for SqliteRepository {
    async fn append_result(&self, result: &GameResult) -> Result<i64, StorageError> {
        let regions = regions_to_json(result.selected_regions())?;

        let res = sqlx::query(
            r"
                INSERT INTO game_results (
                    session_id, started_at, completed_at, score,
                    total_questions, selected_regions, difficulty
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ",
        )
        .bind(result.session_id().to_string())
        .bind(result.started_at())
        .bind(result.completed_at())
        .bind(i64::from(result.score()))
        .bind(i64::from(result.total_questions()))
        .bind(regions)
        .bind(difficulty_to_str(result.difficulty()))
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(res.last_insert_rowid())
    }

    async fn get_result(&self, id: i64) -> Result<GameResult, StorageError> {
        let row = sqlx::query(
            r"
                SELECT
                    session_id, started_at, completed_at, score,
                    total_questions, selected_regions, difficulty
                FROM game_results
                WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?
        .ok_or(StorageError::NotFound)?;

        map_result_row(&row)
    }

    async fn list_results(&self, limit: u32) -> Result<Vec<GameResultRow>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    id, session_id, started_at, completed_at, score,
                    total_questions, selected_regions, difficulty
                FROM game_results
                ORDER BY completed_at DESC, id DESC
                LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_result_row_with_id(&row)?);
        }

        Ok(out)
    }
}
