use flag_core::model::{Difficulty, GameResult, SessionId};
use sqlx::Row;

use crate::repository::{GameResultRow, StorageError};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

fn u32_from_i64(field: &'static str, v: i64) -> Result<u32, StorageError> {
    u32::try_from(v).map_err(|_| StorageError::Serialization(format!("invalid {field}: {v}")))
}

pub(crate) fn regions_to_json(regions: &[String]) -> Result<String, StorageError> {
    serde_json::to_string(regions).map_err(ser)
}

fn regions_from_json(raw: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(raw).map_err(ser)
}

pub(crate) fn difficulty_to_str(difficulty: Option<Difficulty>) -> Option<&'static str> {
    difficulty.map(Difficulty::as_str)
}

fn parse_difficulty(raw: Option<String>) -> Result<Option<Difficulty>, StorageError> {
    raw.map(|s| s.parse::<Difficulty>().map_err(ser)).transpose()
}

pub(crate) fn map_result_row(row: &sqlx::sqlite::SqliteRow) -> Result<GameResult, StorageError> {
    let session_id: SessionId = row
        .try_get::<String, _>("session_id")
        .map_err(ser)?
        .parse()
        .map_err(ser)?;
    let started_at = row.try_get("started_at").map_err(ser)?;
    let completed_at = row.try_get("completed_at").map_err(ser)?;
    let score = u32_from_i64("score", row.try_get::<i64, _>("score").map_err(ser)?)?;
    let total_questions = u32_from_i64(
        "total_questions",
        row.try_get::<i64, _>("total_questions").map_err(ser)?,
    )?;
    let selected_regions =
        regions_from_json(&row.try_get::<String, _>("selected_regions").map_err(ser)?)?;
    let difficulty = parse_difficulty(row.try_get("difficulty").map_err(ser)?)?;

    GameResult::new(
        session_id,
        started_at,
        completed_at,
        score,
        total_questions,
        selected_regions,
        difficulty,
    )
    .map_err(ser)
}

pub(crate) fn map_result_row_with_id(
    row: &sqlx::sqlite::SqliteRow,
) -> Result<GameResultRow, StorageError> {
    let id: i64 = row.try_get("id").map_err(ser)?;
    let result = map_result_row(row)?;
    Ok(GameResultRow::new(id, result))
}
