use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use super::SqliteInitError;

/// Schema versions in order. Each entry runs in one transaction.
const MIGRATIONS: &[(i64, &[&str])] = &[(
    1,
    &[
        r"
            CREATE TABLE IF NOT EXISTS game_results (
                id INTEGER PRIMARY KEY,
                session_id TEXT NOT NULL UNIQUE,
                started_at TEXT NOT NULL,
                completed_at TEXT NOT NULL,
                score INTEGER NOT NULL CHECK (score >= 0),
                total_questions INTEGER NOT NULL CHECK (total_questions > 0),
                selected_regions TEXT NOT NULL,
                difficulty TEXT CHECK (difficulty IN ('easy', 'medium', 'hard')),
                CHECK (score <= total_questions)
            );
        ",
        r"
            CREATE INDEX IF NOT EXISTS idx_game_results_completed
                ON game_results (completed_at, id);
        ",
    ],
)];

async fn is_applied(pool: &SqlitePool, version: i64) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM schema_migrations WHERE version = ?1")
        .bind(version)
        .fetch_optional(pool)
        .await?;
    Ok(row.is_some())
}

/// Applies every pending version and records it in `schema_migrations`.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
        ",
    )
    .execute(pool)
    .await?;

    for &(version, statements) in MIGRATIONS {
        if is_applied(pool, version).await? {
            continue;
        }

        let mut tx = pool.begin().await?;
        for statement in statements {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(version)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        info!(version, "applied schema migration");
    }

    Ok(())
}
