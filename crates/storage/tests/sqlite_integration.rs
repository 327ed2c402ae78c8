use chrono::Duration;
use flag_core::model::{Difficulty, GameResult, SessionId};
use flag_core::time::fixed_now;
use storage::repository::{GameResultRepository, Storage, StorageError};
use storage::sqlite::SqliteRepository;

fn build_result(score: u32, minutes_later: i64, difficulty: Option<Difficulty>) -> GameResult {
    GameResult::new(
        SessionId::generate(),
        fixed_now(),
        fixed_now() + Duration::minutes(minutes_later),
        score,
        10,
        vec!["Europe".into(), "Asia".into()],
        difficulty,
    )
    .unwrap()
}

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_preserves_result_fields() {
    let repo = connect("memdb_results_roundtrip").await;

    let result = build_result(8, 4, Some(Difficulty::Medium));
    let id = repo.append_result(&result).await.unwrap();
    let fetched = repo.get_result(id).await.unwrap();

    assert_eq!(fetched, result);
    assert_eq!(fetched.selected_regions(), ["Europe", "Asia"]);
    assert_eq!(fetched.difficulty(), Some(Difficulty::Medium));
    assert_eq!(fetched.duration(), Duration::minutes(4));
}

#[tokio::test]
async fn sqlite_missing_result_is_not_found() {
    let repo = connect("memdb_results_missing").await;
    assert!(matches!(
        repo.get_result(42).await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn sqlite_rejects_duplicate_session() {
    let repo = connect("memdb_results_duplicate").await;

    let result = build_result(5, 1, None);
    repo.append_result(&result).await.unwrap();
    assert!(matches!(
        repo.append_result(&result).await,
        Err(StorageError::Conflict)
    ));
}

#[tokio::test]
async fn sqlite_lists_newest_first() {
    let repo = connect("memdb_results_listing").await;

    repo.append_result(&build_result(1, 1, None)).await.unwrap();
    repo.append_result(&build_result(2, 5, None)).await.unwrap();
    repo.append_result(&build_result(3, 3, Some(Difficulty::Easy)))
        .await
        .unwrap();

    let rows = repo.list_results(10).await.unwrap();
    let scores: Vec<_> = rows.iter().map(|r| r.result.score()).collect();
    assert_eq!(scores, [2, 3, 1]);

    let limited = repo.list_results(1).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].result.score(), 2);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = connect("memdb_results_migrate_twice").await;
    repo.migrate().await.expect("second migrate");

    let id = repo
        .append_result(&build_result(9, 2, None))
        .await
        .unwrap();
    assert!(id > 0);
}

#[tokio::test]
async fn storage_facade_uses_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_results_facade?mode=memory&cache=shared")
        .await
        .expect("storage");

    let result = build_result(10, 7, Some(Difficulty::Hard));
    let id = storage.results.append_result(&result).await.unwrap();
    assert_eq!(storage.results.get_result(id).await.unwrap(), result);
}
