use std::sync::Arc;

use flag_core::Catalog;
use flag_core::model::{GameSettings, ScoreTier};
use flag_core::time::fixed_now;
use services::{Clock, GameLoopService, StatsService};
use storage::repository::Storage;

#[tokio::test]
async fn game_loop_persists_result_and_feeds_stats() {
    let storage = Storage::in_memory();
    let loop_svc = GameLoopService::new(
        Clock::fixed(fixed_now()),
        Arc::new(Catalog::builtin()),
        Arc::clone(&storage.results),
    )
    .with_seed(Some(2024));

    let settings = GameSettings::new(["Europe", "Asia"], 5).unwrap();
    let mut session = loop_svc.start_game(&settings);

    while !session.is_complete() {
        let index = session
            .engine()
            .current_question()
            .and_then(|q| q.correct_index())
            .unwrap();
        loop_svc.answer_current(&mut session, index).await.unwrap();
        session.engine_mut().next_question();
    }

    let result_id = session.result_id().expect("result persisted");
    let result = storage.results.get_result(result_id).await.unwrap();
    assert_eq!(result.score(), 5);
    assert_eq!(result.tier(), ScoreTier::Expert);
    assert_eq!(result.selected_regions(), ["Europe", "Asia"]);

    let stats = StatsService::new(Arc::clone(&storage.results))
        .stats(50)
        .await
        .unwrap();
    assert_eq!(stats.total_games_played, 1);
    assert_eq!(stats.total_correct_answers, 5);
    assert!((stats.average_score - 100.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn empty_region_selection_still_plays() {
    let storage = Storage::in_memory();
    let loop_svc = GameLoopService::new(
        Clock::fixed(fixed_now()),
        Arc::new(Catalog::builtin()),
        Arc::clone(&storage.results),
    );

    let settings = GameSettings::new(["Antarctica"], 5).unwrap();
    let session = loop_svc.start_game(&settings);

    assert_eq!(session.engine().state().questions().len(), 5);
    assert!(!session.is_complete());
}
