use std::collections::BTreeMap;

use crate::model::result::GameResult;

/// Aggregate over a player's finished games.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameStats {
    pub total_games_played: u32,
    pub total_correct_answers: u32,
    pub total_questions: u32,
    /// Mean score percentage over all games; 0 when no games were played.
    pub average_score: f64,
    /// Highest score percentage of any game.
    pub best_score: f64,
    /// Region selected most often. Ties go to the alphabetically first name.
    pub favorite_region: Option<String>,
}

impl GameStats {
    #[must_use]
    pub fn from_results(results: &[GameResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let mut stats = Self::default();
        let mut percentage_sum = 0.0_f64;
        let mut region_counts: BTreeMap<&str, u32> = BTreeMap::new();

        for result in results {
            stats.total_games_played = stats.total_games_played.saturating_add(1);
            stats.total_correct_answers = stats.total_correct_answers.saturating_add(result.score());
            stats.total_questions = stats.total_questions.saturating_add(result.total_questions());

            let percentage = result.percentage();
            percentage_sum += percentage;
            stats.best_score = stats.best_score.max(percentage);

            for region in result.selected_regions() {
                *region_counts.entry(region.as_str()).or_insert(0) += 1;
            }
        }

        stats.average_score = percentage_sum / f64::from(stats.total_games_played);

        // BTreeMap iterates alphabetically; keep the first maximum.
        let mut favorite: Option<(&str, u32)> = None;
        for (region, count) in region_counts {
            if favorite.is_none_or(|(_, best)| count > best) {
                favorite = Some((region, count));
            }
        }
        stats.favorite_region = favorite.map(|(region, _)| region.to_owned());

        stats
    }

    /// Share of all questions answered correctly, in percent.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            f64::from(self.total_correct_answers) / f64::from(self.total_questions) * 100.0
        }
    }
}
