use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::Catalog;
use crate::model::{
    Country, GameQuestion, GameSettings, OPTIONS_PER_QUESTION, QuestionId, QuestionKind,
};

/// Working set of countries for one session.
///
/// Always holds at least `OPTIONS_PER_QUESTION` distinct countries, so every
/// question can be given three distractors.
#[derive(Debug, Clone)]
pub(crate) struct Pool {
    countries: Vec<Country>,
}

impl Pool {
    /// Returns `None` when `countries` is too small to build a question.
    pub(crate) fn new(countries: Vec<Country>) -> Option<Self> {
        (countries.len() >= OPTIONS_PER_QUESTION).then_some(Self { countries })
    }

    /// Draws `size` countries from the whole catalog. A valid catalog holds at
    /// least `OPTIONS_PER_QUESTION` entries and `size` is never below that.
    fn from_catalog<R: Rng + ?Sized>(catalog: &Catalog, size: usize, rng: &mut R) -> Self {
        let countries = catalog.all_countries(Some(size.max(OPTIONS_PER_QUESTION)), rng);
        debug_assert!(countries.len() >= OPTIONS_PER_QUESTION);
        Self { countries }
    }

    pub(crate) fn countries(&self) -> &[Country] {
        &self.countries
    }
}

/// Outcome of pool selection.
#[derive(Debug, Clone)]
pub(crate) struct PoolSelection {
    pub(crate) pool: Pool,
    pub(crate) fell_back: bool,
}

/// Number of countries drawn for a game: three per question, and never less
/// than one question's worth of options.
pub(crate) fn pool_size(number_of_questions: u32) -> usize {
    usize::try_from(number_of_questions)
        .unwrap_or(usize::MAX)
        .saturating_mul(3)
        .max(OPTIONS_PER_QUESTION)
}

/// Picks the session pool from the catalog according to `settings`.
///
/// Filters apply first (regions, then difficulty). If the filtered set cannot
/// fill a single question, the filters are dropped and the pool is drawn from
/// the whole catalog instead.
pub(crate) fn select_pool<R: Rng + ?Sized>(
    catalog: &Catalog,
    settings: &GameSettings,
    rng: &mut R,
) -> PoolSelection {
    let size = pool_size(settings.number_of_questions());

    let filtered = match (settings.covers_all_regions(), settings.difficulty()) {
        (true, None) => catalog.all_countries(Some(size), rng),
        (false, None) => catalog.countries_by_regions(settings.selected_regions(), Some(size), rng),
        (_, difficulty) => catalog.countries_by_regions_and_difficulty(
            settings.selected_regions(),
            difficulty,
            Some(size),
            rng,
        ),
    };

    match Pool::new(filtered) {
        Some(pool) => PoolSelection {
            pool,
            fell_back: false,
        },
        None => PoolSelection {
            pool: Pool::from_catalog(catalog, size, rng),
            fell_back: true,
        },
    }
}

/// Generates `count` questions from `pool`.
pub(crate) fn generate_questions<R: Rng + ?Sized>(
    pool: &Pool,
    count: u32,
    rng: &mut R,
) -> Vec<GameQuestion> {
    (0..count)
        .map(|index| {
            let kind = if rng.random_bool(0.5) {
                QuestionKind::FlagToCountry
            } else {
                QuestionKind::CountryToFlag
            };
            build_question(pool, QuestionId::new(index), kind, rng)
        })
        .collect()
}

/// One question: a uniformly chosen correct answer, three distractors drawn
/// without replacement from the rest of the pool, options in random order.
fn build_question<R: Rng + ?Sized>(
    pool: &Pool,
    id: QuestionId,
    kind: QuestionKind,
    rng: &mut R,
) -> GameQuestion {
    let countries = pool.countries();
    let correct = &countries[rng.random_range(0..countries.len())];

    let mut others: Vec<&Country> = countries.iter().filter(|c| !c.same_as(correct)).collect();
    let (distractors, _) = others.partial_shuffle(rng, OPTIONS_PER_QUESTION - 1);

    let mut options = Vec::with_capacity(OPTIONS_PER_QUESTION);
    options.push(correct.clone());
    options.extend(distractors.iter().map(|c| (*c).clone()));
    options.shuffle(rng);

    GameQuestion::new(id, kind, correct.clone(), options)
}
