use thiserror::Error;

use crate::model::country::Difficulty;

/// Question count used when the player does not pick one.
pub const DEFAULT_QUESTIONS_PER_GAME: u32 = 20;

/// Every question offers the correct answer plus three distractors.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Upper bound on questions in one game.
pub const MAX_QUESTIONS_PER_GAME: u32 = 100;

/// Question counts offered by the settings screen.
pub const QUESTION_COUNT_OPTIONS: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// Regions offered for selection. Not every entry has catalog countries
/// (Antarctica has none), so a selection may legitimately come up empty.
pub const SELECTABLE_REGIONS: [&str; 9] = [
    "North America",
    "South America",
    "Central America",
    "Caribbean",
    "Europe",
    "Asia",
    "Africa",
    "Oceania",
    "Antarctica",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("number of questions must be > 0")]
    NoQuestions,
    #[error("number of questions must be at most {max}, got {requested}")]
    TooManyQuestions { requested: u32, max: u32 },
}

/// Caller-supplied configuration for one game.
///
/// An empty region selection means "all regions". `difficulty: None` keeps
/// every difficulty level in the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    selected_regions: Vec<String>,
    number_of_questions: u32,
    difficulty: Option<Difficulty>,
}

impl GameSettings {
    /// Creates settings for a game over the given regions.
    ///
    /// Region names are trimmed; blanks and duplicates are dropped while
    /// keeping the first-seen order.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `number_of_questions` is zero or above
    /// `MAX_QUESTIONS_PER_GAME`.
    pub fn new<I, S>(regions: I, number_of_questions: u32) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if number_of_questions == 0 {
            return Err(SettingsError::NoQuestions);
        }
        if number_of_questions > MAX_QUESTIONS_PER_GAME {
            return Err(SettingsError::TooManyQuestions {
                requested: number_of_questions,
                max: MAX_QUESTIONS_PER_GAME,
            });
        }

        let mut selected_regions: Vec<String> = Vec::new();
        for region in regions {
            let region = region.into().trim().to_owned();
            if region.is_empty() || selected_regions.contains(&region) {
                continue;
            }
            selected_regions.push(region);
        }

        Ok(Self {
            selected_regions,
            number_of_questions,
            difficulty: None,
        })
    }

    /// Settings covering every region.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `number_of_questions` is zero or above
    /// `MAX_QUESTIONS_PER_GAME`.
    pub fn all_regions(number_of_questions: u32) -> Result<Self, SettingsError> {
        Self::new(Vec::<String>::new(), number_of_questions)
    }

    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub fn selected_regions(&self) -> &[String] {
        &self.selected_regions
    }

    #[must_use]
    pub fn number_of_questions(&self) -> u32 {
        self.number_of_questions
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    /// True when no region filter applies.
    #[must_use]
    pub fn covers_all_regions(&self) -> bool {
        self.selected_regions.is_empty()
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            selected_regions: Vec::new(),
            number_of_questions: DEFAULT_QUESTIONS_PER_GAME,
            difficulty: None,
        }
    }
}
