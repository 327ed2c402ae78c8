mod country;
mod ids;
mod question;
mod result;
mod settings;
mod stats;

pub use ids::{CountryId, ParseIdError, QuestionId, SessionId};

pub use country::{Country, Difficulty, ParseDifficultyError};
pub use question::{GameQuestion, QuestionKind};
pub use result::{GameResult, GameResultError, ScoreTier};
pub use settings::{
    DEFAULT_QUESTIONS_PER_GAME, GameSettings, MAX_QUESTIONS_PER_GAME, OPTIONS_PER_QUESTION,
    QUESTION_COUNT_OPTIONS, SELECTABLE_REGIONS, SettingsError,
};
pub use stats::GameStats;
