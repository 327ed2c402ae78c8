#![forbid(unsafe_code)]

pub mod error;
pub mod games;

pub use flag_core::Clock;

pub use error::GameError;

pub use games::{
    GameAnswerResult, GameLoopService, GameResultId, GameResultListItem, GameSession,
    StatsService,
};
