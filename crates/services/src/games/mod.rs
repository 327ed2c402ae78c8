mod stats;
mod workflow;

// Public API of the game subsystem.
pub use crate::error::GameError;
pub use stats::{GameResultId, GameResultListItem, StatsService};
pub use workflow::{GameAnswerResult, GameLoopService, GameSession};
