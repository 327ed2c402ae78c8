//! Quiz session engine: pool selection, question generation and the
//! idle → in-progress → completed state machine.

mod engine;
mod generator;
mod progress;
mod state;

pub use engine::{AnswerRecord, GameEngine, GamePhase};
pub use progress::GameProgress;
pub use state::GameState;
