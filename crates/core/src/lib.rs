#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod game;
pub mod model;
pub mod time;

pub use catalog::{Catalog, CatalogError};
pub use error::Error;
pub use game::{AnswerRecord, GameEngine, GamePhase, GameProgress, GameState};
pub use time::Clock;
