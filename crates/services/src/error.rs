//! Shared error types for the services crate.

use thiserror::Error;

use flag_core::model::GameResultError;
use storage::repository::StorageError;

/// Errors emitted by game services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error("no question is waiting for an answer")]
    NoActiveQuestion,
    #[error("game is not completed")]
    NotCompleted,
    #[error(transparent)]
    Result(#[from] GameResultError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
