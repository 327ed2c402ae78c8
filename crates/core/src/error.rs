use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{GameResultError, SettingsError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    GameResult(#[from] GameResultError),
}
