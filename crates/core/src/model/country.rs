use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::CountryId;

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// How well-known a country's flag is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {raw}")]
pub struct ParseDifficultyError {
    raw: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError { raw: s.to_owned() }),
        }
    }
}

//
// ─── COUNTRY ───────────────────────────────────────────────────────────────────
//

/// A catalog entry. Immutable once the catalog is built.
///
/// `flag` is an opaque artwork reference (an asset path) resolved by whatever
/// renders flags; nothing in this crate interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub name: String,
    pub flag: String,
    pub region: String,
    pub difficulty: Difficulty,
}

impl Country {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        flag: impl Into<String>,
        region: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: CountryId::new(id),
            name: name.into(),
            flag: flag.into(),
            region: region.into(),
            difficulty,
        }
    }

    /// Default artwork reference for a country code.
    #[must_use]
    pub fn flag_path(id: &str) -> String {
        format!("flags/{id}.svg")
    }

    /// True if `other` is the same catalog entry (compared by id).
    #[must_use]
    pub fn same_as(&self, other: &Country) -> bool {
        self.id == other.id
    }
}
