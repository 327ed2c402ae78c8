use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::country::Country;
use crate::model::ids::QuestionId;
use crate::model::settings::OPTIONS_PER_QUESTION;

/// Direction of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Show a flag, pick the country name.
    FlagToCountry,
    /// Show a country name, pick the flag.
    CountryToFlag,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::FlagToCountry => f.write_str("flag-to-country"),
            QuestionKind::CountryToFlag => f.write_str("country-to-flag"),
        }
    }
}

/// One multiple-choice question of a session.
///
/// Options always hold `OPTIONS_PER_QUESTION` countries, distinct by id, with
/// the correct answer among them exactly once. The answer fields are written
/// once and then frozen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameQuestion {
    id: QuestionId,
    kind: QuestionKind,
    correct_answer: Country,
    options: Vec<Country>,
    answered: bool,
    selected_answer: Option<Country>,
    is_correct: Option<bool>,
}

impl GameQuestion {
    /// Built only by the question generator, which draws distinct options.
    pub(crate) fn new(
        id: QuestionId,
        kind: QuestionKind,
        correct_answer: Country,
        options: Vec<Country>,
    ) -> Self {
        debug_assert_eq!(options.len(), OPTIONS_PER_QUESTION);
        debug_assert_eq!(
            options.iter().filter(|c| c.same_as(&correct_answer)).count(),
            1
        );
        Self {
            id,
            kind,
            correct_answer,
            options,
            answered: false,
            selected_answer: None,
            is_correct: None,
        }
    }

    /// Records the player's choice. Returns whether it was correct, or `None`
    /// if the question had already been answered.
    pub(crate) fn record_answer(&mut self, selected: &Country) -> Option<bool> {
        if self.answered {
            return None;
        }
        let is_correct = selected.same_as(&self.correct_answer);
        self.answered = true;
        self.selected_answer = Some(selected.clone());
        self.is_correct = Some(is_correct);
        Some(is_correct)
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn correct_answer(&self) -> &Country {
        &self.correct_answer
    }

    #[must_use]
    pub fn options(&self) -> &[Country] {
        &self.options
    }

    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&Country> {
        self.selected_answer.as_ref()
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    /// Index of the correct answer within `options`.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|c| c.same_as(&self.correct_answer))
    }
}
