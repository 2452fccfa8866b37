use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question as it arrives from a dataset file or literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    pub points: u32,
}

impl QuestionDraft {
    pub fn new(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
            points,
        }
    }

    /// Check the draft in isolation. Ordering rules across questions live in `QuestionSet`.
    ///
    /// # Errors
    ///
    /// Returns a `QuestionError` describing the first rule the draft breaks.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if self.options.len() != OPTION_COUNT {
            return Err(QuestionError::OptionCount {
                expected: OPTION_COUNT,
                actual: self.options.len(),
            });
        }

        for (idx, option) in self.options.iter().enumerate() {
            if option.trim().is_empty() {
                return Err(QuestionError::EmptyOption { index: idx });
            }
            if self.options[..idx].contains(option) {
                return Err(QuestionError::DuplicateOption {
                    option: option.clone(),
                });
            }
        }

        if !self.options.contains(&self.answer) {
            return Err(QuestionError::AnswerNotAnOption { answer: self.answer });
        }

        if self.points == 0 {
            return Err(QuestionError::ZeroPoints);
        }

        Ok(Question {
            prompt: prompt.to_owned(),
            options: self.options,
            correct_answer: self.answer,
            points: self.points,
        })
    }
}

/// A validated multiple-choice question about the glimpsed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    points: u32,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt is empty")]
    EmptyPrompt,

    #[error("expected {expected} options, found {actual}")]
    OptionCount { expected: usize, actual: usize },

    #[error("option {index} is empty")]
    EmptyOption { index: usize },

    #[error("option {option:?} appears more than once")]
    DuplicateOption { option: String },

    #[error("answer {answer:?} is not one of the options")]
    AnswerNotAnOption { answer: String },

    #[error("question must be worth at least one point")]
    ZeroPoints,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
