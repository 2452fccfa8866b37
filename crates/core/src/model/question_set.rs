use thiserror::Error;

use crate::model::question::{Question, QuestionDraft, QuestionError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question set is empty")]
    Empty,

    #[error("question {index} is invalid: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question {index} is worth {points} points, not more than the previous {previous}")]
    PointsNotIncreasing {
        index: usize,
        previous: u32,
        points: u32,
    },

    #[error("question {index} pushes the total points past the u32 limit")]
    PointsOverflow { index: usize },
}

/// Ordered, validated questions for one game.
///
/// Points strictly increase from one question to the next, so "the next
/// question is worth N points" always holds. The total fits in a `u32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Validate drafts in order and build the set.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Empty` for an empty list,
    /// `QuestionSetError::Question` when a single draft is invalid,
    /// `QuestionSetError::PointsNotIncreasing` when the point ladder is broken and
    /// `QuestionSetError::PointsOverflow` when the total does not fit in a `u32`.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = QuestionDraft>,
    ) -> Result<Self, QuestionSetError> {
        let mut questions: Vec<Question> = Vec::new();
        let mut total: u32 = 0;

        for (index, draft) in drafts.into_iter().enumerate() {
            let question = draft
                .validate()
                .map_err(|source| QuestionSetError::Question { index, source })?;

            if let Some(previous) = questions.last() {
                if question.points() <= previous.points() {
                    return Err(QuestionSetError::PointsNotIncreasing {
                        index,
                        previous: previous.points(),
                        points: question.points(),
                    });
                }
            }

            total = total
                .checked_add(question.points())
                .ok_or(QuestionSetError::PointsOverflow { index })?;
            questions.push(question);
        }

        if questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }

        Ok(Self { questions })
    }

    /// The built-in dataset shipped with the game, validated like any other.
    ///
    /// # Errors
    ///
    /// Same as `from_drafts`.
    pub fn reference() -> Result<Self, QuestionSetError> {
        Self::from_drafts(reference_drafts())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    /// Sum of every question's points; the best possible score.
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(Question::points).sum()
    }

    /// Points of the question after `index`, if there is one.
    #[must_use]
    pub fn next_points(&self, index: usize) -> Option<u32> {
        self.questions.get(index + 1).map(Question::points)
    }
}

/// Drafts behind `QuestionSet::reference`.
#[must_use]
pub fn reference_drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft::new(
            "What type of vehicle is the man getting on?",
            ["bus", "car", "bike", "train"],
            "bus",
            1,
        ),
        QuestionDraft::new("What color is the bus?", ["blue", "red", "green", "yellow"], "red", 2),
        QuestionDraft::new(
            "Where is the bus headed?",
            ["downtown", "airport", "suburbs", "station"],
            "downtown",
            3,
        ),
        QuestionDraft::new(
            "What color is the man's jacket?",
            ["black", "blue", "brown", "gray"],
            "brown",
            4,
        ),
        QuestionDraft::new(
            "What time of day is it?",
            ["10:30am", "10:30pm", "4:30pm", "2:30pm"],
            "10:30am",
            5,
        ),
    ]
}
