use std::fmt;

use thiserror::Error;

use crate::session::Phase;
use crate::timer::TimerError;

/// Intents a `QuizSession` accepts, named for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Start,
    ShowAgain,
    SelectOption,
    SubmitAnswer,
    Advance,
    ShareText,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Start => "start",
            Operation::ShowAgain => "show again",
            Operation::SelectOption => "select option",
            Operation::SubmitAnswer => "submit answer",
            Operation::Advance => "advance",
            Operation::ShareText => "share",
        };
        f.write_str(name)
    }
}

/// Rejections from `QuizSession`. None of them change session state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("cannot {operation} while {phase}")]
    InvalidTransition { operation: Operation, phase: Phase },

    #[error("{option:?} is not an option for the current question")]
    InvalidSelection { option: String },

    #[error("no answer selected")]
    MissingSelection,

    #[error(transparent)]
    Collaborator(#[from] TimerError),
}
