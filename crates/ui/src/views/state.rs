use glimpsy_core::QuizError;
use glimpsy_core::share::SHARE_CONFIRMATION;
use services::GameError;

/// User-facing classification of a rejected intent or failed collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotAllowedNow,
    NoSelection,
    UnknownOption,
    TimerUnavailable,
    ClipboardUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_game(err: &GameError) -> Self {
        match err {
            GameError::Quiz(QuizError::InvalidTransition { .. }) => Self::NotAllowedNow,
            GameError::Quiz(QuizError::MissingSelection) => Self::NoSelection,
            GameError::Quiz(QuizError::InvalidSelection { .. }) => Self::UnknownOption,
            GameError::Quiz(QuizError::Collaborator(_)) => Self::TimerUnavailable,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotAllowedNow => "That isn't possible right now.",
            Self::NoSelection => "Pick an answer first.",
            Self::UnknownOption => "That isn't one of the options.",
            Self::TimerUnavailable => "The game timer could not be started. Please try again.",
            Self::ClipboardUnavailable => "Could not copy your score to the clipboard.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// One-line message shown under the current screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    Copied,
    Error(ViewError),
}

impl Notice {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Notice::Copied => SHARE_CONFIRMATION,
            Notice::Error(err) => err.message(),
        }
    }
}
