#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod share;
pub mod timer;

pub use error::{Operation, QuizError};
pub use session::{
    Feedback, Phase, QuestionView, QuizSession, ShowAgain, Snapshot, TimerOutcome,
};
pub use timer::{ManualScheduler, Scheduler, TimerError, TimerKind, TimerToken};
