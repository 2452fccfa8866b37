use std::fmt;
use std::sync::Arc;

use glimpsy_core::model::QuestionSet;
use glimpsy_core::{
    Feedback, Phase, QuizSession, ShowAgain, Snapshot, TimerOutcome, TimerToken,
};

use crate::error::GameError;
use crate::share::ShareSink;
use crate::timers::{TimerEvents, TokioScheduler, timer_channel};

/// Owns one `QuizSession` together with its timers and share target.
///
/// Fired timers arrive on the `TimerEvents` returned by `new`; feed them back
/// through `apply_timer`.
pub struct GameService {
    session: QuizSession,
    timers: TokioScheduler,
    share: Arc<dyn ShareSink>,
}

impl GameService {
    #[must_use]
    pub fn new(questions: QuestionSet, share: Arc<dyn ShareSink>) -> (Self, TimerEvents) {
        let (timers, events) = timer_channel();
        let service = Self {
            session: QuizSession::new(questions),
            timers,
            share,
        };
        (service, events)
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn share_sink(&self) -> Arc<dyn ShareSink> {
        Arc::clone(&self.share)
    }

    /// # Errors
    ///
    /// Returns `GameError::Quiz` when the session rejects the restart.
    pub fn start(&mut self) -> Result<(), GameError> {
        Ok(self.session.start(&mut self.timers)?)
    }

    /// # Errors
    ///
    /// Returns `GameError::Quiz` outside the answering phase.
    pub fn show_again(&mut self) -> Result<ShowAgain, GameError> {
        Ok(self.session.request_show_again(&mut self.timers)?)
    }

    /// # Errors
    ///
    /// Returns `GameError::Quiz` for locked or unknown selections.
    pub fn select(&mut self, option: &str) -> Result<(), GameError> {
        Ok(self.session.select_option(option)?)
    }

    /// # Errors
    ///
    /// Returns `GameError::Quiz` when nothing can be submitted.
    pub fn submit(&mut self) -> Result<Feedback, GameError> {
        Ok(self.session.submit_answer()?)
    }

    /// # Errors
    ///
    /// Returns `GameError::Quiz` before the current answer is submitted.
    pub fn advance(&mut self) -> Result<Phase, GameError> {
        Ok(self.session.advance()?)
    }

    pub fn apply_timer(&mut self, token: TimerToken) -> TimerOutcome {
        self.session.timer_elapsed(token)
    }

    /// # Errors
    ///
    /// Returns `GameError::Quiz` unless the game is finished.
    pub fn share_text(&self) -> Result<String, GameError> {
        Ok(self.session.share_text()?)
    }
}

impl fmt::Debug for GameService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameService")
            .field("session", &self.session)
            .field("timers", &self.timers)
            .finish_non_exhaustive()
    }
}
