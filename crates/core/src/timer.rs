use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// How long the image stays up after a game starts.
pub const REVEAL_WINDOW: Duration = Duration::from_millis(4000);

/// How long the single "show image again" glimpse lasts.
pub const SHOW_AGAIN_WINDOW: Duration = Duration::from_millis(1000);

/// The two one-shot timers a session can have pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Reveal,
    ShowAgain,
}

impl TimerKind {
    #[must_use]
    pub fn window(self) -> Duration {
        match self {
            TimerKind::Reveal => REVEAL_WINDOW,
            TimerKind::ShowAgain => SHOW_AGAIN_WINDOW,
        }
    }
}

impl fmt::Display for TimerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerKind::Reveal => f.write_str("reveal"),
            TimerKind::ShowAgain => f.write_str("show-again"),
        }
    }
}

/// Handed to the scheduler and returned to the session when the timer fires.
///
/// The generation ties the token to one play-through; tokens from an older
/// generation are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub kind: TimerKind,
    pub generation: u64,
}

impl TimerToken {
    #[must_use]
    pub fn new(kind: TimerKind, generation: u64) -> Self {
        Self { kind, generation }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimerError {
    #[error("no async runtime available to schedule the {0} timer")]
    NoRuntime(TimerKind),

    #[error("timer scheduling failed: {0}")]
    Unavailable(String),
}

/// Host-provided one-shot timers.
///
/// Implementations must deliver a scheduled token once after `delay` unless it
/// is cancelled first, and scheduling a kind that is already pending replaces
/// the pending timer.
pub trait Scheduler {
    /// # Errors
    ///
    /// Returns `TimerError` when the host cannot arm the timer.
    fn schedule(&mut self, token: TimerToken, delay: Duration) -> Result<(), TimerError>;

    fn cancel(&mut self, kind: TimerKind);
}

/// Deterministic scheduler for tests and headless hosts: timers only fire when asked.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pending: Vec<(TimerToken, Duration)>,
    scheduled_total: usize,
    fail_next: Option<TimerError>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `schedule` call fail with `err`.
    pub fn fail_next(&mut self, err: TimerError) {
        self.fail_next = Some(err);
    }

    #[must_use]
    pub fn pending(&self) -> &[(TimerToken, Duration)] {
        &self.pending
    }

    #[must_use]
    pub fn pending_token(&self, kind: TimerKind) -> Option<TimerToken> {
        self.pending
            .iter()
            .find(|(token, _)| token.kind == kind)
            .map(|(token, _)| *token)
    }

    /// Number of successful `schedule` calls so far.
    #[must_use]
    pub fn scheduled_total(&self) -> usize {
        self.scheduled_total
    }

    /// Remove and return the pending timer of `kind`, as if it had elapsed.
    pub fn fire(&mut self, kind: TimerKind) -> Option<TimerToken> {
        let pos = self.pending.iter().position(|(token, _)| token.kind == kind)?;
        Some(self.pending.remove(pos).0)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, token: TimerToken, delay: Duration) -> Result<(), TimerError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.pending.retain(|(pending, _)| pending.kind != token.kind);
        self.pending.push((token, delay));
        self.scheduled_total += 1;
        Ok(())
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.pending.retain(|(pending, _)| pending.kind != kind);
    }
}
