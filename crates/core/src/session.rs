use std::fmt;

use crate::error::{Operation, QuizError};
use crate::model::{Question, QuestionSet, Recap};
use crate::share::share_text;
use crate::timer::{Scheduler, TimerKind, TimerToken};

//
// ─── PHASES AND OUTCOMES ───────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Intro,
    /// Image is on screen; questions start when the reveal timer fires.
    Revealing,
    Answering,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Intro => "on the intro screen",
            Phase::Revealing => "revealing the image",
            Phase::Answering => "answering",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Result of locking in an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct { points: u32 },
    Incorrect { correct_answer: String },
}

impl Feedback {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Feedback::Correct { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowAgain {
    Shown,
    AlreadyUsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    Applied,
    /// The token belonged to an earlier game or the phase it targeted has passed.
    Stale,
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Read model of the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub index: usize,
    pub number: usize,
    pub count: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub points: u32,
    pub next_points: Option<u32>,
}

/// Everything the presentation layer needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub phase: Phase,
    pub question: Option<QuestionView>,
    pub selected_answer: Option<String>,
    pub submitted: bool,
    pub feedback: Option<Feedback>,
    pub score: u32,
    pub total_points: u32,
    pub question_count: usize,
    pub used_show_again: bool,
    pub image_visible: bool,
    pub recap: Option<Recap>,
}

impl Snapshot {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Answering && !self.submitted && self.selected_answer.is_some()
    }

    #[must_use]
    pub fn can_show_again(&self) -> bool {
        self.phase == Phase::Answering && !self.used_show_again
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of the quiz.
///
/// All operations are synchronous; a rejected operation leaves the session untouched.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: QuestionSet,
    phase: Phase,
    current: usize,
    selected: Option<String>,
    submitted: bool,
    feedback: Option<Feedback>,
    score: u32,
    used_show_again: bool,
    image_visible: bool,
    answers: Vec<String>,
    generation: u64,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            questions,
            phase: Phase::Intro,
            current: 0,
            selected: None,
            submitted: false,
            feedback: None,
            score: 0,
            used_show_again: false,
            image_visible: false,
            answers: Vec::new(),
            generation: 0,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Revealing | Phase::Answering => self.questions.get(self.current),
            Phase::Intro | Phase::Finished => None,
        }
    }

    fn reject(&self, operation: Operation) -> QuizError {
        tracing::warn!(%operation, phase = %self.phase, "rejected quiz operation");
        QuizError::InvalidTransition {
            operation,
            phase: self.phase,
        }
    }

    /// Begin a fresh game and arm the reveal timer.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Intro`/`Finished`; `Collaborator` if the
    /// reveal timer cannot be scheduled.
    pub fn start(&mut self, timers: &mut dyn Scheduler) -> Result<(), QuizError> {
        if !matches!(self.phase, Phase::Intro | Phase::Finished) {
            return Err(self.reject(Operation::Start));
        }

        let generation = self.generation.wrapping_add(1);
        timers.cancel(TimerKind::ShowAgain);
        let token = TimerToken::new(TimerKind::Reveal, generation);
        if let Err(err) = timers.schedule(token, TimerKind::Reveal.window()) {
            tracing::warn!(error = %err, "could not arm reveal timer");
            return Err(err.into());
        }

        *self = Self {
            generation,
            phase: Phase::Revealing,
            ..Self::new(self.questions.clone())
        };
        tracing::info!(generation, "quiz started");
        Ok(())
    }

    /// Open the single extra glimpse of the image.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Answering`; `Collaborator` if the hide timer
    /// cannot be scheduled.
    pub fn request_show_again(
        &mut self,
        timers: &mut dyn Scheduler,
    ) -> Result<ShowAgain, QuizError> {
        if self.phase != Phase::Answering {
            return Err(self.reject(Operation::ShowAgain));
        }
        if self.used_show_again {
            tracing::debug!("show-again already used");
            return Ok(ShowAgain::AlreadyUsed);
        }

        let token = TimerToken::new(TimerKind::ShowAgain, self.generation);
        timers.schedule(token, TimerKind::ShowAgain.window())?;

        self.used_show_again = true;
        self.image_visible = true;
        tracing::debug!(question = self.current, "showing image again");
        Ok(ShowAgain::Shown)
    }

    /// # Errors
    ///
    /// `InvalidTransition` unless answering an unsubmitted question;
    /// `InvalidSelection` if `option` is not offered by the current question.
    pub fn select_option(&mut self, option: &str) -> Result<(), QuizError> {
        if self.phase != Phase::Answering || self.submitted {
            return Err(self.reject(Operation::SelectOption));
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(self.reject(Operation::SelectOption));
        };
        if !question.has_option(option) {
            tracing::warn!(option, "selection is not an offered option");
            return Err(QuizError::InvalidSelection {
                option: option.to_owned(),
            });
        }

        self.selected = Some(option.to_owned());
        Ok(())
    }

    /// Lock in the selected answer and score it.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless answering an unsubmitted question;
    /// `MissingSelection` when nothing is selected.
    pub fn submit_answer(&mut self) -> Result<Feedback, QuizError> {
        if self.phase != Phase::Answering || self.submitted {
            return Err(self.reject(Operation::SubmitAnswer));
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(self.reject(Operation::SubmitAnswer));
        };
        let Some(selected) = self.selected.clone() else {
            tracing::warn!("submit without a selection");
            return Err(QuizError::MissingSelection);
        };

        let feedback = if question.is_correct(&selected) {
            Feedback::Correct {
                points: question.points(),
            }
        } else {
            Feedback::Incorrect {
                correct_answer: question.correct_answer().to_owned(),
            }
        };
        if let Feedback::Correct { points } = feedback {
            self.score += points;
        }

        self.answers.push(selected);
        self.submitted = true;
        self.feedback = Some(feedback.clone());
        tracing::debug!(
            question = self.current,
            correct = feedback.is_correct(),
            score = self.score,
            "answer submitted"
        );
        Ok(feedback)
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless the current answer has been submitted.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        if self.phase != Phase::Answering || !self.submitted {
            return Err(self.reject(Operation::Advance));
        }

        if self.current >= self.questions.last_index() {
            self.phase = Phase::Finished;
            self.image_visible = false;
            tracing::info!(
                score = self.score,
                total = self.questions.total_points(),
                "quiz finished"
            );
        } else {
            self.current += 1;
            self.selected = None;
            self.submitted = false;
            self.feedback = None;
        }
        Ok(self.phase)
    }

    /// Apply a fired timer. Tokens from another generation or phase are ignored.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> TimerOutcome {
        if token.generation != self.generation {
            tracing::debug!(kind = %token.kind, generation = token.generation, "stale timer ignored");
            return TimerOutcome::Stale;
        }

        match (token.kind, self.phase) {
            (TimerKind::Reveal, Phase::Revealing) => {
                self.phase = Phase::Answering;
                tracing::debug!("reveal window closed");
                TimerOutcome::Applied
            }
            (TimerKind::ShowAgain, Phase::Answering) if self.image_visible => {
                self.image_visible = false;
                tracing::debug!("show-again window closed");
                TimerOutcome::Applied
            }
            _ => {
                tracing::debug!(kind = %token.kind, phase = %self.phase, "timer fired outside its phase");
                TimerOutcome::Stale
            }
        }
    }

    /// # Errors
    ///
    /// `InvalidTransition` unless the game is finished.
    pub fn share_text(&self) -> Result<String, QuizError> {
        if self.phase != Phase::Finished {
            return Err(self.reject(Operation::ShareText));
        }
        Ok(share_text(self.score, self.questions.total_points()))
    }

    #[must_use]
    pub fn recap(&self) -> Option<Recap> {
        (self.phase == Phase::Finished).then(|| Recap::build(&self.questions, &self.answers))
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let question = self.current_question().map(|question| QuestionView {
            index: self.current,
            number: self.current + 1,
            count: self.questions.len(),
            prompt: question.prompt().to_owned(),
            options: question.options().to_vec(),
            points: question.points(),
            next_points: self.questions.next_points(self.current),
        });

        Snapshot {
            phase: self.phase,
            question,
            selected_answer: self.selected.clone(),
            submitted: self.submitted,
            feedback: self.feedback.clone(),
            score: self.score,
            total_points: self.questions.total_points(),
            question_count: self.questions.len(),
            used_show_again: self.used_show_again,
            image_visible: match self.phase {
                Phase::Revealing => true,
                Phase::Answering => self.image_visible,
                Phase::Intro | Phase::Finished => false,
            },
            recap: self.recap(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
