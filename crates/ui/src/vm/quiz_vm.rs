use std::sync::Arc;

use glimpsy_core::model::QuestionSet;
use glimpsy_core::timer::{REVEAL_WINDOW, SHOW_AGAIN_WINDOW};
use glimpsy_core::{Feedback, Snapshot, TimerOutcome, TimerToken};
use services::{GameService, ShareSink, TimerEvents};

use crate::views::{Notice, ViewError};

pub const SHOW_AGAIN_LABEL: &str = "Show Image Again (1 time)";
pub const NO_ANSWER_LABEL: &str = "(No answer)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    ShowAgain,
    Select(String),
    Submit,
    Advance,
}

pub struct QuizVm {
    game: GameService,
    timer_events: Option<TimerEvents>,
}

impl QuizVm {
    #[must_use]
    pub fn new(questions: QuestionSet, share: Arc<dyn ShareSink>) -> Self {
        let (game, events) = GameService::new(questions, share);
        Self {
            game,
            timer_events: Some(events),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.game.session().generation()
    }

    /// The timer stream can be taken once, by whoever drives fired timers back in.
    pub fn take_timer_events(&mut self) -> Option<TimerEvents> {
        self.timer_events.take()
    }

    /// # Errors
    ///
    /// Returns the `ViewError` matching the session's rejection.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        let result = match &intent {
            QuizIntent::Start => self.game.start(),
            QuizIntent::ShowAgain => self.game.show_again().map(|_| ()),
            QuizIntent::Select(option) => self.game.select(option),
            QuizIntent::Submit => self.game.submit().map(|_| ()),
            QuizIntent::Advance => self.game.advance().map(|_| ()),
        };

        result.map_err(|err| {
            tracing::warn!(?intent, error = %err, "intent rejected");
            ViewError::from_game(&err)
        })
    }

    pub fn apply_timer(&mut self, token: TimerToken) -> TimerOutcome {
        self.game.apply_timer(token)
    }

    /// Text and sink for a share, split so the caller can await the sink
    /// without holding the view model.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::NotAllowedNow` before the game is finished.
    pub fn share_request(&self) -> Result<(String, Arc<dyn ShareSink>), ViewError> {
        let text = self
            .game
            .share_text()
            .map_err(|err| ViewError::from_game(&err))?;
        Ok((text, self.game.share_sink()))
    }
}

pub async fn share_score(sink: &dyn ShareSink, text: &str) -> Notice {
    match sink.write_text(text).await {
        Ok(()) => {
            tracing::info!("score shared");
            Notice::Copied
        }
        Err(err) => {
            tracing::warn!(error = %err, "clipboard write failed");
            Notice::Error(ViewError::ClipboardUnavailable)
        }
    }
}

#[must_use]
pub fn intro_rules(question_count: usize) -> Vec<String> {
    vec![
        format!("See an image for {} seconds.", REVEAL_WINDOW.as_secs()),
        format!("Answer {question_count} questions about details in the image."),
        "Questions get harder and worth more points.".to_string(),
        format!(
            "You can see the image again only once for {} second during the questions.",
            SHOW_AGAIN_WINDOW.as_secs()
        ),
        "Try to get as many points as possible. Good luck!".to_string(),
    ]
}

#[must_use]
pub fn feedback_text(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Correct { points } => {
            let plural = if *points > 1 { "s" } else { "" };
            format!("Correct! You earned {points} point{plural}.")
        }
        Feedback::Incorrect { correct_answer } => {
            format!("Incorrect. The correct answer is: {correct_answer}.")
        }
    }
}

#[must_use]
pub fn advance_label(next_points: Option<u32>) -> String {
    match next_points {
        Some(points) => format!("Try {points} point question"),
        None => "Finish Game".to_string(),
    }
}

#[must_use]
pub fn score_line(score: u32, total_points: u32) -> String {
    format!("Your final score is {score} out of {total_points} points.")
}

#[must_use]
pub fn recap_answer_label(answer: Option<&str>) -> &str {
    answer.unwrap_or(NO_ANSWER_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimpsy_core::{Phase, TimerKind};
    use services::{MemoryShareSink, ShareError};

    fn vm() -> QuizVm {
        QuizVm::new(QuestionSet::reference().unwrap(), Arc::new(MemoryShareSink::new()))
    }

    fn reveal(vm: &mut QuizVm) {
        let token = TimerToken::new(TimerKind::Reveal, vm.generation());
        assert_eq!(vm.apply_timer(token), TimerOutcome::Applied);
    }

    #[test]
    fn feedback_copy_matches_game_wording() {
        assert_eq!(
            feedback_text(&Feedback::Correct { points: 1 }),
            "Correct! You earned 1 point."
        );
        assert_eq!(
            feedback_text(&Feedback::Correct { points: 4 }),
            "Correct! You earned 4 points."
        );
        assert_eq!(
            feedback_text(&Feedback::Incorrect {
                correct_answer: "red".into()
            }),
            "Incorrect. The correct answer is: red."
        );
    }

    #[test]
    fn advance_label_names_next_question_value() {
        assert_eq!(advance_label(Some(3)), "Try 3 point question");
        assert_eq!(advance_label(None), "Finish Game");
    }

    #[test]
    fn intro_rules_follow_timer_windows() {
        let rules = intro_rules(5);
        assert_eq!(rules[0], "See an image for 4 seconds.");
        assert_eq!(rules[1], "Answer 5 questions about details in the image.");
        assert!(rules[3].contains("only once for 1 second"));
    }

    #[test]
    fn recap_labels_missing_answers() {
        assert_eq!(recap_answer_label(None), "(No answer)");
        assert_eq!(recap_answer_label(Some("bus")), "bus");
        assert_eq!(score_line(3, 15), "Your final score is 3 out of 15 points.");
    }

    #[test]
    fn timer_events_can_be_taken_once() {
        let mut vm = vm();
        assert!(vm.take_timer_events().is_some());
        assert!(vm.take_timer_events().is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn dispatch_maps_rejections() {
        let mut vm = vm();
        assert_eq!(vm.dispatch(QuizIntent::Submit), Err(ViewError::NotAllowedNow));

        vm.dispatch(QuizIntent::Start).unwrap();
        reveal(&mut vm);
        assert_eq!(vm.dispatch(QuizIntent::Submit), Err(ViewError::NoSelection));
        assert_eq!(
            vm.dispatch(QuizIntent::Select("rocket".into())),
            Err(ViewError::UnknownOption)
        );

        vm.dispatch(QuizIntent::Select("bus".into())).unwrap();
        vm.dispatch(QuizIntent::Submit).unwrap();
        let snapshot = vm.snapshot();
        assert_eq!(snapshot.phase, Phase::Answering);
        assert_eq!(snapshot.score, 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn share_request_only_after_finish() {
        let mut vm = vm();
        assert!(matches!(vm.share_request(), Err(ViewError::NotAllowedNow)));

        vm.dispatch(QuizIntent::Start).unwrap();
        reveal(&mut vm);
        for option in ["bus", "red", "downtown", "brown", "10:30am"] {
            vm.dispatch(QuizIntent::Select(option.into())).unwrap();
            vm.dispatch(QuizIntent::Submit).unwrap();
            vm.dispatch(QuizIntent::Advance).unwrap();
        }

        let (text, sink) = vm.share_request().unwrap();
        assert!(text.contains("15 out of 15"));
        assert_eq!(share_score(sink.as_ref(), &text).await, Notice::Copied);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn failing_sink_becomes_notice_and_keeps_session() {
        let sink = MemoryShareSink::failing(ShareError::Rejected("denied".into()));
        let mut vm = QuizVm::new(QuestionSet::reference().unwrap(), Arc::new(sink));
        vm.dispatch(QuizIntent::Start).unwrap();
        reveal(&mut vm);
        for option in ["bus", "blue", "downtown", "brown", "10:30am"] {
            vm.dispatch(QuizIntent::Select(option.into())).unwrap();
            vm.dispatch(QuizIntent::Submit).unwrap();
            vm.dispatch(QuizIntent::Advance).unwrap();
        }
        let before = vm.snapshot();

        let (text, sink) = vm.share_request().unwrap();
        assert_eq!(
            share_score(sink.as_ref(), &text).await,
            Notice::Error(ViewError::ClipboardUnavailable)
        );
        assert_eq!(vm.snapshot(), before);
    }
}
