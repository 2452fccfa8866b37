use std::sync::Arc;

use dioxus::prelude::*;
use glimpsy_core::model::QuestionSet;
use glimpsy_core::{TimerKind, TimerToken};
use services::{MemoryShareSink, ShareSink};

use crate::context::{UiApp, build_app_context};
use crate::views::{Notice, QuizScreen, QuizView};
use crate::vm::{QuizIntent, QuizVm};

const IMAGE_URL: &str = "https://example.test/glimpse.png";

struct TestApp;

impl UiApp for TestApp {
    fn questions(&self) -> QuestionSet {
        QuestionSet::reference().unwrap()
    }

    fn image_url(&self) -> String {
        IMAGE_URL.to_string()
    }

    fn share_sink(&self) -> Arc<dyn ShareSink> {
        Arc::new(MemoryShareSink::new())
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Clone, Debug, PartialEq)]
enum Step {
    Intent(QuizIntent),
    RevealElapsed,
    ShowAgainElapsed,
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    steps: Vec<Step>,
    notice: Option<Notice>,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let snapshot = use_hook(|| {
        let mut vm = QuizVm::new(QuestionSet::reference().unwrap(), Arc::new(MemoryShareSink::new()));
        for step in props.steps.clone() {
            match step {
                Step::Intent(intent) => vm.dispatch(intent).expect("intent accepted"),
                Step::RevealElapsed => {
                    vm.apply_timer(TimerToken::new(TimerKind::Reveal, vm.generation()));
                }
                Step::ShowAgainElapsed => {
                    vm.apply_timer(TimerToken::new(TimerKind::ShowAgain, vm.generation()));
                }
            }
        }
        vm.snapshot()
    });

    rsx! {
        QuizScreen {
            snapshot,
            image_url: IMAGE_URL.to_string(),
            notice: props.notice,
            on_intent: move |_| {},
            on_share: move |_| {},
        }
    }
}

fn render_steps(steps: Vec<Step>, notice: Option<Notice>) -> String {
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { steps, notice });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn answering() -> Vec<Step> {
    vec![Step::Intent(QuizIntent::Start), Step::RevealElapsed]
}

fn pick(option: &str) -> [Step; 2] {
    [
        Step::Intent(QuizIntent::Select(option.to_string())),
        Step::Intent(QuizIntent::Submit),
    ]
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_intro() {
    let mut dom = VirtualDom::new_with_props(
        AppHarness,
        AppHarnessProps {
            app: Arc::new(TestApp),
        },
    );
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("My Glimpsy"), "missing title in {html}");
    assert!(html.contains("Start Game"), "missing start button in {html}");
    assert!(
        html.contains("See an image for 4 seconds."),
        "missing rules in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn revealing_shows_only_the_image() {
    let html = render_steps(vec![Step::Intent(QuizIntent::Start)], None);

    assert!(html.contains(IMAGE_URL), "missing image in {html}");
    assert!(!html.contains("Submit"), "question visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn answering_renders_question_and_show_again() {
    let html = render_steps(answering(), None);

    assert!(
        html.contains("What type of vehicle is the man getting on?"),
        "missing prompt in {html}"
    );
    assert!(html.contains("Show Image Again (1 time)"), "missing show-again in {html}");
    assert!(html.contains("Current Score: 0"), "missing score in {html}");
    assert!(!html.contains(IMAGE_URL), "image still visible in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submitted_answer_shows_feedback_and_next_value() {
    let mut steps = answering();
    steps.extend(pick("bus"));

    let html = render_steps(steps, None);

    assert!(
        html.contains("Correct! You earned 1 point."),
        "missing feedback in {html}"
    );
    assert!(html.contains("Try 2 point question"), "missing next label in {html}");
    assert!(html.contains("Current Score: 1"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn show_again_covers_question_until_timer_fires() {
    let mut steps = answering();
    steps.push(Step::Intent(QuizIntent::ShowAgain));
    let html = render_steps(steps.clone(), None);
    assert!(html.contains(IMAGE_URL), "missing image in {html}");

    steps.push(Step::ShowAgainElapsed);
    let html = render_steps(steps, None);
    assert!(!html.contains(IMAGE_URL), "image still visible in {html}");
    assert!(
        !html.contains("Show Image Again"),
        "show-again offered twice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn finished_game_renders_recap_and_notice() {
    let mut steps = answering();
    for option in ["bus", "blue", "downtown", "brown", "10:30am"] {
        steps.extend(pick(option));
        steps.push(Step::Intent(QuizIntent::Advance));
    }

    let html = render_steps(steps, Some(Notice::Copied));

    assert!(html.contains("Good effort!"), "missing headline in {html}");
    assert!(
        html.contains("Your final score is 13 out of 15 points."),
        "missing score line in {html}"
    );
    assert!(html.contains("Answer Recap:"), "missing recap in {html}");
    assert!(html.contains("Correct answer: red"), "missing correct answer in {html}");
    assert!(html.contains("Share Your Score"), "missing share button in {html}");
    assert!(
        html.contains("Score copied to clipboard!"),
        "missing notice in {html}"
    );
}
