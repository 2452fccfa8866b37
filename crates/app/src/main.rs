use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use glimpsy_core::model::QuestionSet;
use services::{DatasetError, ShareSink, load_question_set};
use ui::{App, ClipboardShareSink, UiApp, build_app_context};

const DEFAULT_IMAGE_URL: &str = "https://i.imgur.com/HSBS4CF.png";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidImageUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidImageUrl { raw } => write!(f, "invalid --image-url value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    questions: QuestionSet,
    image_url: String,
    share_sink: Arc<dyn ShareSink>,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> QuestionSet {
        self.questions.clone()
    }

    fn image_url(&self) -> String {
        self.image_url.clone()
    }

    fn share_sink(&self) -> Arc<dyn ShareSink> {
        Arc::clone(&self.share_sink)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui    [--questions <file.json>] [--image-url <url>]");
    eprintln!("  cargo run -p app -- check [--questions <file.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question set");
    eprintln!("  --image-url {DEFAULT_IMAGE_URL}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  GLIMPSY_QUESTIONS, GLIMPSY_IMAGE_URL, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    questions_path: Option<PathBuf>,
    image_url: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        Self::parse_with_env(args, |key| std::env::var(key).ok())
    }

    fn parse_with_env(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut questions_path = env("GLIMPSY_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut image_url = env("GLIMPSY_IMAGE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    questions_path = Some(PathBuf::from(value));
                }
                "--image-url" => {
                    let value = require_value(args, "--image-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidImageUrl { raw: value });
                    }
                    image_url = value;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            questions_path,
            image_url,
        })
    }

    fn load_questions(&self) -> Result<QuestionSet, DatasetError> {
        match &self.questions_path {
            Some(path) => load_question_set(path),
            None => Ok(QuestionSet::reference()?),
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

fn print_check(questions: &QuestionSet) {
    println!(
        "{} questions, {} points total",
        questions.len(),
        questions.total_points()
    );
    for (idx, question) in questions.iter().enumerate() {
        println!(
            "  Q{} ({} pt): {} [{}]",
            idx + 1,
            question.points(),
            question.prompt(),
            question.correct_answer()
        );
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::parse(&mut argv.into_iter()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let questions = parsed.load_questions()?;

    match cmd {
        Command::Check => {
            print_check(&questions);
            Ok(())
        }
        Command::Ui => {
            tracing::info!(
                questions = questions.len(),
                image_url = %parsed.image_url,
                "launching desktop quiz"
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                questions,
                image_url: parsed.image_url,
                share_sink: Arc::new(ClipboardShareSink),
            });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("My Glimpsy")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
