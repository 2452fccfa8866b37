mod intro;
mod question;
mod quiz;
mod recap;
mod scripts;
mod state;

#[cfg(test)]
mod view_smoke;

pub use intro::IntroScreen;
pub use question::{ImageFrame, QuestionPanel};
pub use quiz::{QuizScreen, QuizView};
pub use recap::RecapScreen;
pub use scripts::ClipboardShareSink;
pub use state::{Notice, ViewError};
