#![forbid(unsafe_code)]

pub mod error;
pub mod game;
pub mod questions;
pub mod share;
pub mod timers;

pub use error::{DatasetError, GameError, ShareError};
pub use game::GameService;
pub use questions::{load_question_set, parse_question_set};
pub use share::{MemoryShareSink, ShareSink};
pub use timers::{TimerEvents, TokioScheduler, timer_channel};
