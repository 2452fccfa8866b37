mod question;
mod question_set;
mod recap;

pub use question::{OPTION_COUNT, Question, QuestionDraft, QuestionError};
pub use question_set::{QuestionSet, QuestionSetError, reference_drafts};
pub use recap::{Recap, RecapEntry};
