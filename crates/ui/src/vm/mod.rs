mod quiz_vm;

pub use quiz_vm::{
    NO_ANSWER_LABEL, QuizIntent, QuizVm, SHOW_AGAIN_LABEL, advance_label, feedback_text,
    intro_rules, recap_answer_label, score_line, share_score,
};
