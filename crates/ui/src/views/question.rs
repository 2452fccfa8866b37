use dioxus::prelude::*;

use glimpsy_core::Snapshot;

use crate::vm::{QuizIntent, SHOW_AGAIN_LABEL, advance_label, feedback_text};

#[component]
pub fn ImageFrame(image_url: String, alt: String) -> Element {
    rsx! {
        main { class: "quiz glimpse",
            img { class: "glimpse-image", src: "{image_url}", alt: "{alt}" }
        }
    }
}

#[component]
pub fn QuestionPanel(snapshot: Snapshot, on_intent: EventHandler<QuizIntent>) -> Element {
    let Some(question) = snapshot.question.clone() else {
        return rsx! {};
    };
    let selected = snapshot.selected_answer.clone();
    let locked = snapshot.submitted;
    let can_submit = snapshot.can_submit();
    let can_show_again = snapshot.can_show_again();
    let feedback = snapshot.feedback.as_ref().map(feedback_text);
    let next_label = advance_label(question.next_points);

    rsx! {
        main { class: "quiz question",
            p { class: "progress", "Question {question.number} of {question.count} · {question.points} pt" }
            p { class: "prompt", "{question.prompt}" }

            div { class: "options",
                for option in question.options.clone() {
                    label { key: "{option}", class: "option",
                        input {
                            r#type: "radio",
                            name: "answer",
                            value: "{option}",
                            checked: selected.as_deref() == Some(option.as_str()),
                            disabled: locked,
                            onchange: {
                                let option = option.clone();
                                move |_| on_intent.call(QuizIntent::Select(option.clone()))
                            },
                        }
                        " {option}"
                    }
                }
            }

            button {
                r#type: "button",
                id: "submit-answer",
                disabled: !can_submit,
                onclick: move |_| on_intent.call(QuizIntent::Submit),
                "Submit"
            }

            if let Some(text) = feedback {
                p { class: "feedback", "{text}" }
            }

            if locked {
                button {
                    r#type: "button",
                    id: "next-question",
                    onclick: move |_| on_intent.call(QuizIntent::Advance),
                    "{next_label}"
                }
            }

            if can_show_again {
                button {
                    r#type: "button",
                    id: "show-again",
                    class: "secondary",
                    onclick: move |_| on_intent.call(QuizIntent::ShowAgain),
                    "{SHOW_AGAIN_LABEL}"
                }
            }

            p { class: "score", "Current Score: {snapshot.score}" }
        }
    }
}
