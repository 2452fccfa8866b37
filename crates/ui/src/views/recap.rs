use dioxus::prelude::*;

use glimpsy_core::model::Recap;

use crate::vm::{recap_answer_label, score_line};

fn answer_class(is_correct: bool) -> &'static str {
    if is_correct { "answer correct" } else { "answer wrong" }
}

#[component]
pub fn RecapScreen(
    recap: Recap,
    image_url: String,
    on_share: EventHandler<()>,
    on_restart: EventHandler<()>,
) -> Element {
    let headline = recap.headline();
    let summary = score_line(recap.score(), recap.total_points());
    let rows: Vec<_> = recap
        .entries()
        .iter()
        .map(|entry| {
            let answer = recap_answer_label(entry.answer.as_deref()).to_owned();
            (entry.clone(), answer, answer_class(entry.is_correct))
        })
        .collect();

    rsx! {
        main { class: "quiz recap",
            h2 { "{headline}" }
            p { "{summary}" }
            p { "Try again tomorrow for a new challenge!" }

            img { class: "review-image", src: "{image_url}", alt: "Review" }

            h3 { "Answer Recap:" }
            ul { class: "recap-list",
                for (entry, answer, class) in rows {
                    li { key: "{entry.number}",
                        strong { "Q{entry.number}: " }
                        "{entry.prompt}"
                        br {}
                        "Your answer: "
                        span { class, "{answer}" }
                        br {}
                        "Correct answer: {entry.correct_answer}"
                    }
                }
            }

            button {
                r#type: "button",
                id: "share-score",
                class: "primary",
                onclick: move |_| on_share.call(()),
                "Share Your Score"
            }
            button {
                r#type: "button",
                id: "play-again",
                class: "secondary",
                onclick: move |_| on_restart.call(()),
                "Play Again"
            }
        }
    }
}
