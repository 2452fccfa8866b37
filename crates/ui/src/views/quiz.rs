use dioxus::prelude::*;

use glimpsy_core::{Phase, Snapshot, TimerOutcome};

use crate::context::AppContext;
use crate::views::{ImageFrame, IntroScreen, Notice, QuestionPanel, RecapScreen};
use crate::vm::{QuizIntent, QuizVm, intro_rules, share_score};

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let image_url = ctx.image_url();

    let vm = use_signal(move || QuizVm::new(ctx.questions(), ctx.share_sink()));
    let notice = use_signal(|| None::<Notice>);

    // Fired timers come back through the view model one at a time.
    use_future(move || async move {
        let mut vm = vm;
        let events = vm.write().take_timer_events();
        let Some(mut events) = events else {
            return;
        };
        while let Some(token) = events.next().await {
            if vm.write().apply_timer(token) == TimerOutcome::Stale {
                tracing::debug!(?token, "ignored stale timer");
            }
        }
    });

    let on_intent = move |intent: QuizIntent| {
        let mut vm = vm;
        let mut notice = notice;
        let result = vm.write().dispatch(intent);
        match result {
            Ok(()) => notice.set(None),
            Err(err) => notice.set(Some(Notice::Error(err))),
        }
    };

    let on_share = move |()| {
        let request = vm.read().share_request();
        spawn(async move {
            let mut notice = notice;
            let outcome = match request {
                Ok((text, sink)) => share_score(sink.as_ref(), &text).await,
                Err(err) => Notice::Error(err),
            };
            notice.set(Some(outcome));
        });
    };

    let snapshot = vm.read().snapshot();

    rsx! {
        QuizScreen {
            snapshot,
            image_url,
            notice: notice(),
            on_intent,
            on_share,
        }
    }
}

/// Stateless rendering of one snapshot; all input goes out through the handlers.
#[component]
pub fn QuizScreen(
    snapshot: Snapshot,
    image_url: String,
    notice: Option<Notice>,
    on_intent: EventHandler<QuizIntent>,
    on_share: EventHandler<()>,
) -> Element {
    let body = match snapshot.phase {
        Phase::Intro => rsx! {
            IntroScreen {
                rules: intro_rules(snapshot.question_count),
                on_start: move |()| on_intent.call(QuizIntent::Start),
            }
        },
        Phase::Revealing => rsx! {
            ImageFrame { image_url: image_url.clone(), alt: "QuickLook" }
        },
        Phase::Answering if snapshot.image_visible => rsx! {
            ImageFrame { image_url: image_url.clone(), alt: "QuickLook" }
        },
        Phase::Answering => rsx! {
            QuestionPanel { snapshot: snapshot.clone(), on_intent }
        },
        Phase::Finished => match snapshot.recap.clone() {
            Some(recap) => rsx! {
                RecapScreen {
                    recap,
                    image_url: image_url.clone(),
                    on_share,
                    on_restart: move |()| on_intent.call(QuizIntent::Start),
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div { class: "quiz-root", id: "quiz-root",
            {body}
            if let Some(notice) = notice {
                p { class: "notice", "{notice.message()}" }
            }
        }
    }
}
