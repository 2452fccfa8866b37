use dioxus::prelude::*;

#[component]
pub fn IntroScreen(rules: Vec<String>, on_start: EventHandler<()>) -> Element {
    rsx! {
        main { class: "quiz intro",
            h1 { "My Glimpsy" }
            ul { class: "rules",
                for rule in rules {
                    li { key: "{rule}", "{rule}" }
                }
            }
            button {
                r#type: "button",
                id: "start-game",
                class: "primary",
                onclick: move |_| on_start.call(()),
                "Start Game"
            }
        }
    }
}
