use crate::conversation::{Conversation, EXAMPLE_QUESTIONS};
use dioxus::prelude::*;

#[component]
pub fn Sidebar(conversation: Signal<Conversation>) -> Element {
    let mut conversation = conversation;
    let dark = conversation().dark_mode;
    let toggle_label = if dark { "\u{1f319} Dark mode: on" } else { "\u{1f319} Dark mode: off" };

    rsx! {
        div { class: "sidebar",
            h2 { class: "sidebar-title", "\u{1fa7a} MediBot" }
            p { class: "sidebar-blurb",
                "Medical Q&A from our knowledge base. "
                em { "Not a substitute for professional care." }
            }
            hr {}
            button {
                class: "btn sidebar-toggle",
                onclick: move |_| conversation.with_mut(|c| c.toggle_dark_mode()),
                "{toggle_label}"
            }
            h3 { class: "sidebar-heading", "\u{1f4a1} Examples" }
            ul { class: "sidebar-examples",
                for question in EXAMPLE_QUESTIONS {
                    li { "{question}" }
                }
            }
            hr {}
            button {
                class: "btn sidebar-clear",
                onclick: move |_| conversation.with_mut(|c| c.clear()),
                "\u{1f5d1}\u{fe0f} Clear chat"
            }
        }
    }
}
