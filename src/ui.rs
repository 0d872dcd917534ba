use crate::conversation::Conversation;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{ChatView, Sidebar};
use dioxus::prelude::*;

const MEDIBOT_CSS: Asset = asset!("/assets/medibot.css");

#[component]
pub fn App() -> Element {
    let conversation = use_signal(Conversation::new);
    let theme = ThemeMode::from_dark_flag(conversation().dark_mode);

    rsx! {
        ThemeStyles { theme }
        div { class: "app-shell",
            Sidebar { conversation }
            div { class: "page",
                div { class: "med-strip" }
                Hero {}
                ChatView { conversation }
            }
        }
    }
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: MEDIBOT_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        div { class: "medibot-hero",
            h1 { "\u{1fa7a} MediBot" }
            div { class: "tagline", "Context-aware medical Q&A \u{2014} ask from our knowledge base." }
            span { class: "badge", "Medical Q&A \u{2022} Evidence-based" }
        }
    }
}
