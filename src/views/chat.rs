use crate::conversation::Conversation;
use crate::reply::{PlaceholderReplyGenerator, ReplyGenerator, reply_delay};
use crate::types::{ChatMessage, MAX_INPUT_CHARS, Role};
use crate::views::shared::{
    export_response_text, format_message_timestamp, markdown_to_html, suggestion_label,
};
use dioxus::events::Key;
use dioxus::prelude::*;

/// Waits out the reply delay, then appends the generated answer. The guard is
/// re-checked after the sleep so a clear issued mid-delay drops the reply.
fn schedule_reply(mut conversation: Signal<Conversation>, generator: impl ReplyGenerator + 'static) {
    spawn(async move {
        tokio::time::sleep(reply_delay()).await;
        let question = conversation.with(|c| c.pending_question().map(str::to_string));
        if let Some(question) = question {
            let reply = generator.reply(&question);
            conversation.with_mut(|c| {
                if c.reply_due() {
                    c.apply_reply(reply);
                }
            });
        }
    });
}

#[component]
pub fn ChatView(conversation: Signal<Conversation>) -> Element {
    let mut input = use_signal(String::new);

    let mut submit_text = {
        let mut conversation = conversation;
        let mut input_signal = input;
        move |text: String| {
            let mut accepted = false;
            conversation.with_mut(|c| {
                let before = c.messages.len();
                c.submit(&text);
                accepted = c.messages.len() > before;
            });
            if accepted {
                input_signal.set(String::new());
                schedule_reply(conversation, PlaceholderReplyGenerator);
            }
        }
    };

    let snapshot = conversation();
    let regenerable = snapshot.regenerable_index();
    let processing = snapshot.is_processing;
    let input_len = input().chars().count();

    rsx! {
        div { class: "main-container",
            div { class: "chat-wrap",
                div { id: "chat-list", class: "chat-list",
                    for (i, msg) in snapshot.messages.iter().enumerate() {
                        MessageRow {
                            conversation,
                            message: msg.clone(),
                            show_regenerate: regenerable == Some(i),
                        }
                    }
                    if processing {
                        div { class: "message-row assistant",
                            div { class: "avatar assistant", "\u{1fa7a}" }
                            div { class: "bubble assistant",
                                span { class: "thinking-text", "MediBot is thinking\u{2026}" }
                                div { class: "typing-indicator",
                                    span {}
                                    span {}
                                    span {}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "trust-banner",
                "\u{26a0}\u{fe0f} "
                strong { "Not medical advice." }
                " This is for information only. Always consult a healthcare professional."
            }

            form { class: "composer",
                div { class: "composer-inner",
                    textarea {
                        rows: "1",
                        placeholder: "Ask a medical question (Enter to send)",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                let text = input();
                                submit_text(text);
                            }
                        },
                        disabled: processing,
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: processing || input().trim().is_empty(),
                        onclick: move |_| {
                            let text = input();
                            submit_text(text);
                        },
                        "Send"
                    }
                }
                div { class: "composer-hint", "{input_len}/{MAX_INPUT_CHARS}" }
            }
        }
    }
}

#[component]
fn MessageRow(
    conversation: Signal<Conversation>,
    message: ChatMessage,
    show_regenerate: bool,
) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    let avatar = match message.role {
        Role::User => "\u{1f464}",
        Role::Assistant => "\u{1fa7a}",
    };
    let timestamp = format_message_timestamp(message.timestamp.as_deref());

    rsx! {
        div { class: "message-row {role_class}",
            if matches!(message.role, Role::Assistant) {
                div { class: "avatar assistant", "{avatar}" }
            }
            div { class: "message-stack",
                div { class: "bubble {role_class}",
                    if matches!(message.role, Role::Assistant) {
                        AssistantBubble { conversation, message: message.clone(), show_regenerate }
                    } else {
                        "{message.content}"
                    }
                }
                if let Some(ts) = timestamp {
                    div { class: "message-meta {role_class}",
                        span { class: "message-timestamp", "{ts}" }
                    }
                }
            }
            if matches!(message.role, Role::User) {
                div { class: "avatar user", "{avatar}" }
            }
        }
    }
}

#[component]
fn AssistantBubble(
    conversation: Signal<Conversation>,
    message: ChatMessage,
    show_regenerate: bool,
) -> Element {
    let content_html = markdown_to_html(&message.content);
    let copy_payload = message.content.clone();
    let download_payload = message.content.clone();
    let suggestions: Vec<String> = message.suggested_questions.iter().take(3).cloned().collect();

    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                match arboard::Clipboard::new() {
                    Ok(mut cb) => {
                        if let Err(err) = cb.set_text(raw) {
                            tracing::warn!("clipboard copy failed: {err}");
                        }
                    }
                    Err(err) => tracing::warn!("clipboard unavailable: {err}"),
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    let on_download = move |_| match export_response_text(&download_payload) {
        Ok(path) => tracing::info!("response saved to {path}"),
        Err(err) => tracing::warn!("response export failed: {err}"),
    };

    let on_regenerate = move |_| {
        let mut conversation = conversation;
        conversation.with_mut(|c| c.regenerate());
        if conversation.with(|c| c.reply_due()) {
            schedule_reply(conversation, PlaceholderReplyGenerator);
        }
    };

    let sources_line = message.sources.join("; ");
    let confidence_class = message
        .confidence
        .map(|c| c.display_class())
        .unwrap_or_default();

    rsx! {
        div { class: "md", dangerous_inner_html: "{content_html}" }
        if message.confidence.is_some() || !message.sources.is_empty() {
            div { class: "answer-meta",
                if let Some(confidence) = message.confidence {
                    span { class: "{confidence_class}",
                        "Confidence: "
                        strong { "{confidence.label()}" }
                    }
                }
                if !message.sources.is_empty() {
                    span { class: "sources", "Sources: {sources_line}" }
                }
            }
        }
        div { class: "bubble-controls",
            div { class: "actions",
                button { class: "action-btn", title: "Copy answer", onclick: on_copy,
                    "\u{1f4cb} Copy"
                }
                button { class: "action-btn", title: "Download answer", onclick: on_download,
                    "Download"
                }
                if show_regenerate {
                    button { class: "action-btn", title: "Regenerate answer", onclick: on_regenerate,
                        "\u{1f504} Regenerate"
                    }
                }
            }
        }
        if !suggestions.is_empty() {
            div { class: "followups",
                span { class: "followups-label", "Follow-up:" }
                for question in suggestions {
                    FollowUpButton { conversation, question }
                }
            }
        }
    }
}

#[component]
fn FollowUpButton(conversation: Signal<Conversation>, question: String) -> Element {
    let label = suggestion_label(&question);
    let mut conversation = conversation;
    rsx! {
        button {
            class: "followup-btn",
            onclick: move |_| {
                let mut accepted = false;
                conversation.with_mut(|c| {
                    let before = c.messages.len();
                    c.submit(&question);
                    accepted = c.messages.len() > before;
                });
                if accepted {
                    schedule_reply(conversation, PlaceholderReplyGenerator);
                }
            },
            "{label}"
        }
    }
}
