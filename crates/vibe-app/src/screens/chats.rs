//! Chat list with search and DM / crew filter.

use chrono::Utc;
use dioxus::prelude::*;
use vibe_core::time::distance_in_words;
use vibe_core::{filter_chats, total_unread, Chat, ChatFilter, ChatKind};
use vibe_ui::{AvatarSize, UserAvatar};

use crate::state::use_store;

#[component]
pub fn ChatsScreen(on_open_chat: EventHandler<String>) -> Element {
    let store = use_store();
    let mut filter = use_signal(ChatFilter::default);
    let mut query = use_signal(String::new);

    let unread = total_unread(store.chats());
    let current_filter = *filter.read();
    let chats: Vec<Chat> = filter_chats(store.chats(), current_filter, &query.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "screen",
            header { class: "list-header glass-card",
                div { class: "list-header-title",
                    h1 { class: "screen-title", "Chats" }
                    if unread > 0 {
                        p { class: "muted", "{unread} unread messages" }
                    }
                }

                div { class: "search-box",
                    span { class: "search-icon muted", "\u{1f50d}" }
                    input {
                        class: "field-input search-input",
                        r#type: "text",
                        placeholder: "Search chats...",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }

                div { class: "chip-row",
                    for option in ChatFilter::all().iter().copied() {
                        button {
                            key: "{option.label()}",
                            class: if option == current_filter { "chip active" } else { "chip" },
                            onclick: move |_| filter.set(option),
                            "{option.label()}"
                        }
                    }
                }
            }

            div { class: "row-list",
                for chat in chats.iter() {
                    ChatRow {
                        key: "{chat.id}",
                        chat: chat.clone(),
                        on_open: move |id: String| on_open_chat.call(id),
                    }
                }

                if chats.is_empty() {
                    div { class: "empty-state muted",
                        div { class: "empty-icon", "\u{1f4ac}" }
                        p { "No chats found" }
                    }
                }
            }
        }
    }
}

#[component]
fn ChatRow(chat: Chat, on_open: EventHandler<String>) -> Element {
    let now = Utc::now();
    let id = chat.id.clone();
    let dm_user = chat.is_dm().then(|| chat.primary_participant().cloned()).flatten();
    let last_time = chat
        .last_message
        .as_ref()
        .map(|m| distance_in_words(now, m.created_at));
    let sender_prefix = match (&chat.kind, &chat.last_message) {
        (ChatKind::Crew, Some(m)) => format!("{}: ", m.sender.display_name),
        _ => String::new(),
    };

    rsx! {
        button {
            class: "row",
            onclick: move |_| on_open.call(id.clone()),

            if let Some(user) = &dm_user {
                UserAvatar { user: user.clone(), size: AvatarSize::Lg }
            } else {
                div { class: "emoji-avatar", "{chat.display_emoji()}" }
            }

            div { class: "row-body",
                div { class: "row-top",
                    span { class: "bold truncate", "{chat.name}" }
                    if let Some(t) = &last_time {
                        span { class: "muted small", "{t}" }
                    }
                }
                if let Some(m) = &chat.last_message {
                    p { class: "muted truncate row-preview",
                        span { class: "medium", "{sender_prefix}" }
                        "{m.content}"
                    }
                }
            }

            if chat.unread_count > 0 {
                span { class: "unread-badge", "{chat.unread_count}" }
            }
        }
    }
}
