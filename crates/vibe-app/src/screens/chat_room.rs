//! Conversation view with a local-only composer.

use chrono::Utc;
use dioxus::prelude::*;
use vibe_core::screens::ChatRoomState;
use vibe_core::time::time_ago;
use vibe_core::{Message, User};
use vibe_ui::{AvatarSize, NotFound, UserAvatar};

use crate::state::use_store;

#[component]
pub fn ChatRoomScreen(chat_id: String, on_back: EventHandler<()>) -> Element {
    let store = use_store();
    let seed = store.messages().to_vec();
    let mut room = use_signal(move || ChatRoomState::new(seed));

    // Keep the newest message in view.
    use_effect(move || {
        let _count = room.read().messages.len();
        let _ = document::eval(
            "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });",
        );
    });

    let Some(chat) = store.chat(&chat_id).cloned() else {
        return rsx! { NotFound { label: "Chat not found" } };
    };

    let me = store.current_user().clone();
    let now = Utc::now();
    let counterpart = chat.primary_participant().cloned();
    let messages = room.read().messages.clone();
    let draft = room.read().draft.clone();
    let can_send = room.read().can_send();
    let send_class = if can_send { "send-btn ready" } else { "send-btn" };
    let status = if chat.is_dm() {
        counterpart
            .as_ref()
            .filter(|u| u.is_online)
            .map(|_| ("online", "Active now".to_string()))
    } else {
        Some(("muted", format!("{} members", chat.participants.len())))
    };

    let key_sender = me.clone();
    let click_sender = me.clone();

    rsx! {
        div { class: "screen chat-room",
            header { class: "screen-header glass-card",
                button {
                    class: "icon-btn",
                    onclick: move |_| on_back.call(()),
                    "\u{2190}"
                }

                {
                    match (chat.is_dm(), counterpart) {
                        (true, Some(user)) => rsx! { UserAvatar { user, size: AvatarSize::Md } },
                        _ => rsx! { div { class: "emoji-avatar small", "{chat.display_emoji()}" } },
                    }
                }

                div { class: "grow",
                    h1 { class: "bold", "{chat.name}" }
                    if let Some((class, text)) = status {
                        p { class: "small {class}", "{text}" }
                    }
                }

                div { class: "header-actions",
                    button { class: "icon-btn", "\u{1f4de}" }
                    button { class: "icon-btn", "\u{1f3a5}" }
                    button { class: "icon-btn", "\u{22ee}" }
                }
            }

            div { class: "message-list",
                for message in messages.iter() {
                    MessageBubble {
                        key: "{message.id}",
                        message: message.clone(),
                        is_own: ChatRoomState::is_own(message, &me),
                        show_sender: !chat.is_dm(),
                        time: time_ago(now, message.created_at),
                    }
                }
                div { id: "chat-end" }
            }

            div { class: "composer-bar glass-card",
                button { class: "icon-btn muted", "\u{1f5bc}\u{fe0f}" }
                input {
                    class: "field-input pill grow",
                    r#type: "text",
                    placeholder: "Type a message...",
                    value: "{draft}",
                    oninput: move |evt| room.write().draft = evt.value(),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && can_send {
                            send_message(room, &key_sender);
                        }
                    },
                }
                button {
                    class: "{send_class}",
                    disabled: !can_send,
                    onclick: move |_| send_message(room, &click_sender),
                    "\u{27a4}"
                }
            }
        }
    }
}

fn send_message(mut room: Signal<ChatRoomState>, sender: &User) {
    room.write().send(Utc::now(), sender);
}

/// A single message, right-aligned when sent by the current user.
#[component]
fn MessageBubble(message: Message, is_own: bool, show_sender: bool, time: String) -> Element {
    let row_class = if is_own { "message-row own" } else { "message-row" };
    let bubble_class = if is_own { "bubble own" } else { "bubble" };

    rsx! {
        div { class: "{row_class}",
            if !is_own {
                UserAvatar { user: message.sender.clone(), size: AvatarSize::Sm, show_vibe: false }
            }
            div { class: "{bubble_class}",
                if show_sender && !is_own {
                    p { class: "bubble-sender", "{message.sender.display_name}" }
                }
                p { "{message.content}" }
                p { class: "bubble-time", "{time}" }
            }
        }
    }
}
