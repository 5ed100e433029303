//! Crew info, invite code and member roster.

use dioxus::prelude::*;
use vibe_core::screens::CopyFeedback;
use vibe_ui::{AvatarSize, BackHeader, BadgeSize, NotFound, UserAvatar, VibeIndicator};

use crate::clipboard::copy_with_feedback;
use crate::state::use_store;

#[component]
pub fn CrewDetailScreen(
    crew_id: String,
    on_back: EventHandler<()>,
    on_open_chat: EventHandler<String>,
) -> Element {
    let store = use_store();
    let feedback = use_signal(CopyFeedback::default);

    let Some(crew) = store.crew(&crew_id).cloned() else {
        return rsx! { NotFound { label: "Crew not found" } };
    };

    let linked_chat = store.chat_for_crew(&crew.id).map(|c| c.id.clone());
    let copied = feedback.read().is_copied();
    let copy_class = if copied { "icon-btn square copied" } else { "icon-btn square" };
    let invite_code = crew.invite_code.clone();

    rsx! {
        div { class: "screen crew-detail",
            BackHeader { on_back,
                h1 { class: "screen-title", "Crew Details" }
            }

            div { class: "section centered",
                div { class: "crew-emoji large", "{crew.display_emoji()}" }
                h2 { class: "crew-name", "{crew.name}" }
                p { class: "muted", "{crew.member_count} members" }
            }

            div { class: "section action-row",
                button {
                    class: "round-action",
                    disabled: linked_chat.is_none(),
                    onclick: move |_| {
                        if let Some(id) = &linked_chat {
                            on_open_chat.call(id.clone());
                        }
                    },
                    div { class: "round-icon primary", "\u{1f4ac}" }
                    span { class: "muted small", "Chat" }
                }
                button { class: "round-action",
                    div { class: "round-icon", "\u{2795}" }
                    span { class: "muted small", "Invite" }
                }
                button { class: "round-action",
                    div { class: "round-icon", "\u{2699}\u{fe0f}" }
                    span { class: "muted small", "Settings" }
                }
            }

            div { class: "section",
                h3 { class: "section-title", "Invite Code" }
                div { class: "invite-row",
                    div { class: "invite-code mono grow", "{crew.invite_code}" }
                    button {
                        class: "{copy_class}",
                        onclick: move |_| copy_with_feedback(&invite_code, feedback),
                        if copied { "\u{2713}" } else { "\u{1f4cb}" }
                    }
                    button { class: "icon-btn square", "\u{1f517}" }
                }
            }

            div { class: "section",
                div { class: "section-title-row",
                    h3 { class: "section-title", "Members" }
                    button { class: "link small", "\u{1f465} See all" }
                }
                for member in crew.members.iter() {
                    div { key: "{member.id}", class: "member-row",
                        UserAvatar { user: member.clone(), size: AvatarSize::Md }
                        div { class: "grow",
                            p { class: "bold", "{member.display_name}" }
                            p { class: "muted small", "@{member.username}" }
                        }
                        div { class: "member-status",
                            VibeIndicator { vibe: member.current_vibe, size: BadgeSize::Md, pulse: member.is_online }
                            if let Some(location) = &member.location {
                                span { class: "muted small", "{location.name}" }
                            }
                        }
                    }
                }
            }

            div { class: "section",
                button { class: "btn-danger btn-block", "\u{21aa} Leave Crew" }
            }
        }
    }
}
