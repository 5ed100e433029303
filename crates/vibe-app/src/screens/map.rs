//! Placeholder map with friend pins and nearby cards.

use dioxus::prelude::*;
use vibe_core::{map_pin_position, visible_on_map, User};
use vibe_ui::{AvatarSize, BadgeSize, UserAvatar, VibeBadge};

use crate::state::use_store;

/// Pins and cards open the DM with that user when one exists.
#[component]
pub fn MapScreen(on_open_chat: EventHandler<String>) -> Element {
    let store = use_store();
    let users: Vec<User> = visible_on_map(store.users()).into_iter().cloned().collect();
    let dm_for = |user: &User| store.dm_with(&user.id).map(|c| c.id.clone());

    rsx! {
        div { class: "screen map-screen",
            header { class: "map-header",
                h1 { class: "map-title", "Map" }
                div { class: "header-actions",
                    button { class: "icon-btn glass-card", "\u{2699}\u{fe0f}" }
                    button { class: "icon-btn glass-card", "\u{1f5c2}\u{fe0f}" }
                }
            }

            div { class: "tactical-grid",
                div { class: "map-placeholder",
                    div { class: "map-placeholder-icon muted", "\u{1f4cd}" }
                    h2 { class: "bold", "Map View" }
                    p { class: "muted",
                        "Mapbox integration coming soon. You'll see your crew's locations here."
                    }
                }

                for (index, user) in users.iter().enumerate() {
                    {
                        let (top, left) = map_pin_position(index);
                        let dm = dm_for(user);
                        let dot_class = format!("pin-dot vibe-bg-{0} glow-{0}", user.current_vibe.css_key());
                        rsx! {
                            button {
                                key: "pin-{user.id}",
                                class: "map-pin",
                                style: "top: {top}%; left: {left}%;",
                                onclick: move |_| open_dm(dm.clone(), on_open_chat),
                                div { class: "{dot_class}" }
                                div { class: "pin-label", "{user.display_name}" }
                            }
                        }
                    }
                }
            }

            div { class: "nearby-strip",
                for user in users.iter() {
                    {
                        let dm = dm_for(user);
                        rsx! {
                            button {
                                key: "card-{user.id}",
                                class: "nearby-card glass-card",
                                onclick: move |_| open_dm(dm.clone(), on_open_chat),
                                UserAvatar { user: user.clone(), size: AvatarSize::Md }
                                div {
                                    p { class: "bold small", "{user.display_name}" }
                                    div { class: "name-row",
                                        VibeBadge { vibe: user.current_vibe, size: BadgeSize::Sm, show_label: false }
                                        if let Some(location) = &user.location {
                                            span { class: "muted small", "{location.name}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn open_dm(chat_id: Option<String>, on_open_chat: EventHandler<String>) {
    match chat_id {
        Some(id) => on_open_chat.call(id),
        None => tracing::debug!("No direct chat for this user"),
    }
}
