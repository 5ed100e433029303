//! Profile card, ghost mode, vibe picker and settings menu.

use dioxus::prelude::*;
use vibe_core::screens::{CopyFeedback, ProfileState};
use vibe_core::Vibe;
use vibe_ui::{AvatarSize, BadgeSize, UserAvatar, VibeBadge, CURRENT_THEME};

use crate::clipboard::copy_with_feedback;
use crate::state::use_store;

#[component]
pub fn ProfileScreen() -> Element {
    let store = use_store();
    let me = store.current_user().clone();
    let seed = me.clone();
    let mut profile = use_signal(move || ProfileState::new(&seed));
    let feedback = use_signal(CopyFeedback::default);

    let state = *profile.read();
    let preview = state.preview_user(&me);
    let handle = format!("@{}", me.username);
    let copy_handle = handle.clone();
    let copied = feedback.read().is_copied();
    let appearance = CURRENT_THEME.read().display_name();

    let (ghost_class, ghost_icon, ghost_text) = if state.is_ghost {
        ("ghost-toggle on", "\u{1f648}", "You're invisible")
    } else {
        ("ghost-toggle", "\u{1f441}\u{fe0f}", "You're visible to crews")
    };
    let switch_class = if state.is_ghost { "switch on" } else { "switch" };

    let menu = [
        ("\u{1f514}", "Notifications", "Manage alerts"),
        ("\u{1f6e1}\u{fe0f}", "Privacy", "Location & visibility"),
        ("\u{1f319}", "Appearance", appearance),
        ("\u{2753}", "Help & Support", "Get assistance"),
    ];

    rsx! {
        div { class: "screen profile",
            header { class: "screen-header glass-card",
                div { class: "screen-header-body spread",
                    h1 { class: "screen-title", "Profile" }
                    button { class: "icon-btn", "\u{2699}\u{fe0f}" }
                }
            }

            div { class: "section centered",
                UserAvatar { user: preview, size: AvatarSize::Xl, class: "profile-avatar" }
                h2 { class: "profile-name", "{me.display_name}" }
                button {
                    class: "handle-btn muted",
                    onclick: move |_| copy_with_feedback(&copy_handle, feedback),
                    span { "{handle}" }
                    if copied {
                        span { class: "copied-mark", "\u{2713}" }
                    } else {
                        span { "\u{1f4cb}" }
                    }
                }
                VibeBadge { vibe: state.vibe, size: BadgeSize::Md, class: "profile-badge" }
            }

            div { class: "section",
                button {
                    class: "{ghost_class}",
                    onclick: move |_| profile.write().toggle_ghost(),
                    div { class: "menu-item-main",
                        span { class: "menu-icon", "{ghost_icon}" }
                        div {
                            p { class: "bold", "Ghost Mode" }
                            p { class: "muted small", "{ghost_text}" }
                        }
                    }
                    div { class: "{switch_class}",
                        div { class: "switch-knob" }
                    }
                }
            }

            if !state.is_ghost {
                div { class: "section",
                    h3 { class: "section-title", "Set Your Vibe" }
                    div { class: "vibe-picker",
                        for vibe in Vibe::selectable().iter().copied() {
                            {
                                let option_class = if vibe == state.vibe {
                                    format!("vibe-option selected vibe-bg-{0} glow-{0}", vibe.css_key())
                                } else {
                                    "vibe-option".to_string()
                                };
                                rsx! {
                                    button {
                                        key: "{vibe}",
                                        class: "{option_class}",
                                        onclick: move |_| profile.write().set_vibe(vibe),
                                        span { class: "vibe-option-emoji", "{vibe.emoji()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "section",
                button { class: "menu-item",
                    div { class: "menu-item-main",
                        span { class: "menu-icon", "\u{1f533}" }
                        div {
                            p { class: "bold", "My QR Code" }
                            p { class: "muted small", "Share your profile" }
                        }
                    }
                    span { class: "muted chevron", "\u{203a}" }
                }
            }

            div { class: "section menu",
                for (icon, label, sublabel) in menu {
                    button { key: "{label}", class: "menu-item",
                        div { class: "menu-item-main",
                            span { class: "menu-icon", "{icon}" }
                            div {
                                p { class: "bold", "{label}" }
                                p { class: "muted small", "{sublabel}" }
                            }
                        }
                        span { class: "muted chevron", "\u{203a}" }
                    }
                }
            }

            div { class: "section",
                button { class: "btn-danger btn-block", "\u{21aa} Log Out" }
            }
        }
    }
}
