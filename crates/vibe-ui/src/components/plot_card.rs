//! Feed card for a single plot.

use chrono::Utc;
use dioxus::prelude::*;
use vibe_core::time::{expiry_label, time_ago, ExpiryStyle};
use vibe_core::{Plot, Reaction, Reactions};

use super::avatar::{AvatarSize, AvatarStack, UserAvatar};
use super::vibe::{BadgeSize, VibeBadge};

/// Card with author, content, expiry, reactions and the pull-up action.
///
/// `reactions` overrides the plot's own counts so the feed can show the
/// viewer's local reactions. Zero counts are not rendered.
#[component]
pub fn PlotCard(
    plot: Plot,
    #[props(default = false)]
    is_pulling_up: bool,
    #[props(optional)]
    reactions: Option<Reactions>,
    on_pull_up: EventHandler<()>,
    #[props(optional)]
    on_react: Option<EventHandler<Reaction>>,
    #[props(optional)]
    on_comment: Option<EventHandler<()>>,
    #[props(optional)]
    on_click: Option<EventHandler<()>>,
) -> Element {
    let now = Utc::now();
    let posted = time_ago(now, plot.created_at);
    let expiry = expiry_label(now, plot.expires_at, ExpiryStyle::Compact);
    let counts = reactions.unwrap_or(plot.reactions);
    let card_class = format!("plot-card glass-card accent-{}", plot.vibe.css_key());
    let pull_class = if is_pulling_up { "pull-up-btn active" } else { "pull-up-btn" };
    let pull_label = if is_pulling_up { "Pulling up!" } else { "I'm pulling up" };
    let has_crowd = !plot.pulling_up.is_empty();

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| {
                if let Some(handler) = &on_click {
                    handler.call(());
                }
            },

            div { class: "plot-card-header",
                div { class: "plot-card-author",
                    UserAvatar { user: plot.author.clone(), size: AvatarSize::Md }
                    div {
                        p { class: "plot-author-name", "{plot.author.display_name}" }
                        p { class: "muted small", "{posted}" }
                    }
                }
                VibeBadge { vibe: plot.vibe, size: BadgeSize::Sm }
            }

            p { class: "plot-content", "{plot.content}" }

            div { class: "plot-meta",
                if let Some(location) = &plot.location {
                    span { class: "plot-location", "\u{1f4cd} {location}" }
                }
                span { class: "small", "{expiry}" }
            }

            div { class: "reaction-bar",
                for (reaction, count) in counts.iter().filter(|(_, n)| *n > 0) {
                    button {
                        key: "{reaction.emoji()}",
                        class: "reaction-chip",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            if let Some(handler) = &on_react {
                                handler.call(reaction);
                            }
                        },
                        span { "{reaction.emoji()}" }
                        span { class: "muted", "{count}" }
                    }
                }
            }

            div { class: "plot-actions",
                div { class: "plot-actions-left",
                    button {
                        class: "{pull_class}",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_pull_up.call(());
                        },
                        span { "\u{1f697}" }
                        span { "{pull_label}" }
                    }
                    button {
                        class: "comment-btn",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            if let Some(handler) = &on_comment {
                                handler.call(());
                            }
                        },
                        span { "\u{1f4ac}" }
                        span { class: "small", "{plot.comment_count}" }
                    }
                }
                if has_crowd {
                    div { class: "plot-crowd",
                        AvatarStack { users: plot.pulling_up.clone(), max: 3, size: AvatarSize::Sm }
                        span { class: "muted small", "pulling up" }
                    }
                }
            }
        }
    }
}
