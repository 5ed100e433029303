//! Plot feed with the create-plot button.

use dioxus::prelude::*;
use vibe_core::screens::FeedState;
use vibe_core::Reaction;
use vibe_ui::{BadgeSize, PlotCard, VibeBadge};

use crate::state::use_store;

#[component]
pub fn FeedScreen(on_create_plot: EventHandler<()>, on_open_plot: EventHandler<String>) -> Element {
    let store = use_store();
    let mut feed = use_signal(FeedState::new);

    let me = store.current_user().clone();
    let plots = store.plots().to_vec();

    rsx! {
        div { class: "screen",
            header { class: "screen-header glass-card",
                div { class: "screen-header-body feed-header",
                    div {
                        h1 { class: "screen-title", "VIBE_OS" }
                        div { class: "feed-vibe-row",
                            span { class: "muted small", "Your vibe:" }
                            VibeBadge { vibe: me.current_vibe, size: BadgeSize::Sm }
                        }
                    }
                    button { class: "icon-btn bell",
                        "\u{1f514}"
                        span { class: "bell-dot" }
                    }
                }
            }

            div { class: "feed-list",
                for plot in plots {
                    {
                        let id = plot.id.clone();
                        let pull_id = id.clone();
                        let react_id = id.clone();
                        let comment_id = id.clone();
                        let open_id = id.clone();
                        let is_pulling_up = feed.read().is_pulling_up(&id);
                        let reactions = feed.read().reactions_for(&plot);
                        rsx! {
                            PlotCard {
                                key: "{id}",
                                plot,
                                is_pulling_up,
                                reactions,
                                on_pull_up: move |_| feed.write().toggle_pull_up(&pull_id),
                                on_react: move |reaction: Reaction| feed.write().toggle_reaction(&react_id, reaction),
                                on_comment: move |_| on_open_plot.call(comment_id.clone()),
                                on_click: move |_| on_open_plot.call(open_id.clone()),
                            }
                        }
                    }
                }
            }

            button {
                class: "fab glow-chaos",
                onclick: move |_| on_create_plot.call(()),
                "+"
            }
        }
    }
}
