//! Single plot with its crowd and comment thread.

use chrono::Utc;
use dioxus::prelude::*;
use vibe_core::screens::{CommentThread, PlotDetailState};
use vibe_core::time::{expiry_label, time_ago, ExpiryStyle};
use vibe_core::User;
use vibe_ui::{AvatarSize, BackHeader, BadgeSize, NotFound, UserAvatar, VibeBadge};

use crate::state::use_store;

#[component]
pub fn PlotDetailScreen(plot_id: String, on_back: EventHandler<()>) -> Element {
    let store = use_store();
    let seed = store.comments().to_vec();
    let mut detail = use_signal(PlotDetailState::default);
    let mut thread = use_signal(move || CommentThread::new(seed));

    let Some(plot) = store.plot(&plot_id).cloned() else {
        return rsx! { NotFound { label: "Plot not found" } };
    };

    let me = store.current_user().clone();
    let now = Utc::now();
    let posted = time_ago(now, plot.created_at);
    let expiry = expiry_label(now, plot.expires_at, ExpiryStyle::Verbose);
    let body_class = format!("plot-detail-body accent-bottom-{}", plot.vibe.css_key());

    let is_pulling_up = detail.read().pulling_up;
    let pull_class = if is_pulling_up { "pull-up-btn wide active" } else { "pull-up-btn wide" };
    let pull_label = if is_pulling_up { "Pulling up! \u{1f525}" } else { "I'm pulling up" };

    let comments = thread.read().comments.clone();
    let draft = thread.read().draft.clone();
    let can_submit = thread.read().can_submit();
    let send_class = if can_submit { "icon-btn send ready" } else { "icon-btn send" };

    let key_author = me.clone();
    let click_author = me.clone();

    rsx! {
        div { class: "screen plot-detail",
            BackHeader { on_back,
                h1 { class: "screen-title", "Plot" }
            }

            div { class: "{body_class}",
                div { class: "plot-detail-author",
                    UserAvatar { user: plot.author.clone(), size: AvatarSize::Lg }
                    div { class: "grow",
                        div { class: "name-row",
                            span { class: "bold", "{plot.author.display_name}" }
                            span { class: "muted", "@{plot.author.username}" }
                        }
                        p { class: "muted small", "{posted}" }
                    }
                    VibeBadge { vibe: plot.vibe, size: BadgeSize::Md }
                }

                p { class: "plot-detail-content", "{plot.content}" }

                div { class: "plot-meta",
                    if let Some(location) = &plot.location {
                        span { "\u{1f4cd} {location}" }
                    }
                    span { "{expiry}" }
                }

                div { class: "reaction-bar bordered",
                    for (reaction, count) in plot.reactions.iter() {
                        span { key: "{reaction.emoji()}", class: "reaction-chip",
                            span { "{reaction.emoji()}" }
                            span { class: "muted", "{count}" }
                        }
                    }
                }

                div { class: "plot-detail-actions",
                    button {
                        class: "{pull_class}",
                        onclick: move |_| detail.write().toggle_pull_up(),
                        span { "\u{1f697}" }
                        span { "{pull_label}" }
                    }
                    button { class: "icon-btn square", "\u{1f517}" }
                }
            }

            if !plot.pulling_up.is_empty() {
                div { class: "section",
                    h3 { class: "section-title", "{plot.pulling_up.len()} pulling up" }
                    for user in plot.pulling_up.iter() {
                        div { key: "{user.id}", class: "person-row",
                            UserAvatar { user: user.clone(), size: AvatarSize::Sm }
                            span { class: "bold", "{user.display_name}" }
                            span { class: "muted small", "@{user.username}" }
                        }
                    }
                }
            }

            div { class: "section",
                h3 { class: "section-title", "Comments ({comments.len()})" }
                for comment in comments.iter() {
                    div { key: "{comment.id}", class: "comment",
                        UserAvatar { user: comment.author.clone(), size: AvatarSize::Sm, show_vibe: false }
                        div { class: "grow",
                            div { class: "name-row",
                                span { class: "bold", "{comment.author.display_name}" }
                                span { class: "muted small", "{time_ago(now, comment.created_at)}" }
                            }
                            p { class: "comment-body", "{comment.content}" }
                        }
                    }
                }
            }

            div { class: "comment-bar glass-card",
                UserAvatar { user: me, size: AvatarSize::Sm, show_vibe: false }
                input {
                    class: "field-input pill grow",
                    r#type: "text",
                    placeholder: "Add a comment...",
                    value: "{draft}",
                    oninput: move |evt| thread.write().draft = evt.value(),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && can_submit {
                            post_comment(thread, &key_author);
                        }
                    },
                }
                button {
                    class: "{send_class}",
                    disabled: !can_submit,
                    onclick: move |_| post_comment(thread, &click_author),
                    "\u{1f4ac}"
                }
            }
        }
    }
}

fn post_comment(mut thread: Signal<CommentThread>, author: &User) {
    thread.write().submit(Utc::now(), author);
}
