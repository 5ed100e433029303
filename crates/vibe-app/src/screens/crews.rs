//! Crew list with search and the join-by-code prompt.

use chrono::Utc;
use dioxus::prelude::*;
use vibe_core::screens::JoinCrewState;
use vibe_core::time::time_ago;
use vibe_core::{filter_crews, Crew, MockStore};

use crate::state::use_store;

#[component]
pub fn CrewsScreen(on_open_crew: EventHandler<String>) -> Element {
    let store = use_store();
    let mut query = use_signal(String::new);
    let mut join = use_signal(JoinCrewState::default);

    let total = store.crews().len();
    let crews: Vec<Crew> = filter_crews(store.crews(), &query.read())
        .into_iter()
        .cloned()
        .collect();
    let join_open = join.read().is_open;

    rsx! {
        div { class: "screen",
            header { class: "list-header glass-card",
                div { class: "list-header-row",
                    div {
                        h1 { class: "screen-title", "Crews" }
                        p { class: "muted", "{total} squads" }
                    }
                    button { class: "icon-btn primary", "+" }
                }

                div { class: "search-box",
                    span { class: "search-icon muted", "\u{1f50d}" }
                    input {
                        class: "field-input search-input",
                        r#type: "text",
                        placeholder: "Search crews...",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                }
            }

            div { class: "quick-actions",
                button {
                    class: "quick-action",
                    onclick: move |_| join.write().open(),
                    span { class: "muted", "\u{1f4cb}" }
                    span { class: "medium", "Enter Code" }
                }
                button { class: "quick-action",
                    span { class: "muted", "\u{1f533}" }
                    span { class: "medium", "Scan QR" }
                }
            }

            div { class: "card-list",
                for crew in crews.iter() {
                    CrewCard {
                        key: "{crew.id}",
                        crew: crew.clone(),
                        on_open: move |id: String| on_open_crew.call(id),
                    }
                }

                if crews.is_empty() {
                    div { class: "empty-state muted",
                        div { class: "empty-icon", "\u{1f465}" }
                        p { "No crews found" }
                    }
                }
            }

            if join_open {
                JoinCrewDialog { join, on_joined: move |id: String| on_open_crew.call(id) }
            }
        }
    }
}

#[component]
fn CrewCard(crew: Crew, on_open: EventHandler<String>) -> Element {
    let id = crew.id.clone();
    let activity = crew.last_activity.map(|t| time_ago(Utc::now(), t));
    let unread = crew.unread_count.filter(|n| *n > 0);

    rsx! {
        button {
            class: "crew-card glass-card",
            onclick: move |_| on_open.call(id.clone()),
            div { class: "crew-emoji", "{crew.display_emoji()}" }
            div { class: "row-body",
                div { class: "name-row",
                    h3 { class: "bold", "{crew.name}" }
                    if let Some(n) = unread {
                        span { class: "unread-badge", "{n}" }
                    }
                }
                div { class: "crew-meta muted",
                    span { "\u{1f465} {crew.member_count} members" }
                    if let Some(t) = activity {
                        span { "\u{2022} {t}" }
                    }
                }
            }
            span { class: "muted chevron", "\u{203a}" }
        }
    }
}

/// Modal asking for an invite code. Navigates to the crew on a match.
#[component]
fn JoinCrewDialog(mut join: Signal<JoinCrewState>, on_joined: EventHandler<String>) -> Element {
    let store = use_store();
    let state = join.read().clone();
    let can_submit = state.can_submit();

    let key_store = store.clone();

    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| join.write().close(),
            div {
                class: "dialog glass-card",
                onclick: move |evt| evt.stop_propagation(),
                h2 { class: "dialog-title", "Enter invite code" }
                input {
                    class: "field-input mono",
                    r#type: "text",
                    placeholder: "DAY1-2024",
                    autofocus: true,
                    value: "{state.code}",
                    oninput: move |evt| {
                        let mut j = join.write();
                        j.code = evt.value();
                        j.error = None;
                    },
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && can_submit {
                            try_join(join, &key_store, on_joined);
                        }
                    },
                }
                if let Some(err) = &state.error {
                    p { class: "field-error", "{err}" }
                }
                div { class: "dialog-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| join.write().close(),
                        "Cancel"
                    }
                    button {
                        class: "btn-primary",
                        disabled: !can_submit,
                        onclick: move |_| try_join(join, &store, on_joined),
                        "Join"
                    }
                }
            }
        }
    }
}

fn try_join(mut join: Signal<JoinCrewState>, store: &MockStore, on_joined: EventHandler<String>) {
    let result = join.write().lookup(store);
    match result {
        Ok(crew_id) => {
            tracing::debug!(crew_id = %crew_id, "Joined crew by code");
            join.write().close();
            on_joined.call(crew_id);
        }
        Err(e) => tracing::debug!("{e}"),
    }
}
