//! Full-screen composer for a new plot.

use dioxus::prelude::*;
use vibe_core::screens::{NewPlot, PlotDraft};
use vibe_core::Vibe;

#[component]
pub fn CreatePlotScreen(on_close: EventHandler<()>, on_submit: EventHandler<NewPlot>) -> Element {
    let mut draft = use_signal(PlotDraft::new);

    let current = draft.read().clone();
    let can_post = current.can_post();
    let chars_left = current.chars_left();
    let counter_class = if current.is_near_limit() { "char-counter near-limit" } else { "char-counter" };
    let location_class = if current.show_location { "location-toggle active" } else { "location-toggle" };

    rsx! {
        div { class: "screen create-plot slide-up",
            header { class: "composer-header",
                button {
                    class: "icon-btn",
                    onclick: move |_| on_close.call(()),
                    "\u{2715}"
                }
                h1 { class: "composer-title", "New Plot" }
                button {
                    class: "btn-primary btn-pill",
                    disabled: !can_post,
                    onclick: move |_| {
                        match draft.read().submit() {
                            Ok(plot) => on_submit.call(plot),
                            Err(e) => tracing::debug!("Plot not posted: {e}"),
                        }
                    },
                    "Post"
                }
            }

            div { class: "composer-body",
                div {
                    label { class: "field-label", "What's the vibe?" }
                    div { class: "vibe-picker",
                        for vibe in Vibe::selectable().iter().copied() {
                            {
                                let option_class = if vibe == current.vibe() {
                                    format!("vibe-option selected vibe-bg-{}", vibe.css_key())
                                } else {
                                    "vibe-option".to_string()
                                };
                                rsx! {
                                    button {
                                        key: "{vibe}",
                                        class: "{option_class}",
                                        onclick: move |_| draft.write().set_vibe(vibe),
                                        span { class: "vibe-option-emoji", "{vibe.emoji()}" }
                                        span { class: "small", "{vibe.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    textarea {
                        class: "composer-input",
                        placeholder: "What's the plot? Where you at? What's happening?",
                        value: "{current.content()}",
                        oninput: move |evt| draft.write().set_content(&evt.value()),
                    }
                    div { class: "char-counter-row",
                        span { class: "{counter_class}", "{chars_left}" }
                    }
                }

                div {
                    button {
                        class: "{location_class}",
                        onclick: move |_| draft.write().toggle_location(),
                        "\u{1f4cd} Add location"
                    }
                    if current.show_location {
                        input {
                            class: "field-input location-input",
                            r#type: "text",
                            placeholder: "e.g., Westlands, Kilimani, Karen...",
                            value: "{current.location}",
                            oninput: move |evt| draft.write().location = evt.value(),
                        }
                    }
                }
            }
        }
    }
}
