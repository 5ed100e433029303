//! Back-arrow header and the placeholder shown for unknown ids.

use dioxus::prelude::*;

/// Sticky header with a back button and a title slot.
#[component]
pub fn BackHeader(on_back: EventHandler<()>, children: Element) -> Element {
    rsx! {
        header { class: "screen-header glass-card",
            button {
                class: "icon-btn",
                onclick: move |_| on_back.call(()),
                "\u{2190}"
            }
            div { class: "screen-header-body", {children} }
        }
    }
}

/// Centered "… not found" message.
#[component]
pub fn NotFound(label: String) -> Element {
    rsx! {
        div { class: "not-found",
            p { class: "muted", "{label}" }
        }
    }
}
