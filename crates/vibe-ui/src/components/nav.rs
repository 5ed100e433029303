//! Bottom tab bar and the layout that hosts it.

use dioxus::prelude::*;
use vibe_core::Tab;

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Feed => "\u{1f525}",
        Tab::Chats => "\u{1f4ac}",
        Tab::Map => "\u{1f5fa}\u{fe0f}",
        Tab::Crews => "\u{1f465}",
        Tab::Profile => "\u{1f464}",
    }
}

/// Five-tab navigation bar.
#[component]
pub fn BottomNav(active_tab: Tab, on_tab_change: EventHandler<Tab>) -> Element {
    rsx! {
        nav { class: "bottom-nav glass-card",
            div { class: "bottom-nav-inner",
                for tab in Tab::all().iter().copied() {
                    {
                        let is_active = tab == active_tab;
                        let btn_class = if is_active { "nav-tab active" } else { "nav-tab" };
                        rsx! {
                            button {
                                key: "{tab}",
                                class: "{btn_class}",
                                onclick: move |_| on_tab_change.call(tab),
                                div { class: "nav-icon", "{tab_icon(tab)}" }
                                span { class: "nav-label", "{tab.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Page body with the bottom nav, unless `hide_nav` is set.
#[component]
pub fn AppLayout(
    active_tab: Tab,
    #[props(default = false)]
    hide_nav: bool,
    on_tab_change: EventHandler<Tab>,
    children: Element,
) -> Element {
    let main_class = if hide_nav { "app-main" } else { "app-main with-nav" };

    rsx! {
        div { class: "app-layout",
            main { class: "{main_class}", {children} }
            if !hide_nav {
                BottomNav { active_tab, on_tab_change }
            }
        }
    }
}
