//! Theme system for VIBE_OS.
//!
//! The app is always dark; the enum exists so the root carries a
//! `data-theme` attribute the stylesheet keys on.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Near-black surfaces with vibe-colored glows.
    #[default]
    Tactical,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Tactical => "tactical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Tactical => "Always dark mode",
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(Theme::default);

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
