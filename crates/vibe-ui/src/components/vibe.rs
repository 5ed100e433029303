//! Vibe badge and vibe dot.

use dioxus::prelude::*;
use vibe_core::Vibe;

/// Size of a badge or indicator dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl BadgeSize {
    fn css(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "sm",
            BadgeSize::Md => "md",
            BadgeSize::Lg => "lg",
        }
    }
}

/// Pill showing the vibe emoji and, optionally, its label.
#[component]
pub fn VibeBadge(
    vibe: Vibe,
    #[props(default)]
    size: BadgeSize,
    #[props(default = true)]
    show_label: bool,
    #[props(default)]
    class: String,
) -> Element {
    let class_str = format!("vibe-badge vibe-bg-{} badge-{} {}", vibe.css_key(), size.css(), class);

    rsx! {
        span { class: "{class_str}",
            span { "{vibe.emoji()}" }
            if show_label {
                span { "{vibe.label()}" }
            }
        }
    }
}

/// Colored dot for a vibe, pulsing while the user is online.
#[component]
pub fn VibeIndicator(
    vibe: Vibe,
    #[props(default)]
    size: BadgeSize,
    #[props(default = false)]
    pulse: bool,
) -> Element {
    let pulse_class = if pulse { " pulse" } else { "" };
    let class_str = format!("vibe-dot vibe-bg-{} dot-{}{}", vibe.css_key(), size.css(), pulse_class);

    rsx! {
        span { class: "{class_str}" }
    }
}
