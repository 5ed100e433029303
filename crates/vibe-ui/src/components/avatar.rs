//! User avatar with vibe dot, and an overlapping avatar stack.

use dioxus::prelude::*;
use vibe_core::User;
use vibe_core::avatar::{avatar_stack, color_class, initial};

use super::vibe::{BadgeSize, VibeIndicator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl AvatarSize {
    fn css(&self) -> &'static str {
        match self {
            AvatarSize::Sm => "avatar-sm",
            AvatarSize::Md => "avatar-md",
            AvatarSize::Lg => "avatar-lg",
            AvatarSize::Xl => "avatar-xl",
        }
    }

    fn dot_size(&self) -> BadgeSize {
        match self {
            AvatarSize::Sm | AvatarSize::Md => BadgeSize::Sm,
            AvatarSize::Lg | AvatarSize::Xl => BadgeSize::Md,
        }
    }
}

/// Round avatar showing the picture or initial. Ghost users are dimmed and
/// never show a vibe dot.
#[component]
pub fn UserAvatar(
    user: User,
    #[props(default)]
    size: AvatarSize,
    #[props(default = true)]
    show_vibe: bool,
    #[props(default)]
    class: String,
) -> Element {
    let ghost_class = if user.is_ghost() { " ghost" } else { "" };
    let face_class = format!("avatar-face {} {}{}", size.css(), color_class(&user), ghost_class);
    let text_class = if user.current_vibe == vibe_core::Vibe::Active { "avatar-initial dark" } else { "avatar-initial" };
    let letter = initial(&user);
    let show_dot = show_vibe && !user.is_ghost();

    rsx! {
        div { class: "avatar {class}",
            div { class: "{face_class}",
                if let Some(src) = &user.avatar {
                    img { class: "avatar-img", src: "{src}", alt: "{user.display_name}" }
                } else {
                    span { class: "{text_class}", "{letter}" }
                }
            }
            if show_dot {
                div { class: "avatar-dot",
                    VibeIndicator { vibe: user.current_vibe, size: size.dot_size(), pulse: user.is_online }
                }
            }
        }
    }
}

/// Overlapping avatars with a "+N" chip for the overflow.
#[component]
pub fn AvatarStack(
    users: Vec<User>,
    #[props(default = 3)]
    max: usize,
    #[props(default = AvatarSize::Sm)]
    size: AvatarSize,
) -> Element {
    let (shown, remaining) = avatar_stack(&users, max);
    let chip_class = format!("avatar-more {}", size.css());

    rsx! {
        div { class: "avatar-stack",
            for user in shown.iter() {
                UserAvatar {
                    key: "{user.id}",
                    user: user.clone(),
                    size,
                    show_vibe: false,
                    class: "stacked",
                }
            }
            if remaining > 0 {
                div { class: "{chip_class}", "+{remaining}" }
            }
        }
    }
}
