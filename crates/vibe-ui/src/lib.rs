//! Shared UI components for VIBE_OS.
//!
//! Presentational pieces only: avatars, vibe badges, the plot card, the
//! bottom navigation and the layout around it. Components take data and
//! callbacks as props and hold no source of truth of their own.

pub mod components;
pub mod theme;

pub use components::avatar::{AvatarSize, AvatarStack, UserAvatar};
pub use components::header::{BackHeader, NotFound};
pub use components::nav::{AppLayout, BottomNav};
pub use components::plot_card::PlotCard;
pub use components::vibe::{BadgeSize, VibeBadge, VibeIndicator};
pub use theme::{Theme, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, vibe colors and component styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
