//! Domain records shared by every screen.
//!
//! These are snapshots handed out by the mock store. Nothing here mutates
//! itself; screens copy what they need into their own state.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum number of characters in a plot.
pub const PLOT_CHAR_LIMIT: usize = 280;

/// A user's or plot's current mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    Chaos,
    Active,
    Chill,
    Ghost,
}

impl Vibe {
    /// Upper-case label shown on badges.
    pub fn label(&self) -> &'static str {
        match self {
            Vibe::Chaos => "CHAOS",
            Vibe::Active => "ACTIVE",
            Vibe::Chill => "CHILL",
            Vibe::Ghost => "GHOST",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Vibe::Chaos => "\u{1f525}",
            Vibe::Active => "\u{26a1}",
            Vibe::Chill => "\u{1f319}",
            Vibe::Ghost => "\u{1f47b}",
        }
    }

    /// Key used to build CSS class names (`vibe-chaos`, `glow-chaos`, ...).
    pub fn css_key(&self) -> &'static str {
        match self {
            Vibe::Chaos => "chaos",
            Vibe::Active => "active",
            Vibe::Chill => "chill",
            Vibe::Ghost => "ghost",
        }
    }

    pub fn all() -> &'static [Vibe] {
        &[Vibe::Chaos, Vibe::Active, Vibe::Chill, Vibe::Ghost]
    }

    /// Vibes a user can pick for a plot or their profile. Ghost is a mode,
    /// not a pick.
    pub fn selectable() -> &'static [Vibe] {
        &[Vibe::Chaos, Vibe::Active, Vibe::Chill]
    }

    /// Ghost suppresses presence and location indicators.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Vibe::Ghost)
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_key())
    }
}

impl FromStr for Vibe {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chaos" => Ok(Vibe::Chaos),
            "active" => Ok(Vibe::Active),
            "chill" => Ok(Vibe::Chill),
            "ghost" => Ok(Vibe::Ghost),
            _ => Err(CoreError::UnknownVibe(s.to_string())),
        }
    }
}

/// A named place, optionally with coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            lat: Some(lat),
            lng: Some(lng),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub current_vibe: Vibe,
    pub is_online: bool,
    pub location: Option<Location>,
}

impl User {
    /// Returns a copy of this user showing a different vibe.
    pub fn with_vibe(&self, vibe: Vibe) -> Self {
        Self {
            current_vibe: vibe,
            ..self.clone()
        }
    }

    pub fn is_ghost(&self) -> bool {
        self.current_vibe == Vibe::Ghost
    }
}

/// One of the four fixed reaction kinds on a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Fire,
    Heart,
    Laugh,
    Eyes,
}

impl Reaction {
    pub fn emoji(&self) -> &'static str {
        match self {
            Reaction::Fire => "\u{1f525}",
            Reaction::Heart => "\u{2764}\u{fe0f}",
            Reaction::Laugh => "\u{1f602}",
            Reaction::Eyes => "\u{1f440}",
        }
    }

    pub fn all() -> &'static [Reaction] {
        &[Reaction::Fire, Reaction::Heart, Reaction::Laugh, Reaction::Eyes]
    }
}

/// Fixed four-key reaction counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub fire: u32,
    pub heart: u32,
    pub laugh: u32,
    pub eyes: u32,
}

impl Reactions {
    pub fn new(fire: u32, heart: u32, laugh: u32, eyes: u32) -> Self {
        Self { fire, heart, laugh, eyes }
    }

    pub fn get(&self, reaction: Reaction) -> u32 {
        match reaction {
            Reaction::Fire => self.fire,
            Reaction::Heart => self.heart,
            Reaction::Laugh => self.laugh,
            Reaction::Eyes => self.eyes,
        }
    }

    /// Iterates counts in the fixed fire, heart, laugh, eyes order.
    pub fn iter(&self) -> impl Iterator<Item = (Reaction, u32)> + '_ {
        Reaction::all().iter().map(move |r| (*r, self.get(*r)))
    }
}

/// An ephemeral, time-bounded status post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub id: String,
    pub author: User,
    pub content: String,
    pub vibe: Vibe,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub pulling_up: Vec<User>,
    pub reactions: Reactions,
    pub comment_count: u32,
}

impl Plot {
    /// Expiry after creation, content within the character limit.
    pub fn is_well_formed(&self) -> bool {
        self.expires_at > self.created_at && self.content.chars().count() <= PLOT_CHAR_LIMIT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A named group sharing a chat and an invite code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crew {
    pub id: String,
    pub name: String,
    pub emoji: Option<String>,
    /// Display count; the roster in `members` is often partial.
    pub member_count: u32,
    pub members: Vec<User>,
    pub invite_code: String,
    pub last_activity: Option<DateTime<Utc>>,
    pub unread_count: Option<u32>,
}

impl Crew {
    /// Emoji shown for the crew, with a generic group fallback.
    pub fn display_emoji(&self) -> &str {
        self.emoji.as_deref().unwrap_or("\u{1f465}")
    }

    pub fn has_unread(&self) -> bool {
        self.unread_count.is_some_and(|n| n > 0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender: User,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub plot_embed: Option<Plot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Dm,
    Crew,
}

/// A direct or crew conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ChatKind,
    pub name: String,
    pub avatar: Option<String>,
    pub participants: Vec<User>,
    pub last_message: Option<Message>,
    pub unread_count: u32,
    /// Set for crew chats.
    pub crew: Option<Crew>,
}

impl Chat {
    /// The counterpart of a DM, or the first member of a crew chat.
    pub fn primary_participant(&self) -> Option<&User> {
        self.participants.first()
    }

    pub fn is_dm(&self) -> bool {
        self.kind == ChatKind::Dm
    }

    pub fn display_emoji(&self) -> &str {
        self.crew
            .as_ref()
            .map(Crew::display_emoji)
            .unwrap_or("\u{1f465}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PullingUp,
    VibeChange,
    NewPlot,
    Message,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub related_user: Option<User>,
    pub related_plot: Option<Plot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vibe_from_str() {
        assert_eq!("chaos".parse::<Vibe>(), Ok(Vibe::Chaos));
        assert_eq!(" Chill ".parse::<Vibe>(), Ok(Vibe::Chill));
        assert_eq!(
            "sleepy".parse::<Vibe>(),
            Err(CoreError::UnknownVibe("sleepy".to_string()))
        );
    }

    #[test]
    fn test_ghost_is_not_selectable() {
        assert!(!Vibe::selectable().contains(&Vibe::Ghost));
        assert!(!Vibe::Ghost.is_visible());
        assert!(Vibe::Chill.is_visible());
    }

    #[test]
    fn test_reactions_fixed_order() {
        let reactions = Reactions::new(12, 5, 3, 8);
        let counts: Vec<_> = reactions.iter().collect();
        assert_eq!(
            counts,
            vec![
                (Reaction::Fire, 12),
                (Reaction::Heart, 5),
                (Reaction::Laugh, 3),
                (Reaction::Eyes, 8),
            ]
        );
    }

    #[test]
    fn test_chat_kind_wire_name() {
        let json = serde_json::to_string(&ChatKind::Dm).unwrap();
        assert_eq!(json, "\"dm\"");
        let kind: NotificationKind = serde_json::from_str("\"pulling_up\"").unwrap();
        assert_eq!(kind, NotificationKind::PullingUp);
    }
}
