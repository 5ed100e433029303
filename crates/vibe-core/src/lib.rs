//! Core of the VIBE_OS client.
//!
//! Holds everything that is not rendering: the domain records, the
//! in-memory mock store standing in for a backend, the view-state router,
//! the onboarding flow, and the small per-screen state machines. The UI
//! crates hold these in signals and render them.
//!
//! All of it is synchronous and pure with respect to a reference instant,
//! so it can be exercised without a window.

pub mod auth;
pub mod avatar;
pub mod error;
pub mod filter;
pub mod models;
pub mod router;
pub mod screens;
pub mod store;
pub mod time;

pub use auth::{AuthEvent, AuthFlow, AuthOutcome, AuthStep, OnboardingSlide, ONBOARDING_SLIDES};
pub use error::{CoreError, Result};
pub use filter::{filter_chats, filter_crews, map_pin_position, total_unread, visible_on_map, ChatFilter};
pub use models::{
    Chat, ChatKind, Comment, Crew, Location, Message, Notification, NotificationKind, Plot,
    Reaction, Reactions, User, Vibe, PLOT_CHAR_LIMIT,
};
pub use router::{NavEvent, NavState, Screen, Tab};
pub use store::MockStore;
