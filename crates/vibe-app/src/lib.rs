//! VIBE_OS desktop client.
//!
//! The root [`app::App`] component owns the navigation state and renders
//! exactly one screen from [`screens`]. Launch-time options live in
//! [`config`].

pub mod app;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod screens;
pub mod state;

/// App-specific CSS, layered over the shared component styles.
pub const APP_CSS: &str = include_str!("../assets/app.css");
