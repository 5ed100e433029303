//! Presentational components.

pub mod avatar;
pub mod header;
pub mod nav;
pub mod plot_card;
pub mod vibe;
