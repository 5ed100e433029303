//! Local state owned by individual screens.
//!
//! Each struct lives as long as its screen. Nothing here writes back to
//! the mock store, so leaving a screen discards its changes.

pub mod chat_room;
pub mod create_plot;
pub mod crews;
pub mod feed;
pub mod plot_detail;
pub mod profile;

pub use chat_room::ChatRoomState;
pub use create_plot::{NewPlot, PlotDraft, NEAR_LIMIT_THRESHOLD};
pub use crews::{CopyFeedback, JoinCrewState, COPY_FEEDBACK_SECS};
pub use feed::FeedState;
pub use plot_detail::{CommentThread, PlotDetailState};
pub use profile::ProfileState;
