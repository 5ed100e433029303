//! Error type for the VIBE_OS core.
//!
//! Missing plots, chats and crews are not errors: lookups return `Option`
//! and the screens render a placeholder. These variants cover parsing and
//! local form submission only.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by parsing and local form submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A vibe name did not match any known vibe.
    #[error("Unknown vibe: {0}")]
    UnknownVibe(String),

    /// A tab name did not match any bottom navigation tab.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// The draft has no content besides whitespace.
    #[error("Content is empty")]
    EmptyContent,

    /// The draft exceeds the character limit.
    #[error("Content is {len} characters, limit is {limit}")]
    ContentTooLong { len: usize, limit: usize },

    /// No crew uses the given invite code.
    #[error("No crew with invite code {0}")]
    UnknownInviteCode(String),
}
