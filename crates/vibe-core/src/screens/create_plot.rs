//! Create-plot form state.

use crate::error::{CoreError, Result};
use crate::models::{Vibe, PLOT_CHAR_LIMIT};

/// Below this many remaining characters the counter is highlighted.
pub const NEAR_LIMIT_THRESHOLD: usize = 20;

/// A validated plot ready to post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlot {
    pub content: String,
    pub vibe: Vibe,
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotDraft {
    content: String,
    vibe: Vibe,
    pub location: String,
    pub show_location: bool,
}

impl Default for PlotDraft {
    fn default() -> Self {
        Self {
            content: String::new(),
            vibe: Vibe::Active,
            location: String::new(),
            show_location: false,
        }
    }
}

impl PlotDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn vibe(&self) -> Vibe {
        self.vibe
    }

    /// Replaces the content, cutting it at the character limit.
    pub fn set_content(&mut self, text: &str) {
        self.content = text.chars().take(PLOT_CHAR_LIMIT).collect();
    }

    /// Ghost cannot be picked for a plot.
    pub fn set_vibe(&mut self, vibe: Vibe) {
        if vibe.is_visible() {
            self.vibe = vibe;
        }
    }

    pub fn toggle_location(&mut self) {
        self.show_location = !self.show_location;
    }

    pub fn chars_left(&self) -> usize {
        PLOT_CHAR_LIMIT.saturating_sub(self.content.chars().count())
    }

    pub fn is_near_limit(&self) -> bool {
        self.chars_left() < NEAR_LIMIT_THRESHOLD
    }

    pub fn can_post(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Validates the draft into a postable plot.
    pub fn submit(&self) -> Result<NewPlot> {
        if !self.can_post() {
            return Err(CoreError::EmptyContent);
        }
        let len = self.content.chars().count();
        if len > PLOT_CHAR_LIMIT {
            return Err(CoreError::ContentTooLong { len, limit: PLOT_CHAR_LIMIT });
        }
        let location = if self.show_location && !self.location.trim().is_empty() {
            Some(self.location.trim().to_string())
        } else {
            None
        };
        Ok(NewPlot {
            content: self.content.clone(),
            vibe: self.vibe,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let draft = PlotDraft::new();
        assert_eq!(draft.vibe(), Vibe::Active);
        assert_eq!(draft.chars_left(), 280);
        assert!(!draft.can_post());
    }

    #[test]
    fn test_content_clamped() {
        let mut draft = PlotDraft::new();
        draft.set_content(&"x".repeat(300));
        assert_eq!(draft.content().chars().count(), 280);
        assert_eq!(draft.chars_left(), 0);
        assert!(draft.is_near_limit());
    }

    #[test]
    fn test_clamp_counts_characters() {
        let mut draft = PlotDraft::new();
        draft.set_content(&"\u{1f525}".repeat(281));
        assert_eq!(draft.content().chars().count(), 280);
    }

    #[test]
    fn test_ghost_not_pickable() {
        let mut draft = PlotDraft::new();
        draft.set_vibe(Vibe::Ghost);
        assert_eq!(draft.vibe(), Vibe::Active);
        draft.set_vibe(Vibe::Chill);
        assert_eq!(draft.vibe(), Vibe::Chill);
    }

    #[test]
    fn test_submit_whitespace_rejected() {
        let mut draft = PlotDraft::new();
        draft.set_content("   \n ");
        assert_eq!(draft.submit(), Err(CoreError::EmptyContent));
    }

    #[test]
    fn test_location_only_when_shown() {
        let mut draft = PlotDraft::new();
        draft.set_content("Pool session");
        draft.location = "Gigiri".to_string();
        assert_eq!(draft.submit().unwrap().location, None);

        draft.toggle_location();
        assert_eq!(draft.submit().unwrap().location.as_deref(), Some("Gigiri"));

        draft.location = "  ".to_string();
        assert_eq!(draft.submit().unwrap().location, None);
    }
}
