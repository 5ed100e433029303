//! Feed screen state: which plots the user is pulling up to and which
//! reactions they have added.

use std::collections::BTreeSet;

use crate::models::{Plot, Reaction, Reactions};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    /// Plot ids the user is pulling up to.
    pub pulling_up: BTreeSet<String>,
    /// Reactions the user added this session.
    pub my_reactions: BTreeSet<(String, Reaction)>,
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pulling_up(&self, plot_id: &str) -> bool {
        self.pulling_up.contains(plot_id)
    }

    /// Adds the plot if absent, removes it if present.
    pub fn toggle_pull_up(&mut self, plot_id: &str) {
        if !self.pulling_up.remove(plot_id) {
            self.pulling_up.insert(plot_id.to_string());
        }
        tracing::debug!(plot_id, pulling_up = self.is_pulling_up(plot_id), "Toggled pull up");
    }

    pub fn has_reacted(&self, plot_id: &str, reaction: Reaction) -> bool {
        self.my_reactions.contains(&(plot_id.to_string(), reaction))
    }

    pub fn toggle_reaction(&mut self, plot_id: &str, reaction: Reaction) {
        let key = (plot_id.to_string(), reaction);
        if !self.my_reactions.remove(&key) {
            self.my_reactions.insert(key);
        }
    }

    /// The plot's stored count plus the user's own reaction, if any.
    pub fn reaction_count(&self, plot: &Plot, reaction: Reaction) -> u32 {
        plot.reactions.get(reaction) + u32::from(self.has_reacted(&plot.id, reaction))
    }

    /// All four counts as displayed on the card.
    pub fn reactions_for(&self, plot: &Plot) -> Reactions {
        Reactions::new(
            self.reaction_count(plot, Reaction::Fire),
            self.reaction_count(plot, Reaction::Heart),
            self.reaction_count(plot, Reaction::Laugh),
            self.reaction_count(plot, Reaction::Eyes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;
    use chrono::Utc;

    #[test]
    fn test_toggle_pull_up_once_adds() {
        let mut feed = FeedState::new();
        feed.toggle_pull_up("p1");
        assert!(feed.is_pulling_up("p1"));
        assert_eq!(feed.pulling_up.len(), 1);
    }

    #[test]
    fn test_toggle_pull_up_twice_restores() {
        let mut feed = FeedState::new();
        feed.toggle_pull_up("p2");
        let before = feed.clone();
        feed.toggle_pull_up("p1");
        feed.toggle_pull_up("p1");
        assert_eq!(feed, before);
    }

    #[test]
    fn test_reaction_count_includes_mine() {
        let store = MockStore::seeded(Utc::now());
        let plot = store.plot("p4").unwrap();
        let mut feed = FeedState::new();
        assert_eq!(feed.reaction_count(plot, Reaction::Laugh), 0);
        feed.toggle_reaction("p4", Reaction::Laugh);
        assert_eq!(feed.reaction_count(plot, Reaction::Laugh), 1);
        assert_eq!(feed.reaction_count(plot, Reaction::Fire), 4);
        assert_eq!(feed.reactions_for(plot), Reactions::new(4, 2, 1, 6));
        feed.toggle_reaction("p4", Reaction::Laugh);
        assert_eq!(feed.reaction_count(plot, Reaction::Laugh), 0);
    }
}
