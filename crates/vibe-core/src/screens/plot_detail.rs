//! Plot detail state: the comment thread and the local pull-up toggle.

use chrono::{DateTime, Utc};

use crate::models::{Comment, User};

/// Pull-up toggle on the detail screen. Independent of the feed's set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotDetailState {
    pub pulling_up: bool,
}

impl PlotDetailState {
    pub fn toggle_pull_up(&mut self) {
        self.pulling_up = !self.pulling_up;
    }
}

/// Comments under a plot plus the comment being written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
    pub draft: String,
    next_seq: u32,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            draft: String::new(),
            next_seq: 0,
        }
    }

    /// The submit control is enabled only for non-blank drafts.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Appends the draft as a comment by `author`. Blank drafts are ignored.
    pub fn submit(&mut self, now: DateTime<Utc>, author: &User) -> Option<Comment> {
        if !self.can_submit() {
            return None;
        }
        self.next_seq += 1;
        let comment = Comment {
            id: format!("comment-{}-{}", now.timestamp_millis(), self.next_seq),
            author: author.clone(),
            content: self.draft.trim().to_string(),
            created_at: now,
        };
        self.comments.push(comment.clone());
        self.draft.clear();
        tracing::debug!(id = %comment.id, "Comment added");
        Some(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn test_whitespace_comment_ignored() {
        let store = MockStore::seeded(Utc::now());
        let mut thread = CommentThread::new(store.comments().to_vec());
        thread.draft = "   \t".to_string();
        assert!(!thread.can_submit());
        assert!(thread.submit(Utc::now(), store.current_user()).is_none());
        assert_eq!(thread.comments, store.comments());
        assert!(!thread.can_submit());
    }

    #[test]
    fn test_comment_appended_and_draft_cleared() {
        let store = MockStore::seeded(Utc::now());
        let mut thread = CommentThread::new(store.comments().to_vec());
        thread.draft = " omw ".to_string();
        let comment = thread.submit(Utc::now(), store.current_user()).unwrap();
        assert_eq!(comment.content, "omw");
        assert_eq!(thread.comments.len(), 4);
        assert_eq!(thread.comments.last(), Some(&comment));
        assert!(thread.draft.is_empty());
    }

    #[test]
    fn test_detail_pull_up_toggle() {
        let mut state = PlotDetailState::default();
        state.toggle_pull_up();
        assert!(state.pulling_up);
        state.toggle_pull_up();
        assert!(!state.pulling_up);
    }
}
