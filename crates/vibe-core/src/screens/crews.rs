//! Crew screens: joining by invite code and copy-to-clipboard feedback.

use crate::error::{CoreError, Result};
use crate::store::MockStore;

/// How long the "copied" state stays visible.
pub const COPY_FEEDBACK_SECS: u64 = 2;

/// Transient "copied" flag shown after a copy button is pressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
}

impl CopyFeedback {
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn mark(&mut self) {
        self.copied = true;
    }

    pub fn clear(&mut self) {
        self.copied = false;
    }
}

/// The "Enter Code" prompt on the crews list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinCrewState {
    pub is_open: bool,
    pub code: String,
    pub error: Option<String>,
}

impl JoinCrewState {
    pub fn open(&mut self) {
        self.is_open = true;
        self.code.clear();
        self.error = None;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.error = None;
    }

    pub fn can_submit(&self) -> bool {
        !self.code.trim().is_empty()
    }

    /// Resolves the entered code to a crew id.
    pub fn lookup(&mut self, store: &MockStore) -> Result<String> {
        match store.crew_by_invite_code(&self.code) {
            Some(crew) => {
                self.error = None;
                Ok(crew.id.clone())
            }
            None => {
                let err = CoreError::UnknownInviteCode(self.code.trim().to_string());
                self.error = Some("No crew with that code".to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_copy_feedback() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_copied());
        feedback.mark();
        assert!(feedback.is_copied());
        feedback.clear();
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_join_by_code() {
        let store = MockStore::seeded(Utc::now());
        let mut join = JoinCrewState::default();
        join.open();
        join.code = "work-squad".to_string();
        assert_eq!(join.lookup(&store), Ok("c2".to_string()));
        assert!(join.error.is_none());
    }

    #[test]
    fn test_join_unknown_code() {
        let store = MockStore::seeded(Utc::now());
        let mut join = JoinCrewState::default();
        join.open();
        join.code = " BOGUS ".to_string();
        assert_eq!(
            join.lookup(&store),
            Err(CoreError::UnknownInviteCode("BOGUS".to_string()))
        );
        assert!(join.error.is_some());
        join.close();
        assert!(!join.is_open);
        assert!(join.error.is_none());
    }
}
