//! Chat room state with optimistic local sends.

use chrono::{DateTime, Utc};

use crate::models::{Message, User};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatRoomState {
    /// Messages in send order.
    pub messages: Vec<Message>,
    pub draft: String,
    next_seq: u32,
}

impl ChatRoomState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            draft: String::new(),
            next_seq: 0,
        }
    }

    pub fn can_send(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Appends the draft as a message from `sender` and clears the draft.
    pub fn send(&mut self, now: DateTime<Utc>, sender: &User) -> Option<Message> {
        if !self.can_send() {
            return None;
        }
        self.next_seq += 1;
        let message = Message {
            id: format!("msg-{}-{}", now.timestamp_millis(), self.next_seq),
            sender: sender.clone(),
            content: std::mem::take(&mut self.draft),
            created_at: now,
            is_read: false,
            plot_embed: None,
        };
        self.messages.push(message.clone());
        tracing::debug!(id = %message.id, count = self.messages.len(), "Message appended");
        Some(message)
    }

    pub fn is_own(message: &Message, me: &User) -> bool {
        message.sender.id == me.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;

    #[test]
    fn test_send_appends_in_order() {
        let store = MockStore::seeded(Utc::now());
        let me = store.current_user();
        let mut room = ChatRoomState::new(store.messages().to_vec());
        let now = Utc::now();

        room.draft = "first".to_string();
        let a = room.send(now, me).unwrap();
        room.draft = "second".to_string();
        let b = room.send(now, me).unwrap();

        assert_ne!(a.id, b.id);
        let tail: Vec<_> = room.messages.iter().rev().take(2).map(|m| m.content.as_str()).collect();
        assert_eq!(tail, vec!["second", "first"]);
        assert!(room.draft.is_empty());
        assert!(ChatRoomState::is_own(&b, me));
    }

    #[test]
    fn test_blank_draft_not_sent() {
        let store = MockStore::seeded(Utc::now());
        let mut room = ChatRoomState::new(store.messages().to_vec());
        room.draft = "  ".to_string();
        assert!(!room.can_send());
        assert!(room.send(Utc::now(), store.current_user()).is_none());
        assert_eq!(room.messages.len(), 5);
        assert_eq!(room.draft, "  ");
    }
}
