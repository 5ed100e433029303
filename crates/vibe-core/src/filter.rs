//! List filters for the chats, crews and map screens.

use crate::models::{Chat, ChatKind, Crew, User};

/// Category tabs on the chats screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatFilter {
    #[default]
    All,
    Dms,
    Crews,
}

impl ChatFilter {
    pub fn label(&self) -> &'static str {
        match self {
            ChatFilter::All => "All",
            ChatFilter::Dms => "DMs",
            ChatFilter::Crews => "Crews",
        }
    }

    pub fn all() -> &'static [ChatFilter] {
        &[ChatFilter::All, ChatFilter::Dms, ChatFilter::Crews]
    }

    fn admits(&self, kind: ChatKind) -> bool {
        match self {
            ChatFilter::All => true,
            ChatFilter::Dms => kind == ChatKind::Dm,
            ChatFilter::Crews => kind == ChatKind::Crew,
        }
    }
}

fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
}

/// Chats in the category whose name contains `query`, ignoring case.
pub fn filter_chats<'a>(chats: &'a [Chat], filter: ChatFilter, query: &str) -> Vec<&'a Chat> {
    chats
        .iter()
        .filter(|c| filter.admits(c.kind) && name_matches(&c.name, query))
        .collect()
}

/// Sum of unread counts across all chats.
pub fn total_unread(chats: &[Chat]) -> u32 {
    chats.iter().map(|c| c.unread_count).sum()
}

/// Crews whose name contains `query`, ignoring case.
pub fn filter_crews<'a>(crews: &'a [Crew], query: &str) -> Vec<&'a Crew> {
    crews.iter().filter(|c| name_matches(&c.name, query)).collect()
}

/// Users that appear on the map: located and not in ghost mode.
pub fn visible_on_map(users: &[User]) -> Vec<&User> {
    users
        .iter()
        .filter(|u| u.location.is_some() && u.current_vibe.is_visible())
        .collect()
}

const PIN_POSITIONS: [(u8, u8); 5] = [(25, 30), (40, 60), (55, 25), (35, 75), (60, 55)];

/// Placeholder pin position as (top %, left %), cycled by list index.
pub fn map_pin_position(index: usize) -> (u8, u8) {
    PIN_POSITIONS[index % PIN_POSITIONS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;
    use chrono::Utc;

    fn names(chats: &[&Chat]) -> Vec<String> {
        chats.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn test_chat_category_filter() {
        let store = MockStore::seeded(Utc::now());
        let dms = filter_chats(store.chats(), ChatFilter::Dms, "");
        assert_eq!(names(&dms), vec!["Kael", "Zara"]);
        let crews = filter_chats(store.chats(), ChatFilter::Crews, "");
        assert_eq!(names(&crews), vec!["Day Ones", "Work Fam"]);
        assert_eq!(filter_chats(store.chats(), ChatFilter::All, "").len(), 4);
    }

    #[test]
    fn test_chat_query_is_case_insensitive() {
        let store = MockStore::seeded(Utc::now());
        let found = filter_chats(store.chats(), ChatFilter::All, "wORK");
        assert_eq!(names(&found), vec!["Work Fam"]);
        assert!(filter_chats(store.chats(), ChatFilter::Dms, "day").is_empty());
    }

    #[test]
    fn test_total_unread() {
        let store = MockStore::seeded(Utc::now());
        assert_eq!(total_unread(store.chats()), 5);
    }

    #[test]
    fn test_filter_crews() {
        let store = MockStore::seeded(Utc::now());
        let found: Vec<_> = filter_crews(store.crews(), "bros").iter().map(|c| c.id.clone()).collect();
        assert_eq!(found, vec!["c3"]);
        assert_eq!(filter_crews(store.crews(), "").len(), 3);
    }

    #[test]
    fn test_map_excludes_ghosts() {
        let store = MockStore::seeded(Utc::now());
        let visible: Vec<_> = visible_on_map(store.users()).iter().map(|u| u.id.clone()).collect();
        assert_eq!(visible, vec!["1", "2", "3", "5"]);
    }

    #[test]
    fn test_pin_positions_cycle() {
        assert_eq!(map_pin_position(0), (25, 30));
        assert_eq!(map_pin_position(5), map_pin_position(0));
    }
}
