//! Integration tests for navigation and derived views.
//!
//! Tests cover:
//! - Tab changes reset to the tab's root screen
//! - Which screens hide the bottom bar
//! - The auth gate
//! - Chat search
//! - Plot time labels
//! - Pull-up toggling
//! - Blank comment submission

use chrono::{Duration, Utc};
use vibe_core::screens::{CommentThread, FeedState};
use vibe_core::time::{self, ExpiryStyle};
use vibe_core::{filter_chats, ChatFilter, MockStore, NavEvent, NavState, Screen, Tab};

fn nested_screens() -> Vec<Screen> {
    vec![
        Screen::Feed,
        Screen::CreatePlot,
        Screen::plot_detail("p1"),
        Screen::Chats,
        Screen::chat_room("chat2"),
        Screen::Crews,
        Screen::crew_detail("c3"),
        Screen::Map,
        Screen::Profile,
    ]
}

// ============================================================
// Router
// ============================================================

#[test]
fn test_change_tab_resets_to_root_from_any_screen() {
    for tab in Tab::all() {
        for prior in nested_screens() {
            let state = NavState::authenticated(Tab::Feed)
                .reduce(NavEvent::NavigateTo(prior.clone()))
                .reduce(NavEvent::ChangeTab(*tab));
            assert_eq!(state.active_tab, *tab, "tab after {prior:?}");
            assert_eq!(state.screen, tab.root_screen(), "screen after {prior:?}");
        }
    }
}

#[test]
fn test_root_screens() {
    assert_eq!(Tab::Feed.root_screen(), Screen::Feed);
    assert_eq!(Tab::Chats.root_screen(), Screen::Chats);
    assert_eq!(Tab::Map.root_screen(), Screen::Map);
    assert_eq!(Tab::Crews.root_screen(), Screen::Crews);
    assert_eq!(Tab::Profile.root_screen(), Screen::Profile);
}

#[test]
fn test_hide_nav_only_for_full_bleed_screens() {
    for screen in nested_screens() {
        let expected = matches!(screen, Screen::CreatePlot | Screen::ChatRoom { .. });
        let state = NavState::authenticated(Tab::Feed).reduce(NavEvent::NavigateTo(screen.clone()));
        assert_eq!(state.hide_nav(), expected, "{screen:?}");
    }
}

#[test]
fn test_auth_gate_overrides_screen_and_tab() {
    let mut state = NavState::new();
    for tab in Tab::all() {
        state.apply(NavEvent::ChangeTab(*tab));
        assert_eq!(state.visible_screen(), Screen::Auth);
        for screen in nested_screens() {
            state.apply(NavEvent::NavigateTo(screen));
            assert_eq!(state.visible_screen(), Screen::Auth);
        }
    }
    state.apply(NavEvent::CompleteAuth);
    assert_eq!(state.visible_screen(), state.screen);
}

// ============================================================
// Derived views
// ============================================================

#[test]
fn test_chat_search_day() {
    let store = MockStore::seeded(Utc::now());
    let found: Vec<_> = filter_chats(store.chats(), ChatFilter::All, "Day")
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(found, vec!["Day Ones"]);
}

#[test]
fn test_plot_time_labels() {
    let now = Utc::now();
    let store = MockStore::seeded(now);
    let plot = store.plot("p1").unwrap();
    assert_eq!(plot.created_at, now - Duration::minutes(15));
    assert_eq!(plot.expires_at, now + Duration::hours(23));

    let render_at = Utc::now();
    let hours = time::hours_left(render_at, plot.expires_at);
    assert!(hours == 22 || hours == 23, "hours left = {hours}");
    assert_eq!(time::time_ago(render_at, plot.created_at), "15 minutes ago");
    assert!(time::expiry_label(render_at, plot.expires_at, ExpiryStyle::Compact).ends_with("h left"));
}

// ============================================================
// Local screen state
// ============================================================

#[test]
fn test_pull_up_toggle_pairs() {
    let store = MockStore::seeded(Utc::now());
    let mut feed = FeedState::new();
    for plot in store.plots() {
        let before = feed.pulling_up.clone();
        feed.toggle_pull_up(&plot.id);
        let added: Vec<_> = feed.pulling_up.difference(&before).cloned().collect();
        assert_eq!(added, vec![plot.id.clone()]);
        feed.toggle_pull_up(&plot.id);
        assert_eq!(feed.pulling_up, before);
    }
}

#[test]
fn test_whitespace_comment_keeps_thread() {
    let store = MockStore::seeded(Utc::now());
    let mut thread = CommentThread::new(store.comments().to_vec());
    for blank in ["", " ", "\n\t  "] {
        thread.draft = blank.to_string();
        assert!(!thread.can_submit());
        assert!(thread.submit(Utc::now(), store.current_user()).is_none());
        assert_eq!(thread.comments.len(), store.comments().len());
    }
}
