//! View-state router.
//!
//! A single tagged value says which screen is on display; the bottom
//! navigation tab is tracked alongside it. Transitions are a pure reducer
//! over [`NavEvent`]s. There is no history stack: back buttons navigate to
//! a fixed target.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Bottom navigation tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Feed,
    Chats,
    Map,
    Crews,
    Profile,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Chats => "Chats",
            Tab::Map => "Map",
            Tab::Crews => "Crews",
            Tab::Profile => "Profile",
        }
    }

    /// Tabs in bottom-bar order.
    pub fn all() -> &'static [Tab] {
        &[Tab::Feed, Tab::Chats, Tab::Map, Tab::Crews, Tab::Profile]
    }

    /// The screen a tab resets to when selected.
    pub fn root_screen(&self) -> Screen {
        match self {
            Tab::Feed => Screen::Feed,
            Tab::Chats => Screen::Chats,
            Tab::Map => Screen::Map,
            Tab::Crews => Screen::Crews,
            Tab::Profile => Screen::Profile,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::all()
            .iter()
            .copied()
            .find(|t| t.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownTab(s.to_string()))
    }
}

/// Which screen is active, with the id it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Auth,
    Feed,
    CreatePlot,
    PlotDetail { plot_id: String },
    Chats,
    ChatRoom { chat_id: String },
    Crews,
    CrewDetail { crew_id: String },
    Map,
    Profile,
}

impl Screen {
    /// Full-bleed screens render without the bottom bar.
    pub fn hides_nav(&self) -> bool {
        matches!(self, Screen::CreatePlot | Screen::ChatRoom { .. })
    }

    pub fn plot_detail(plot_id: impl Into<String>) -> Self {
        Screen::PlotDetail { plot_id: plot_id.into() }
    }

    pub fn chat_room(chat_id: impl Into<String>) -> Self {
        Screen::ChatRoom { chat_id: chat_id.into() }
    }

    pub fn crew_detail(crew_id: impl Into<String>) -> Self {
        Screen::CrewDetail { crew_id: crew_id.into() }
    }
}

/// User navigation intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    CompleteAuth,
    ChangeTab(Tab),
    NavigateTo(Screen),
}

/// Root navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub is_authenticated: bool,
    pub active_tab: Tab,
    pub screen: Screen,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    /// Unauthenticated, on the feed tab.
    pub fn new() -> Self {
        Self {
            is_authenticated: false,
            active_tab: Tab::Feed,
            screen: Screen::Feed,
        }
    }

    /// Starts signed in on the given tab's root screen.
    pub fn authenticated(tab: Tab) -> Self {
        Self {
            is_authenticated: true,
            active_tab: tab,
            screen: tab.root_screen(),
        }
    }

    /// Pure transition: returns the state after `event`.
    pub fn reduce(mut self, event: NavEvent) -> Self {
        self.apply(event);
        self
    }

    /// Applies `event` in place.
    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::CompleteAuth => {
                tracing::debug!("Auth completed");
                self.is_authenticated = true;
            }
            NavEvent::ChangeTab(tab) => {
                tracing::debug!(tab = %tab, "Tab changed");
                self.active_tab = tab;
                self.screen = tab.root_screen();
            }
            NavEvent::NavigateTo(screen) => {
                tracing::debug!(from = ?self.screen, to = ?screen, "Navigate");
                self.screen = screen;
            }
        }
    }

    /// The screen to render. The auth flow gates everything else.
    pub fn visible_screen(&self) -> Screen {
        if self.is_authenticated {
            self.screen.clone()
        } else {
            Screen::Auth
        }
    }

    /// Derived from `screen` alone; the auth flow renders outside the layout.
    pub fn hide_nav(&self) -> bool {
        self.screen.hides_nav()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavState::new();
        assert!(!state.is_authenticated);
        assert_eq!(state.active_tab, Tab::Feed);
        assert_eq!(state.screen, Screen::Feed);
        assert_eq!(state.visible_screen(), Screen::Auth);
    }

    #[test]
    fn test_complete_auth_reveals_screen() {
        let state = NavState::new().reduce(NavEvent::CompleteAuth);
        assert!(state.is_authenticated);
        assert_eq!(state.visible_screen(), Screen::Feed);
    }

    #[test]
    fn test_navigate_keeps_tab() {
        let state = NavState::authenticated(Tab::Crews)
            .reduce(NavEvent::NavigateTo(Screen::crew_detail("c1")));
        assert_eq!(state.active_tab, Tab::Crews);
        assert_eq!(state.screen, Screen::crew_detail("c1"));
    }

    #[test]
    fn test_change_tab_drops_nested_screen() {
        let state = NavState::authenticated(Tab::Chats)
            .reduce(NavEvent::NavigateTo(Screen::chat_room("chat1")))
            .reduce(NavEvent::ChangeTab(Tab::Chats));
        assert_eq!(state.screen, Screen::Chats);
    }

    #[test]
    fn test_tab_from_str() {
        assert_eq!("map".parse::<Tab>(), Ok(Tab::Map));
        assert_eq!("PROFILE".parse::<Tab>(), Ok(Tab::Profile));
        assert!("settings".parse::<Tab>().is_err());
    }
}
