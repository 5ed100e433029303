//! Command line and environment configuration.

use std::sync::OnceLock;

use clap::Parser;
use vibe_core::{NavEvent, NavState, Tab};

/// Default log filter when neither `--log` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "vibe_app=info,vibe_core=info";

/// Phone-shaped default window.
pub const DEFAULT_WINDOW_SIZE: (f64, f64) = (430.0, 900.0);

/// Global storage for the launch configuration.
static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "vibe-os")]
#[command(about = "Status broadcasting for your crew")]
pub struct Args {
    /// Skip the onboarding flow and start signed in
    #[arg(long)]
    pub skip_auth: bool,

    /// Initial tab (feed, chats, map, crews, profile)
    #[arg(short, long)]
    pub tab: Option<Tab>,

    /// Log filter directive, e.g. "vibe_app=debug"
    #[arg(long)]
    pub log: Option<String>,
}

/// Options read by the root component on first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub start_authenticated: bool,
    pub initial_tab: Tab,
}

impl From<&Args> for AppConfig {
    fn from(args: &Args) -> Self {
        Self {
            start_authenticated: args.skip_auth,
            initial_tab: args.tab.unwrap_or_default(),
        }
    }
}

impl AppConfig {
    /// Navigation state the app starts in.
    pub fn initial_nav(&self) -> NavState {
        if self.start_authenticated {
            NavState::authenticated(self.initial_tab)
        } else {
            NavState::new().reduce(NavEvent::ChangeTab(self.initial_tab))
        }
    }

    /// Stores the config for the root component. Later calls are ignored.
    pub fn install(self) {
        if APP_CONFIG.set(self).is_err() {
            tracing::warn!("App config already installed");
        }
    }

    /// The installed config, or defaults when none was installed.
    pub fn current() -> AppConfig {
        APP_CONFIG.get().copied().unwrap_or_default()
    }
}

/// Optional window geometry from `VIBE_WIN_*` variables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub size: (f64, f64),
    pub position: Option<(f64, f64)>,
}

impl WindowGeometry {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds geometry from a variable lookup. Size needs both width and
    /// height, position needs both x and y; otherwise the default applies.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        let size = match (read("VIBE_WIN_W"), read("VIBE_WIN_H")) {
            (Some(w), Some(h)) => (w, h),
            _ => DEFAULT_WINDOW_SIZE,
        };
        let position = match (read("VIBE_WIN_X"), read("VIBE_WIN_Y")) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        };

        Self { size, position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use vibe_core::Screen;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("vibe-os").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_start_at_auth() {
        let config = AppConfig::from(&parse(&[]));
        assert_eq!(config, AppConfig::default());

        let nav = config.initial_nav();
        assert!(!nav.is_authenticated);
        assert_eq!(nav.visible_screen(), Screen::Auth);
    }

    #[test]
    fn test_skip_auth_with_tab() {
        let config = AppConfig::from(&parse(&["--skip-auth", "--tab", "crews"]));
        assert!(config.start_authenticated);
        assert_eq!(config.initial_tab, Tab::Crews);

        let nav = config.initial_nav();
        assert_eq!(nav.visible_screen(), Screen::Crews);
        assert_eq!(nav.active_tab, Tab::Crews);
    }

    #[test]
    fn test_tab_without_skip_auth_applies_after_auth() {
        let config = AppConfig::from(&parse(&["--tab", "Map"]));
        let nav = config.initial_nav();
        assert_eq!(nav.visible_screen(), Screen::Auth);

        let nav = nav.reduce(NavEvent::CompleteAuth);
        assert_eq!(nav.visible_screen(), Screen::Map);
    }

    #[test]
    fn test_unknown_tab_rejected() {
        let result = Args::try_parse_from(["vibe-os", "--tab", "settings"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_filter_passthrough() {
        let args = parse(&["--log", "vibe_app=debug"]);
        assert_eq!(args.log.as_deref(), Some("vibe_app=debug"));
    }

    #[test]
    fn test_window_geometry() {
        let vars: HashMap<&str, &str> = [
            ("VIBE_WIN_W", "500"),
            ("VIBE_WIN_H", "1000"),
            ("VIBE_WIN_X", "10"),
        ]
        .into_iter()
        .collect();
        let geometry = WindowGeometry::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(geometry.size, (500.0, 1000.0));
        assert_eq!(geometry.position, None);

        let empty = WindowGeometry::from_lookup(|_| None);
        assert_eq!(empty.size, DEFAULT_WINDOW_SIZE);
    }
}
