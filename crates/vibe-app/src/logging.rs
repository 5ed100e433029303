//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILTER;

/// Picks the filter directive: `--log`, then `RUST_LOG`, then the default.
pub fn filter_directive(cli: Option<&str>, env: Option<&str>) -> String {
    cli.or(env)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_LOG_FILTER)
        .to_string()
}

/// Installs the global fmt subscriber.
pub fn init(cli: Option<&str>) -> anyhow::Result<()> {
    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(cli, env.as_deref());
    let filter = EnvFilter::try_new(&directive)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_wins_over_env() {
        assert_eq!(filter_directive(Some("vibe_app=debug"), Some("warn")), "vibe_app=debug");
    }

    #[test]
    fn test_env_then_default() {
        assert_eq!(filter_directive(None, Some("warn")), "warn");
        assert_eq!(filter_directive(None, None), DEFAULT_LOG_FILTER);
        assert_eq!(filter_directive(Some("  "), None), DEFAULT_LOG_FILTER);
    }
}
