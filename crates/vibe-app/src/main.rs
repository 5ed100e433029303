//! Entry point for the VIBE_OS desktop app.

use clap::Parser;
use dioxus::desktop::{Config, LogicalPosition, LogicalSize, WindowBuilder};

use vibe_app::config::{AppConfig, Args, WindowGeometry};
use vibe_app::{logging, APP_CSS};
use vibe_ui::SHARED_CSS;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log.as_deref())?;

    let config = AppConfig::from(&args);
    tracing::info!(
        skip_auth = config.start_authenticated,
        tab = %config.initial_tab,
        "Starting VIBE_OS"
    );
    config.install();

    let geometry = WindowGeometry::from_env();
    let (w, h) = geometry.size;

    let mut wb = WindowBuilder::new()
        .with_title("VIBE_OS")
        .with_inner_size(LogicalSize::new(w, h))
        .with_maximized(false);

    if let Some((x, y)) = geometry.position {
        wb = wb.with_position(LogicalPosition::new(x, y));
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(wb)
                .with_custom_head(format!(
                    r#"<style>{}</style><style>{}</style>"#,
                    SHARED_CSS, APP_CSS,
                )),
        )
        .launch(vibe_app::app::App);

    Ok(())
}
