//! System clipboard with a short "copied" acknowledgement.

use std::time::Duration;

use dioxus::prelude::*;
use vibe_core::screens::{CopyFeedback, COPY_FEEDBACK_SECS};

/// Writes `text` to the clipboard.
pub fn copy_text(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}

/// Copies `text` and flips `feedback` to copied, resetting it after
/// [`COPY_FEEDBACK_SECS`]. Clipboard failures are logged and leave the
/// feedback untouched.
pub fn copy_with_feedback(text: &str, mut feedback: Signal<CopyFeedback>) {
    match copy_text(text) {
        Ok(()) => {
            tracing::debug!(text, "Copied to clipboard");
            feedback.write().mark();
            spawn(async move {
                tokio::time::sleep(Duration::from_secs(COPY_FEEDBACK_SECS)).await;
                feedback.write().clear();
            });
        }
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {e}");
        }
    }
}
