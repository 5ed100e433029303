//! Shared app state provided via Dioxus context.

use std::sync::Arc;

use chrono::Utc;
use dioxus::prelude::*;
use vibe_core::MockStore;

/// Read-only data every screen can reach.
///
/// Screen-local mutations never go through here; each screen keeps its own
/// signal seeded from the store.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: Signal<Arc<MockStore>>,
}

impl AppContext {
    /// Seeds the mock store relative to the current instant.
    pub fn seeded() -> Self {
        Self {
            store: Signal::new(Arc::new(MockStore::seeded(Utc::now()))),
        }
    }
}

/// Shorthand for the store held in context.
pub fn use_store() -> Arc<MockStore> {
    let ctx = use_context::<AppContext>();
    ctx.store.read().clone()
}
