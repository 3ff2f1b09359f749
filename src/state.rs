//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the single in-memory item store behind an async `RwLock`, so
//! each handler's read-modify-write is atomic with respect to the others.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::items::ItemStore;

/// Shared application state. Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self { items: Arc::new(RwLock::new(ItemStore::new())) }
    }
}
