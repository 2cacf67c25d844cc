//! Application state shared by all HTTP handlers.

use parlor_core::ChatStore;

/// Shared application state holding the chat store.
///
/// `ChatStore` is itself a cheap `Arc`-backed handle, so cloning the state
/// per request shares the one store built in `main`.
#[derive(Clone)]
pub struct AppState {
    pub store: ChatStore,
}

impl AppState {
    /// Wire the state around a freshly constructed store.
    pub fn new(store: ChatStore) -> Self {
        Self { store }
    }
}
