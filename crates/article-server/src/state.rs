//! Application state with a shared article store.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Uses `tokio::sync::Mutex` (async-aware) so handlers await
//! the lock without blocking the tokio runtime. There is one lock for the
//! whole store and no read/write split: every handler holds it across the
//! full scan and mutation, so no request ever observes a half-applied change.

use std::sync::Arc;

use article_store::{ArticleStore, InMemoryStore};

/// A store that can be moved across handler tasks.
pub type SharedStore = Box<dyn ArticleStore + Send>;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The article store (async Mutex, awaited by every handler).
    pub store: Arc<tokio::sync::Mutex<SharedStore>>,
}

impl AppState {
    /// Creates a new `AppState` owning the given store.
    pub fn new(store: impl ArticleStore + Send + 'static) -> Self {
        let store: SharedStore = Box::new(store);
        AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        }
    }

    /// Creates a new `AppState` holding the two sample articles.
    pub fn seeded() -> Self {
        Self::new(InMemoryStore::seeded())
    }

    /// Creates a new `AppState` with no articles.
    pub fn empty() -> Self {
        Self::new(InMemoryStore::new())
    }
}
