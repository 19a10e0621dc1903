//! Application state shared across all request handlers.
//!
//! `AppState` carries the two long-lived resources every handler needs: the
//! record store and the identity provider. It is built once at startup and
//! handed to the router; Axum clones it into each handler via state
//! extraction.

use std::sync::Arc;

use crate::{identity::IdentityProvider, store::RecordStore};

/// Shared resources for request handling.
///
/// Built once during server startup and cloned per request. Both fields are
/// reference-counted underneath, so the clone is cheap and every handler
/// sees the same backend connections.
#[derive(Clone)]
pub struct AppState {
    /// Record store backing every collection.
    ///
    /// Clones share the underlying backend. Handlers pass a reference into
    /// the service they construct for the request.
    pub store: RecordStore,

    /// Identity provider for account creation, password checks, and resets.
    ///
    /// Trait object so tests can run against the in-memory provider while
    /// production talks to the managed service over REST.
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `store` - Record store backing every collection
    /// - `identity` - Identity provider for account management
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(store: RecordStore, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }
}
