use std::sync::Arc;

use signet_db::UserStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; inner data is behind `Arc`.
///
/// The store is held as a trait object so tests can substitute an in-memory
/// implementation for the PostgreSQL one.
#[derive(Clone)]
pub struct AppState {
    /// User persistence, treated as an opaque query executor.
    pub store: Arc<dyn UserStore>,
    /// Server configuration (session secret, cookie policy, CORS).
    pub config: Arc<ServerConfig>,
}
