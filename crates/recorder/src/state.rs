use std::sync::Arc;

use chronolog_db::LazyClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Lazily opened database connection.
    pub db: Arc<LazyClient>,
}
