use std::sync::Arc;

use chronolog_db::LazyClient;

use crate::recorder::RecorderClient;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Lazily opened database connection.
    pub db: Arc<LazyClient>,
    /// Client for the recorder's JSON-RPC endpoint.
    pub recorder: Arc<RecorderClient>,
}
