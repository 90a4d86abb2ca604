pub mod health;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the recorder route tree.
///
/// ```text
/// POST /jsonrpc   recordChrono calls
/// GET  /health    service and database health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/jsonrpc", post(handlers::jsonrpc::handle_rpc))
        .merge(health::router())
}
