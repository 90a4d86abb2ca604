pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the collector route tree.
///
/// ```text
/// GET /collect    read time logs and forward them to the recorder
/// GET /health     service and database health
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/collect", get(handlers::collect::collect))
        .merge(health::router())
}
