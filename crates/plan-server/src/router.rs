use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with the plan endpoints mounted under `prefix`.
///
/// `prefix` must be empty or start with `/` and have no trailing slash (see
/// [`ServerConfig::normalized_prefix`](crate::ServerConfig::normalized_prefix)).
pub fn build_router(state: AppState, prefix: &str) -> Router {
    let plans = Router::new()
        .route("/plan", post(handler::create_plan))
        .route("/plan/:id", get(handler::get_plan).delete(handler::delete_plan))
        .route("/plans", get(handler::list_plans));

    let app = if prefix.is_empty() {
        plans
    } else {
        Router::new().nest(prefix, plans)
    };

    app.route("/health", get(handler::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
