// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, live, site};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/live", get(live))
        .route("/site", get(site))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
