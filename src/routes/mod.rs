pub mod debug;
pub mod recommend;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(debug::root))
        .route("/recommend-route", post(recommend::recommend_route))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
