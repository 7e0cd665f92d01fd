use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "ZenWay Backend Running!" }))
}

/// GET /debug/health - Report which upstreams are live
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let route_source = if state.recommender.route_source().is_live() {
        "live"
    } else {
        "builtin"
    };
    let explanation = if state.recommender.explanation().is_live() {
        "live"
    } else {
        "canned"
    };

    Json(json!({
        "status": "ok",
        "checks": {
            "route_source": route_source,
            "explanation": explanation,
        }
    }))
}
