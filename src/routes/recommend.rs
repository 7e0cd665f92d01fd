use crate::error::{AppError, Result};
use crate::models::{RecommendationResponse, RouteRequest};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /recommend-route
/// Rank candidate routes between two places and explain the best one
pub async fn recommend_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RecommendationResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        origin = %request.origin,
        destination = %request.destination,
        uid = ?request.uid,
        "Route recommendation request: {} -> {}",
        request.origin, request.destination
    );

    let response = state.recommender.recommend(&request).await?;
    Ok(Json(response))
}
