use crate::config::Config;
use crate::error::{AppError, Result};
use crate::fixtures;
use crate::models::{
    HealthProfile, RecommendationResponse, RerouteOption, Route, RouteRequest, ScoredRoute,
};
use crate::services::air_quality::{AirQualitySource, JitterEstimator};
use crate::services::explanation::ExplanationService;
use crate::services::route_source::RouteSource;
use crate::services::scoring::score_route;
use futures::future::join_all;
use std::sync::Arc;

/// Sort best-first. Stable, so equal scores keep candidate order.
pub fn sort_by_score(routes: &mut [ScoredRoute]) {
    routes.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Fetches candidates, enriches and scores them, ranks them, and asks the
/// explanation service for a recommendation.
pub struct Recommender {
    route_source: RouteSource,
    air_quality: Arc<dyn AirQualitySource>,
    explanation: ExplanationService,
    health_profile: HealthProfile,
    reroute_options: Vec<RerouteOption>,
}

impl Recommender {
    pub fn new(
        route_source: RouteSource,
        air_quality: Arc<dyn AirQualitySource>,
        explanation: ExplanationService,
    ) -> Self {
        Recommender {
            route_source,
            air_quality,
            explanation,
            health_profile: fixtures::default_health_profile(),
            reroute_options: fixtures::reroute_options(),
        }
    }

    /// Wire live or built-in collaborators according to `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            RouteSource::new(config.route_source.as_ref())?,
            Arc::new(JitterEstimator::default()),
            ExplanationService::new(config.explanation.as_ref())?,
        ))
    }

    pub fn with_health_profile(mut self, health_profile: HealthProfile) -> Self {
        self.health_profile = health_profile;
        self
    }

    pub fn route_source(&self) -> &RouteSource {
        &self.route_source
    }

    pub fn explanation(&self) -> &ExplanationService {
        &self.explanation
    }

    /// Ranked candidates for an origin/destination pair.
    ///
    /// Fails only when nothing survives enrichment.
    pub async fn rank(&self, origin: &str, destination: &str) -> Result<Vec<ScoredRoute>> {
        let candidates = self.route_source.get_routes(origin, destination).await;
        let candidate_count = candidates.len();

        let ranked = self.rank_candidates(candidates).await;
        if ranked.is_empty() {
            return Err(AppError::NoRecommendation(format!(
                "none of {} candidate routes could be scored",
                candidate_count
            )));
        }

        tracing::info!(
            candidates = candidate_count,
            ranked = ranked.len(),
            top_route = %ranked[0].id(),
            top_score = ranked[0].score,
            "Ranked {} of {} candidate routes",
            ranked.len(), candidate_count
        );

        Ok(ranked)
    }

    /// Enrich every candidate concurrently, drop those whose enrichment
    /// failed, and sort the rest.
    pub async fn rank_candidates(&self, candidates: Vec<Route>) -> Vec<ScoredRoute> {
        // join_all yields results in input order, which the stable sort relies on
        let enriched = join_all(candidates.into_iter().map(|r| self.enrich(r))).await;
        let mut scored: Vec<ScoredRoute> = enriched.into_iter().flatten().collect();

        sort_by_score(&mut scored);
        scored
    }

    async fn enrich(&self, route: Route) -> Option<ScoredRoute> {
        match self.air_quality.estimate(&route).await {
            Ok(estimate) => {
                let score = score_route(&route, estimate.mean, &self.health_profile);
                Some(ScoredRoute::new(route, estimate, score))
            }
            Err(e) => {
                tracing::warn!(
                    route_id = %route.id,
                    error = %e,
                    "Dropping route {} from ranking: {}",
                    route.id, e
                );
                None
            }
        }
    }

    /// Full pipeline: rank, then explain
    pub async fn recommend(&self, request: &RouteRequest) -> Result<RecommendationResponse> {
        let ranked_routes = self.rank(&request.origin, &request.destination).await?;
        let grounded_routes = self
            .explanation
            .explain(&ranked_routes, &self.health_profile, &self.reroute_options)
            .await;

        Ok(RecommendationResponse {
            ok: true,
            ranked_routes,
            grounded_routes,
        })
    }
}
