use axum::Router;
use std::sync::Arc;
use zenway::config::Config;
use zenway::services::air_quality::{FixedJitter, JitterEstimator};
use zenway::services::explanation::ExplanationService;
use zenway::services::recommender::Recommender;
use zenway::services::route_source::RouteSource;
use zenway::AppState;

/// Serve `router` on an ephemeral local port, returning its base URL
#[allow(dead_code)]
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}

/// Recommender with built-in upstreams and zero jitter
#[allow(dead_code)]
pub fn deterministic_recommender() -> Recommender {
    Recommender::new(
        RouteSource::builtin(),
        Arc::new(JitterEstimator::new(Arc::new(FixedJitter::zero()))),
        ExplanationService::canned(),
    )
}

/// Application router wired exactly as the server does, with both
/// upstreams disabled
#[allow(dead_code)]
pub fn offline_app() -> Router {
    let recommender =
        Recommender::from_config(&Config::offline()).expect("Offline config must build");
    zenway::routes::create_router(Arc::new(AppState { recommender }))
}
