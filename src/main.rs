use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use zenway::config::Config;
use zenway::services::recommender::Recommender;
use zenway::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zenway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting ZenWay API server");

    match config.route_source {
        Some(ref rs) => tracing::info!(
            timeout_secs = rs.timeout_secs,
            "Live route source enabled ({})",
            rs.base_url
        ),
        None => tracing::info!("GOOGLE_MAPS_API_KEY not set. Serving built-in routes."),
    }
    match config.explanation {
        Some(ref ex) => tracing::info!(model = %ex.model, "Live explanation service enabled"),
        None => tracing::info!("VERTEX_API_KEY not set. Using canned explanations."),
    }

    let recommender = Recommender::from_config(&config)?;
    let state = Arc::new(AppState { recommender });

    // Build router with CORS and tracing
    let app = Router::new()
        .merge(zenway::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
