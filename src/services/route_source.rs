use crate::config::RouteSourceConfig;
use crate::error::Result;
use crate::fixtures;
use crate::models::Route;
use crate::services::google_routes::GoogleRoutesClient;

/// Yields candidate routes, falling back to the built-in set whenever the
/// live source is absent, fails, or returns nothing.
#[derive(Clone)]
pub struct RouteSource {
    live: Option<GoogleRoutesClient>,
}

impl RouteSource {
    /// Source that only ever serves the built-in candidates
    pub fn builtin() -> Self {
        RouteSource { live: None }
    }

    pub fn new(config: Option<&RouteSourceConfig>) -> Result<Self> {
        let live = config.map(GoogleRoutesClient::new).transpose()?;
        Ok(RouteSource { live })
    }

    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Never fails: upstream problems are logged and answered with the
    /// built-in set.
    pub async fn get_routes(&self, origin: &str, destination: &str) -> Vec<Route> {
        let Some(ref client) = self.live else {
            tracing::debug!("No live route source configured, using built-in routes");
            return fixtures::builtin_routes();
        };

        match client.compute_routes(origin, destination).await {
            Ok(routes) if !routes.is_empty() => routes,
            Ok(_) => {
                tracing::warn!(
                    origin = %origin,
                    destination = %destination,
                    "Route source returned no routes, falling back to built-in routes"
                );
                fixtures::builtin_routes()
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    origin = %origin,
                    destination = %destination,
                    "Failed to fetch routes: {}. Falling back to built-in routes.",
                    e
                );
                fixtures::builtin_routes()
            }
        }
    }
}
