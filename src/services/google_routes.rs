use crate::config::RouteSourceConfig;
use crate::error::{AppError, Result};
use crate::models::{CrowdLevel, Route, WalkingSegment};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Client for the Google Routes `computeRoutes` endpoint
#[derive(Clone)]
pub struct GoogleRoutesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleRoutesClient {
    /// Build a client whose requests are bounded by the configured timeout
    pub fn new(config: &RouteSourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(GoogleRoutesClient {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Request walking routes between two free-form addresses and normalize
    /// them. An empty list is a valid (if unhelpful) answer.
    pub async fn compute_routes(&self, origin: &str, destination: &str) -> Result<Vec<Route>> {
        let body = json!({
            "origin": { "address": origin },
            "destination": { "address": destination },
            "travelMode": "WALK",
        });

        tracing::debug!(
            origin = %origin,
            destination = %destination,
            "Routes API request: {} -> {}",
            origin, destination
        );

        let response = self
            .client
            .post(&self.base_url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", "*")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::RouteSource(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::RouteSource(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let payload: ComputeRoutesResponse = response
            .json()
            .await
            .map_err(|e| AppError::RouteSource(format!("Failed to parse response: {}", e)))?;

        let routes = normalize_routes(&payload)?;
        tracing::debug!(count = routes.len(), "Routes API returned {} routes", routes.len());
        Ok(routes)
    }
}

// Routes API response types

#[derive(Debug, Deserialize)]
struct ComputeRoutesResponse {
    #[serde(default)]
    routes: Vec<ApiRoute>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiRoute {
    #[serde(default)]
    duration: Option<ApiDuration>,
    #[serde(default)]
    distance_meters: f64,
    #[serde(default)]
    legs: Vec<ApiLeg>,
}

#[derive(Debug, Deserialize)]
struct ApiLeg {
    #[serde(default)]
    steps: Vec<ApiStep>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiStep {
    #[serde(default)]
    distance_meters: f64,
    #[serde(default, alias = "staticDuration")]
    duration: Option<ApiDuration>,
    #[serde(default)]
    start_location: ApiLocation,
    #[serde(default)]
    end_location: ApiLocation,
}

#[derive(Debug, Default, Deserialize)]
struct ApiLocation {
    #[serde(default)]
    address: String,
}

/// Durations arrive either as plain seconds or as Google's `"123s"` form
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiDuration {
    Seconds(f64),
    Text(String),
}

impl ApiDuration {
    fn whole_seconds(&self) -> Result<u64> {
        let secs = match self {
            ApiDuration::Seconds(s) => *s,
            ApiDuration::Text(t) => t
                .trim()
                .trim_end_matches('s')
                .parse::<f64>()
                .map_err(|_| AppError::RouteSource(format!("Malformed duration: '{}'", t)))?,
        };

        if !secs.is_finite() || secs < 0.0 {
            return Err(AppError::RouteSource(format!(
                "Malformed duration: {}",
                secs
            )));
        }
        Ok(secs as u64)
    }
}

/// Truncating seconds -> minutes conversion; a missing duration counts as 0
fn whole_minutes(duration: Option<&ApiDuration>) -> Result<u32> {
    let secs = match duration {
        Some(d) => d.whole_seconds()?,
        None => 0,
    };
    Ok(u32::try_from(secs / 60).unwrap_or(u32::MAX))
}

/// Convert the API payload into candidate routes.
///
/// Each leg's steps become walking segments. After every leg the most
/// recently produced segment is flagged as last mile, so a multi-leg route
/// carries one flag per leg rather than one for the whole route.
fn normalize_routes(payload: &ComputeRoutesResponse) -> Result<Vec<Route>> {
    payload
        .routes
        .iter()
        .enumerate()
        .map(|(idx, api_route)| {
            let mut walking_segments: Vec<WalkingSegment> = Vec::new();

            for leg in &api_route.legs {
                for step in &leg.steps {
                    walking_segments.push(WalkingSegment {
                        distance_km: step.distance_meters / 1000.0,
                        duration_minutes: whole_minutes(step.duration.as_ref())?,
                        start_label: step.start_location.address.clone(),
                        end_label: step.end_location.address.clone(),
                        is_last_mile: false,
                    });
                }

                if let Some(last) = walking_segments.last_mut() {
                    last.is_last_mile = true;
                }
            }

            Ok(Route {
                id: (idx + 1).to_string(),
                name: format!("Route {}", idx + 1),
                route_type: "standard".to_string(),
                duration_minutes: whole_minutes(api_route.duration.as_ref())?,
                distance_km: api_route.distance_meters / 1000.0,
                crowd_level: CrowdLevel::Medium,
                transport_modes: vec!["Walk".to_string()],
                walking_segments,
                scenic_waypoints: Vec::new(),
                aqi: None,
                co2_saved: None,
                calories_burned: None,
                exposure_level: Vec::new(),
            })
        })
        .collect()
}
