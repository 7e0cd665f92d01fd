use crate::models::{AqiEstimate, Coordinates};
use serde::{Deserialize, Serialize};

/// Crowding reported for a route. Labels outside the known set deserialize
/// to `Unknown` rather than failing the whole record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CrowdLevel {
    Low,
    #[default]
    Medium,
    High,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalkingSegment {
    pub distance_km: f64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub start_label: String,
    #[serde(default)]
    pub end_label: String,
    #[serde(default)]
    pub is_last_mile: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenicWaypoint {
    #[serde(rename = "type")]
    pub waypoint_type: String,
    pub name: String,
    pub position: Coordinates,
    #[serde(default)]
    pub description: String,
}

/// A candidate route. Optional fields get their defaults here, at the
/// deserialization boundary, so scoring never sees a partial record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    pub name: String,
    /// Category tag (health, fast, standard, ...)
    #[serde(rename = "type", default = "default_route_type")]
    pub route_type: String,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default = "default_distance_km")]
    pub distance_km: f64,
    #[serde(default)]
    pub crowd_level: CrowdLevel,
    #[serde(default)]
    pub transport_modes: Vec<String>,
    #[serde(default)]
    pub walking_segments: Vec<WalkingSegment>,
    #[serde(default)]
    pub scenic_waypoints: Vec<ScenicWaypoint>,
    /// Recorded air-quality index, used to seed estimation
    #[serde(
        rename = "baselineAqi",
        alias = "aqi",
        skip_serializing_if = "Option::is_none"
    )]
    pub aqi: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub co2_saved: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<u32>,
    #[serde(default)]
    pub exposure_level: Vec<u32>,
}

fn default_route_type() -> String {
    "standard".to_string()
}

fn default_distance_km() -> f64 {
    1.0
}

impl Route {
    /// First scenic waypoint position, if any
    pub fn first_waypoint_position(&self) -> Option<Coordinates> {
        self.scenic_waypoints.first().map(|wp| wp.position)
    }
}

/// A route enriched with its air-quality estimate and desirability score.
/// Lives for a single request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredRoute {
    #[serde(flatten)]
    pub route: Route,
    #[serde(rename = "aqi")]
    pub aqi_estimate: AqiEstimate,
    pub score: i32,
}

impl ScoredRoute {
    pub fn new(route: Route, aqi_estimate: AqiEstimate, score: i32) -> Self {
        ScoredRoute {
            route,
            aqi_estimate,
            score,
        }
    }

    pub fn id(&self) -> &str {
        &self.route.id
    }
}
