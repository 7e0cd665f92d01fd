use crate::models::{CrowdLevel, ScoredRoute};
use serde::{Deserialize, Serialize};

/// Fallback plan offered alongside a recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RerouteOption {
    pub id: String,
    #[serde(rename = "type")]
    pub option_type: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Extra minutes compared to the original plan
    pub delay: u32,
    pub crowd_level: CrowdLevel,
    pub stress_level: u32,
    pub details: String,
}

/// Structured reply from the explanation service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommended_route_id: Option<String>,
    pub explanation: String,
    #[serde(default)]
    pub safety_tips: Vec<String>,
    #[serde(default)]
    pub alternatives: Vec<String>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    /// Reserved for personalization
    #[serde(default)]
    pub uid: Option<String>,
}

impl RouteRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.origin.trim().is_empty() {
            return Err("origin must not be empty".to_string());
        }
        if self.destination.trim().is_empty() {
            return Err("destination must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub ok: bool,
    pub ranked_routes: Vec<ScoredRoute>,
    pub grounded_routes: Recommendation,
}
