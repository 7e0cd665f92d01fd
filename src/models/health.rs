use serde::{Deserialize, Serialize};

/// Read-only health attributes consulted by scoring and the explanation
/// service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    #[serde(default)]
    pub breathability_score: f64,
    #[serde(default)]
    pub pollutants_avoided: u32,
    #[serde(default)]
    pub zen_points: u32,
    #[serde(default)]
    pub daily_steps: u32,
    #[serde(default)]
    pub daily_steps_goal: u32,
    #[serde(default, alias = "has_asthma")]
    pub has_asthma: bool,
}
