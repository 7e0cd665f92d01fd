use crate::constants::*;
use crate::models::{CrowdLevel, HealthProfile, Route};

/// Crowding penalty fraction (0.0-1.0). Unrecognized labels count as medium.
fn crowd_score(level: CrowdLevel) -> f64 {
    match level {
        CrowdLevel::Low => 0.0,
        CrowdLevel::Medium => 0.5,
        CrowdLevel::High => 1.0,
        CrowdLevel::Unknown => 0.5,
    }
}

/// Calculate route desirability on a 0-100 base.
///
/// Penalizes exposure (capped at AQI 200), crowding and distance, rewards
/// scenic waypoints, and applies an extra penalty for asthmatic users when
/// the mean AQI is strictly above 100. The distance penalty is unbounded so
/// the result may be negative. Ties round half to even.
pub fn score_route(route: &Route, aqi_mean: u32, health: &HealthProfile) -> i32 {
    let aqi_norm = f64::from(aqi_mean.min(SCORE_AQI_CAP)) / f64::from(SCORE_AQI_CAP);

    let mut score = SCORE_BASE;
    score -= aqi_norm * SCORE_AQI_WEIGHT;
    score -= crowd_score(route.crowd_level) * SCORE_CROWD_WEIGHT;
    score -= route.distance_km * SCORE_DISTANCE_PENALTY_PER_KM;
    score += route.scenic_waypoints.len() as f64 * SCORE_SCENIC_BONUS;

    if health.has_asthma && aqi_mean > SCORE_ASTHMA_AQI_THRESHOLD {
        score -= SCORE_ASTHMA_PENALTY;
    }

    score.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::builtin_routes;
    use crate::models::{Coordinates, ScenicWaypoint};
    use serde_json::json;

    fn plain_route(crowd: CrowdLevel, distance_km: f64) -> Route {
        let mut route: Route =
            serde_json::from_value(json!({"id": "t", "name": "Test"})).unwrap();
        route.crowd_level = crowd;
        route.distance_km = distance_km;
        route
    }

    fn asthmatic() -> HealthProfile {
        HealthProfile {
            has_asthma: true,
            ..HealthProfile::default()
        }
    }

    fn scenic(name: &str) -> ScenicWaypoint {
        ScenicWaypoint {
            waypoint_type: "tree".to_string(),
            name: name.to_string(),
            position: Coordinates::default_reference(),
            description: String::new(),
        }
    }

    #[test]
    fn test_ideal_route_scores_100() {
        let route = plain_route(CrowdLevel::Low, 0.0);
        assert_eq!(score_route(&route, 0, &HealthProfile::default()), 100);
    }

    #[test]
    fn test_aqi_monotonic_and_flat_past_cap() {
        let route = plain_route(CrowdLevel::Medium, 2.5);
        let health = asthmatic();

        let mut previous = score_route(&route, 0, &health);
        for aqi in 1..=300 {
            let current = score_route(&route, aqi, &health);
            assert!(current <= previous, "score rose at aqi {}", aqi);
            previous = current;
        }

        assert_eq!(
            score_route(&route, 200, &health),
            score_route(&route, 500, &health)
        );
    }

    #[test]
    fn test_each_scenic_waypoint_adds_three() {
        let mut route = plain_route(CrowdLevel::High, 1.0);
        let health = HealthProfile::default();
        let before = score_route(&route, 40, &health);

        route.scenic_waypoints.push(scenic("City Park"));
        assert_eq!(score_route(&route, 40, &health), before + 3);

        route.scenic_waypoints.push(scenic("Riverside"));
        assert_eq!(score_route(&route, 40, &health), before + 6);
    }

    #[test]
    fn test_asthma_penalty_is_strictly_above_100() {
        let route = plain_route(CrowdLevel::Medium, 3.0);
        let healthy = HealthProfile::default();

        assert_eq!(
            score_route(&route, 101, &asthmatic()),
            score_route(&route, 101, &healthy) - 15
        );
        assert_eq!(
            score_route(&route, 100, &asthmatic()),
            score_route(&route, 100, &healthy)
        );
    }

    #[test]
    fn test_crowd_levels() {
        let health = HealthProfile::default();
        assert_eq!(score_route(&plain_route(CrowdLevel::Low, 0.0), 0, &health), 100);
        assert_eq!(score_route(&plain_route(CrowdLevel::Medium, 0.0), 0, &health), 90);
        assert_eq!(score_route(&plain_route(CrowdLevel::High, 0.0), 0, &health), 80);
        assert_eq!(score_route(&plain_route(CrowdLevel::Unknown, 0.0), 0, &health), 90);
    }

    #[test]
    fn test_defaults_for_sparse_record() {
        // distance 1.0, medium crowd, no waypoints: 100 - 10 - 10 - 2
        let route: Route = serde_json::from_value(json!({"id": "x", "name": "Sparse"})).unwrap();
        assert_eq!(score_route(&route, 50, &HealthProfile::default()), 78);
    }

    #[test]
    fn test_long_route_goes_negative() {
        let route = plain_route(CrowdLevel::High, 60.0);
        assert_eq!(score_route(&route, 200, &HealthProfile::default()), -80);
    }

    #[test]
    fn test_rounds_half_to_even() {
        let health = HealthProfile::default();
        // 100 - 0.25 * 2 = 99.5 -> 100, 100 - 0.75 * 2 = 98.5 -> 98
        assert_eq!(score_route(&plain_route(CrowdLevel::Low, 0.25), 0, &health), 100);
        assert_eq!(score_route(&plain_route(CrowdLevel::Low, 0.75), 0, &health), 98);
    }

    #[test]
    fn test_builtin_routes_at_recorded_aqi() {
        let routes = builtin_routes();
        let health = HealthProfile::default();

        // Zen: 100 - 7 - 0 - 8.4 + 9 = 93.6
        assert_eq!(score_route(&routes[0], 35, &health), 94);
        // Fastest: 100 - 22 - 20 - 7.6 = 50.4
        assert_eq!(score_route(&routes[1], 110, &health), 50);
        // Balanced: 100 - 13 - 10 - 8 + 3 = 72
        assert_eq!(score_route(&routes[2], 65, &health), 72);
        // Fastest for an asthmatic user
        assert_eq!(score_route(&routes[1], 110, &asthmatic()), 35);
    }
}
