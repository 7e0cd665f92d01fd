//! Built-in data served when no live upstream is configured.

use crate::models::{
    Coordinates, CrowdLevel, HealthProfile, RerouteOption, Route, ScenicWaypoint, WalkingSegment,
};

fn last_mile(distance_km: f64, duration_minutes: u32) -> Vec<WalkingSegment> {
    vec![WalkingSegment {
        distance_km,
        duration_minutes,
        start_label: "Transit Station".to_string(),
        end_label: "Destination".to_string(),
        is_last_mile: true,
    }]
}

fn waypoint(kind: &str, name: &str, lat: f64, lng: f64, description: &str) -> ScenicWaypoint {
    ScenicWaypoint {
        waypoint_type: kind.to_string(),
        name: name.to_string(),
        position: Coordinates { lat, lng },
        description: description.to_string(),
    }
}

fn modes(legs: &[&str]) -> Vec<String> {
    legs.iter().map(|m| m.to_string()).collect()
}

/// The three fallback candidates, ids "1", "2", "3" in that order
pub fn builtin_routes() -> Vec<Route> {
    vec![
        Route {
            id: "1".to_string(),
            name: "Zen Route".to_string(),
            route_type: "health".to_string(),
            duration_minutes: 25,
            distance_km: 4.2,
            crowd_level: CrowdLevel::Low,
            transport_modes: modes(&["Walk", "Tram", "Walk"]),
            walking_segments: last_mile(0.8, 10),
            scenic_waypoints: vec![
                waypoint("tree", "City Park", 40.7128, -74.0060, "High Oxygen Zone"),
                waypoint("shade", "Tree Canopy", 40.7138, -74.0070, "Shaded pathway"),
                waypoint("water", "Riverside Path", 40.7148, -74.0080, "Scenic waterfront"),
            ],
            aqi: Some(35),
            co2_saved: Some(200),
            calories_burned: Some(80),
            exposure_level: vec![20, 25, 30, 35, 30, 25, 20],
        },
        Route {
            id: "2".to_string(),
            name: "Fastest Route".to_string(),
            route_type: "fast".to_string(),
            duration_minutes: 20,
            distance_km: 3.8,
            crowd_level: CrowdLevel::High,
            transport_modes: modes(&["Walk", "Bus", "Walk"]),
            walking_segments: last_mile(0.3, 4),
            scenic_waypoints: Vec::new(),
            aqi: Some(110),
            co2_saved: None,
            calories_burned: None,
            exposure_level: vec![80, 90, 110, 105, 95, 85, 80],
        },
        Route {
            id: "3".to_string(),
            name: "Balanced Route".to_string(),
            route_type: "standard".to_string(),
            duration_minutes: 23,
            distance_km: 4.0,
            crowd_level: CrowdLevel::Medium,
            transport_modes: modes(&["Walk", "Metro", "Walk"]),
            walking_segments: last_mile(0.5, 7),
            scenic_waypoints: vec![waypoint(
                "camera",
                "City Viewpoint",
                40.7133,
                -74.0065,
                "Great photo spot",
            )],
            aqi: Some(65),
            co2_saved: Some(120),
            calories_burned: Some(50),
            exposure_level: vec![45, 55, 65, 70, 65, 55, 50],
        },
    ]
}

pub fn default_health_profile() -> HealthProfile {
    HealthProfile {
        breathability_score: 8.5,
        pollutants_avoided: 0,
        zen_points: 1250,
        daily_steps: 6500,
        daily_steps_goal: 7000,
        has_asthma: false,
    }
}

pub fn reroute_options() -> Vec<RerouteOption> {
    vec![
        RerouteOption {
            id: "r1".to_string(),
            option_type: "health".to_string(),
            name: "The Health Backup".to_string(),
            description: "Grab a scooter (2 min walk). Scenic route through the waterfront."
                .to_string(),
            icon: "scooter".to_string(),
            delay: 4,
            crowd_level: CrowdLevel::Low,
            stress_level: 2,
            details: "Bypass the crowd".to_string(),
        },
        RerouteOption {
            id: "r2".to_string(),
            option_type: "standard".to_string(),
            name: "The Standard Backup".to_string(),
            description: "Wait for next bus. Standing room only expected.".to_string(),
            icon: "bus".to_string(),
            delay: 15,
            crowd_level: CrowdLevel::High,
            stress_level: 8,
            details: "High Crowd Warning".to_string(),
        },
    ]
}
