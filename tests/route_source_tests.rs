use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use zenway::config::RouteSourceConfig;
use zenway::fixtures::builtin_routes;
use zenway::models::CrowdLevel;
use zenway::services::route_source::RouteSource;

mod common;

fn live_source(base_url: String, timeout_secs: u64) -> RouteSource {
    let config = RouteSourceConfig {
        api_key: "test-key".to_string(),
        base_url,
        timeout_secs,
    };
    RouteSource::new(Some(&config)).unwrap()
}

async fn compute_routes(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some("test-key") {
        return (StatusCode::FORBIDDEN, Json(json!({"error": "bad key"})));
    }
    if body["travelMode"] != "WALK" {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "walking only"})));
    }

    let origin = body["origin"]["address"].as_str().unwrap_or("").to_string();
    let destination = body["destination"]["address"].as_str().unwrap_or("").to_string();

    (
        StatusCode::OK,
        Json(json!({
            "routes": [
                {
                    "duration": "1859s",
                    "distanceMeters": 2300,
                    "legs": [{
                        "steps": [
                            {"distanceMeters": 1500, "staticDuration": "1100s",
                             "startLocation": {"address": origin}},
                            {"distanceMeters": 800, "staticDuration": "759s",
                             "endLocation": {"address": destination}}
                        ]
                    }]
                },
                {"duration": 2400, "distanceMeters": 2900}
            ]
        })),
    )
}

#[tokio::test]
async fn test_live_routes_are_normalized() {
    let base = common::spawn_stub(Router::new().route("/routes", post(compute_routes))).await;
    let source = live_source(format!("{}/routes", base), 5);

    let routes = source.get_routes("Central Park", "Battery Park").await;
    assert_eq!(routes.len(), 2);

    let first = &routes[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.name, "Route 1");
    assert_eq!(first.duration_minutes, 30);
    assert_eq!(first.distance_km, 2.3);
    assert_eq!(first.crowd_level, CrowdLevel::Medium);
    assert_eq!(first.walking_segments.len(), 2);
    assert_eq!(first.walking_segments[0].start_label, "Central Park");
    assert_eq!(first.walking_segments[0].duration_minutes, 18);
    assert!(!first.walking_segments[0].is_last_mile);
    assert!(first.walking_segments[1].is_last_mile);
    assert_eq!(first.walking_segments[1].end_label, "Battery Park");

    assert_eq!(routes[1].id, "2");
    assert_eq!(routes[1].duration_minutes, 40);
    assert!(routes[1].walking_segments.is_empty());
}

#[tokio::test]
async fn test_rejected_request_falls_back() {
    let base = common::spawn_stub(Router::new().route("/routes", post(compute_routes))).await;
    let config = RouteSourceConfig {
        api_key: "wrong-key".to_string(),
        base_url: format!("{}/routes", base),
        timeout_secs: 5,
    };
    let source = RouteSource::new(Some(&config)).unwrap();

    assert_eq!(source.get_routes("A", "B").await, builtin_routes());
}

#[tokio::test]
async fn test_malformed_payload_falls_back() {
    let router = Router::new().route("/routes", post(|| async { "definitely not json" }));
    let base = common::spawn_stub(router).await;
    let source = live_source(format!("{}/routes", base), 5);

    assert_eq!(source.get_routes("A", "B").await, builtin_routes());
}

#[tokio::test]
async fn test_malformed_duration_falls_back() {
    let router = Router::new().route(
        "/routes",
        post(|| async { Json(json!({"routes": [{"duration": "later", "distanceMeters": 10}]})) }),
    );
    let base = common::spawn_stub(router).await;
    let source = live_source(format!("{}/routes", base), 5);

    assert_eq!(source.get_routes("A", "B").await, builtin_routes());
}

#[tokio::test]
async fn test_empty_payload_falls_back() {
    let router = Router::new().route("/routes", post(|| async { Json(json!({"routes": []})) }));
    let base = common::spawn_stub(router).await;
    let source = live_source(format!("{}/routes", base), 5);

    let ids: Vec<String> = source
        .get_routes("A", "B")
        .await
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_slow_source_times_out_and_falls_back() {
    let router = Router::new().route(
        "/routes",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"routes": [{"duration": 60, "distanceMeters": 100}]}))
        }),
    );
    let base = common::spawn_stub(router).await;
    let source = live_source(format!("{}/routes", base), 1);

    let started = std::time::Instant::now();
    let routes = source.get_routes("A", "B").await;
    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(routes, builtin_routes());
}

#[tokio::test]
async fn test_unreachable_source_falls_back() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = live_source(format!("http://{}/routes", addr), 2);
    assert_eq!(source.get_routes("A", "B").await, builtin_routes());
}
