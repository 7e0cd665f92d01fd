pub mod aqi;
pub mod coordinates;
pub mod health;
pub mod recommendation;
pub mod route;

pub use aqi::AqiEstimate;
pub use coordinates::Coordinates;
pub use health::HealthProfile;
pub use recommendation::{
    Recommendation, RecommendationResponse, RerouteOption, RouteRequest,
};
pub use route::{CrowdLevel, Route, ScenicWaypoint, ScoredRoute, WalkingSegment};
