pub mod air_quality;
pub mod explanation;
pub mod google_routes;
pub mod recommender;
pub mod route_source;
pub mod scoring;
