//! Stable application-wide constants.
//!
//! Values here are scoring coefficients, estimation bounds, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Per-deployment switches (API keys, endpoints, timeouts) live in
//! [`Config`](crate::config::Config) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "8000";

// --- Upstream endpoints and timeouts ---

/// Google Routes API endpoint used when `ROUTES_API_URL` is absent.
pub const DEFAULT_ROUTES_API_URL: &str =
    "https://routes.googleapis.com/directions/v2:computeRoutes";
/// Generative Language API base used when `EXPLANATION_API_URL` is absent.
pub const DEFAULT_EXPLANATION_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Model used when `VERTEX_MODEL` is absent.
pub const DEFAULT_EXPLANATION_MODEL: &str = "gemini-1.5-pro";
/// Route source request timeout. Overridden by `ROUTE_SOURCE_TIMEOUT_SECS`.
pub const DEFAULT_ROUTE_SOURCE_TIMEOUT_SECS: u64 = 10;
/// Explanation request timeout. Overridden by `EXPLANATION_TIMEOUT_SECS`.
pub const DEFAULT_EXPLANATION_TIMEOUT_SECS: u64 = 20;

// --- Air-quality estimation ---

/// Number of readings drawn per route.
pub const AQI_SAMPLE_COUNT: usize = 5;
/// Maximum absolute jitter applied around a route's recorded index.
pub const AQI_BASELINE_JITTER: i32 = 12;
/// Lower bound for any reading derived from a recorded index.
pub const AQI_MIN_SAMPLE: i32 = 10;
/// Index assumed when a route carries no recorded value.
pub const AQI_FALLBACK_BASE: i32 = 50;
/// Maximum absolute jitter applied around [`AQI_FALLBACK_BASE`].
pub const AQI_FALLBACK_JITTER: i32 = 5;
/// Reference latitude when a route has no scenic waypoint (New York City).
pub const DEFAULT_REFERENCE_LAT: f64 = 40.7128;
/// Reference longitude when a route has no scenic waypoint.
pub const DEFAULT_REFERENCE_LNG: f64 = -74.0060;

// --- Route scoring (0-100 base) ---

/// Starting score before penalties and bonuses.
pub const SCORE_BASE: f64 = 100.0;
/// AQI values above this are treated as this value.
pub const SCORE_AQI_CAP: u32 = 200;
/// Points removed at the AQI cap.
pub const SCORE_AQI_WEIGHT: f64 = 40.0;
/// Points removed for a fully crowded route.
pub const SCORE_CROWD_WEIGHT: f64 = 20.0;
/// Points removed per kilometre. Unbounded: long routes may score below zero.
pub const SCORE_DISTANCE_PENALTY_PER_KM: f64 = 2.0;
/// Points added per scenic waypoint.
pub const SCORE_SCENIC_BONUS: f64 = 3.0;
/// AQI strictly above which the asthma penalty applies.
pub const SCORE_ASTHMA_AQI_THRESHOLD: u32 = 100;
/// Points removed for asthmatic users on polluted routes.
pub const SCORE_ASTHMA_PENALTY: f64 = 15.0;
