use crate::constants::*;
use crate::error::Result;
use crate::models::{AqiEstimate, Coordinates, Route};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Source of symmetric integer jitter. Shared across concurrent estimations,
/// so implementations must be safe to call from several tasks at once.
pub trait JitterSource: Send + Sync {
    /// Uniform integer in `[-max_abs, max_abs]`
    fn offset(&self, max_abs: i32) -> i32;
}

/// Jitter drawn from the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn offset(&self, max_abs: i32) -> i32 {
        rand::random_range(-max_abs..=max_abs)
    }
}

/// Replays a fixed sequence of offsets, cycling when exhausted. Offsets are
/// clamped into the requested range.
#[derive(Debug, Default)]
pub struct FixedJitter {
    offsets: Vec<i32>,
    cursor: AtomicUsize,
}

impl FixedJitter {
    pub fn new(offsets: Vec<i32>) -> Self {
        FixedJitter {
            offsets,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always returns 0
    pub fn zero() -> Self {
        Self::new(vec![0])
    }
}

impl JitterSource for FixedJitter {
    fn offset(&self, max_abs: i32) -> i32 {
        if self.offsets.is_empty() {
            return 0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.offsets.len();
        self.offsets[idx].clamp(-max_abs, max_abs)
    }
}

/// Per-route air-quality lookup
#[async_trait]
pub trait AirQualitySource: Send + Sync {
    async fn estimate(&self, route: &Route) -> Result<AqiEstimate>;
}

/// Simulates repeated sampling around a route's recorded index (or a fixed
/// baseline when it has none).
#[derive(Clone)]
pub struct JitterEstimator {
    jitter: Arc<dyn JitterSource>,
}

impl JitterEstimator {
    pub fn new(jitter: Arc<dyn JitterSource>) -> Self {
        JitterEstimator { jitter }
    }

    /// Point an air-quality lookup would be made at: first scenic waypoint,
    /// else the default reference.
    pub fn reference_point(route: &Route) -> Coordinates {
        route
            .first_waypoint_position()
            .and_then(|p| Coordinates::new(p.lat, p.lng).ok())
            .unwrap_or_else(Coordinates::default_reference)
    }

    // `_at` is unused until a measured source replaces the simulation.
    fn draw_samples(&self, _at: Coordinates, baseline: Option<u32>) -> Vec<u32> {
        (0..AQI_SAMPLE_COUNT)
            .map(|_| match baseline {
                Some(base) => i32::try_from(base)
                    .unwrap_or(i32::MAX)
                    .saturating_add(self.jitter.offset(AQI_BASELINE_JITTER))
                    .max(AQI_MIN_SAMPLE) as u32,
                None => (AQI_FALLBACK_BASE + self.jitter.offset(AQI_FALLBACK_JITTER)) as u32,
            })
            .collect()
    }
}

impl Default for JitterEstimator {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngJitter))
    }
}

#[async_trait]
impl AirQualitySource for JitterEstimator {
    async fn estimate(&self, route: &Route) -> Result<AqiEstimate> {
        let reference = Self::reference_point(route);
        let estimate = AqiEstimate::from_samples(self.draw_samples(reference, route.aqi));

        tracing::debug!(
            route_id = %route.id,
            lat = reference.lat,
            lng = reference.lng,
            baseline = ?route.aqi,
            mean = estimate.mean,
            "AQI estimate for route {}: mean {}",
            route.id, estimate.mean
        );

        Ok(estimate)
    }
}
