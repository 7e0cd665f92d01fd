use serde::{Deserialize, Serialize};

/// Sampled pollution readings for one route
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AqiEstimate {
    pub samples: Vec<u32>,
    /// Floor of the sample average
    pub mean: u32,
}

impl AqiEstimate {
    pub fn from_samples(samples: Vec<u32>) -> Self {
        let mean = if samples.is_empty() {
            0
        } else {
            let sum: u64 = samples.iter().map(|&s| u64::from(s)).sum();
            u32::try_from(sum / samples.len() as u64).unwrap_or(u32::MAX)
        };
        AqiEstimate { samples, mean }
    }
}
