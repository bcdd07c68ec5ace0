use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for the median/rate table of the trend view
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MedianRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub locality: Option<String>,
    /// Exact prices to keep (multiples of a million from the price slider)
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub prices: Option<Vec<f64>>,
    /// Exact bedroom counts to keep
    #[validate(length(max = 100))]
    #[serde(default)]
    pub bedrooms: Option<Vec<u32>>,
}

/// Request for the suburb summary table
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SummaryRequest {
    #[validate(range(min = 0.0))]
    #[serde(alias = "minDistanceKm", default)]
    pub min_distance_km: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "maxDistanceKm", default)]
    pub max_distance_km: Option<f64>,
}

impl SummaryRequest {
    pub fn has_distance_range(&self) -> bool {
        self.min_distance_km.is_some() || self.max_distance_km.is_some()
    }

    /// Inclusive bounds, open ends filled with 0 and infinity
    pub fn bounds(&self) -> (f64, f64) {
        (
            self.min_distance_km.unwrap_or(0.0),
            self.max_distance_km.unwrap_or(f64::INFINITY),
        )
    }
}

/// Request for trimmed locality boundaries
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct BoundaryRequest {
    #[validate(length(max = 5000))]
    #[serde(default)]
    pub localities: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "minDistanceKm", default)]
    pub min_distance_km: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(alias = "maxDistanceKm", default)]
    pub max_distance_km: Option<f64>,
}

impl BoundaryRequest {
    pub fn distance_range(&self) -> SummaryRequest {
        SummaryRequest {
            min_distance_km: self.min_distance_km,
            max_distance_km: self.max_distance_km,
        }
    }
}
