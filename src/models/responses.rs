use serde::{Deserialize, Serialize};
use crate::models::domain::{LocalityPrice, MedianRow, PropertyType, SuburbSummary};

/// Response for the median/rate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediansResponse {
    pub rows: Vec<MedianRow>,
    pub total_records: usize,
}

/// One (locality, property type) growth fit; nulls mean insufficient history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthEntry {
    pub locality: String,
    pub property_type: PropertyType,
    pub slope: Option<f64>,
    pub intercept: Option<f64>,
    pub annual_rate: Option<f64>,
}

/// Response for the growth endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthResponse {
    pub groups: Vec<GrowthEntry>,
    pub fitted: usize,
}

/// Summary row with display labels for the map hover
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuburbSummaryView {
    #[serde(flatten)]
    pub summary: SuburbSummary,
    pub annual_rate_house_label: Option<String>,
    pub annual_rate_unit_label: Option<String>,
}

/// Response for the suburb summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub suburbs: Vec<SuburbSummaryView>,
    pub total_suburbs: usize,
}

/// Locality median price with its display label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalityPriceView {
    #[serde(flatten)]
    pub price: LocalityPrice,
    pub label: String,
}

/// Response for the locality price map endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceMapResponse {
    pub localities: Vec<LocalityPriceView>,
    pub price_ceiling: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub sales: usize,
    pub suburbs: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
